//! Analytics Query
//!
//! The date-range form behind the dashboard, its client-side validation, and
//! the request/response shapes of `GET /api/pcmo-count`.

mod error;

pub use error::QueryError;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Date format used by `<input type="date">` and by the backend
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form contents exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryForm {
    pub workcode: String,
    pub from: String,
    pub to: String,
}

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Workcode,
    From,
    To,
}

impl QueryForm {
    pub fn new(workcode: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            workcode: workcode.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Workcode => self.workcode = value,
            Field::From => self.from = value,
            Field::To => self.to = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Workcode => &self.workcode,
            Field::From => &self.from,
            Field::To => &self.to,
        }
    }

    /// Both dates filled in (not necessarily valid)
    pub fn has_dates(&self) -> bool {
        !self.from.is_empty() && !self.to.is_empty()
    }

    /// Validate the form into a query ready to send.
    ///
    /// Dates are compared as calendar dates. A whitespace-only work code is
    /// dropped entirely.
    pub fn validate(&self) -> Result<CountQuery, QueryError> {
        let from = parse_date(&self.from).ok_or(QueryError::MissingDates)?;
        let to = parse_date(&self.to).ok_or(QueryError::MissingDates)?;

        if from > to {
            return Err(QueryError::InvalidRange);
        }

        let workcode = self.workcode.trim();
        Ok(CountQuery {
            workcode: (!workcode.is_empty()).then(|| workcode.to_string()),
            from,
            to,
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// A validated query: `from <= to`, work code trimmed and non-empty if set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountQuery {
    pub workcode: Option<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl CountQuery {
    /// Query-string parameters; `workcode` only when present
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("from".to_string(), self.from.format(DATE_FORMAT).to_string()),
            ("to".to_string(), self.to.format(DATE_FORMAT).to_string()),
        ];
        if let Some(workcode) = &self.workcode {
            params.push(("workcode".to_string(), workcode.clone()));
        }
        params
    }
}

/// `GET /api/pcmo-count` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountResult {
    #[serde(default)]
    pub workcode: Option<String>,
    pub from: String,
    pub to: String,
    /// Missing or `null` reads as 0
    #[serde(default, deserialize_with = "null_as_zero")]
    pub count: u64,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

impl CountResult {
    /// Echoed work code, `None` when the backend counted all types
    pub fn workcode(&self) -> Option<&str> {
        self.workcode.as_deref().filter(|code| !code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_validate_full_query() {
        let form = QueryForm::new("  PCMO.OC1 ", "2024-01-01", "2024-01-31");
        let query = form.validate().unwrap();

        assert_eq!(query.workcode.as_deref(), Some("PCMO.OC1"));
        assert_eq!(query.from, date("2024-01-01"));
        assert_eq!(query.to, date("2024-01-31"));
    }

    #[test]
    fn test_missing_dates() {
        assert_eq!(
            QueryForm::new("", "", "2024-01-31").validate(),
            Err(QueryError::MissingDates)
        );
        assert_eq!(
            QueryForm::new("", "2024-01-01", "").validate(),
            Err(QueryError::MissingDates)
        );
        assert_eq!(
            QueryForm::new("", "not-a-date", "2024-01-31").validate(),
            Err(QueryError::MissingDates)
        );
    }

    #[test]
    fn test_inverted_range() {
        let form = QueryForm::new("", "2024-02-01", "2024-01-01");
        assert_eq!(form.validate(), Err(QueryError::InvalidRange));
    }

    #[test]
    fn test_range_compares_dates_not_strings() {
        // "2024-1-5" sorts after "2024-01-10" as a string but is an earlier day
        let form = QueryForm::new("", "2024-1-5", "2024-01-10");
        assert!(form.validate().is_ok());

        let form = QueryForm::new("", "2024-01-10", "2024-1-5");
        assert_eq!(form.validate(), Err(QueryError::InvalidRange));
    }

    #[test]
    fn test_same_day_is_valid() {
        let form = QueryForm::new("", "2024-03-15", "2024-03-15");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_blank_workcode_omitted() {
        let query = QueryForm::new(" \t ", "2024-01-01", "2024-01-02")
            .validate()
            .unwrap();
        assert_eq!(query.workcode, None);

        let params = query.params();
        assert_eq!(params.len(), 2);
        assert!(params.iter().all(|(key, _)| key != "workcode"));
    }

    #[test]
    fn test_params_with_workcode() {
        let query = QueryForm::new("KCPF.BD1", "2024-01-01", "2024-01-31")
            .validate()
            .unwrap();
        assert_eq!(
            query.params(),
            vec![
                ("from".to_string(), "2024-01-01".to_string()),
                ("to".to_string(), "2024-01-31".to_string()),
                ("workcode".to_string(), "KCPF.BD1".to_string()),
            ]
        );
    }

    #[test]
    fn test_result_defaults() {
        let result: CountResult =
            serde_json::from_str(r#"{"from": "2024-01-01", "to": "2024-01-31"}"#).unwrap();
        assert_eq!(result.count, 0);
        assert_eq!(result.workcode(), None);

        let result: CountResult = serde_json::from_str(
            r#"{"workcode": "", "from": "2024-01-01", "to": "2024-01-31", "count": 3}"#,
        )
        .unwrap();
        assert_eq!(result.workcode(), None);
        assert_eq!(result.count, 3);

        let result: CountResult = serde_json::from_str(
            r#"{"from": "2024-01-01", "to": "2024-01-31", "count": null}"#,
        )
        .unwrap();
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_form_field_access() {
        let mut form = QueryForm::default();
        assert!(!form.has_dates());
        form.set(Field::From, "2024-01-01");
        form.set(Field::To, "2024-01-02");
        assert!(form.has_dates());
        assert_eq!(form.get(Field::To), "2024-01-02");
    }
}
