//! Locale-aware formatting

use chrono::{DateTime, Locale, NaiveDate, TimeZone, Utc};

use super::Language;
use crate::query::DATE_FORMAT;

impl Language {
    fn date_locale(&self) -> Locale {
        match self {
            Language::En => Locale::en_US,
            Language::De => Locale::de_DE,
        }
    }

    /// Two-digit day, long month name, full year
    fn long_date_pattern(&self) -> &'static str {
        match self {
            Language::En => "%B %d, %Y",
            Language::De => "%d. %B %Y",
        }
    }

    /// Thousands separator: en-US and de-CH conventions
    fn group_separator(&self) -> char {
        match self {
            Language::En => ',',
            Language::De => '\u{2019}',
        }
    }
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// `2024-01-05` → `January 05, 2024` / `05. Januar 2024`.
///
/// Values that aren't dates are returned as given.
pub fn format_long_date(value: &str, language: Language) -> String {
    let Some(midnight) = parse_calendar_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)) else {
        return value.to_string();
    };

    Utc.from_utc_datetime(&midnight)
        .format_localized(language.long_date_pattern(), language.date_locale())
        .to_string()
}

/// `from – to`, both as long dates
pub fn format_range(from: &str, to: &str, language: Language) -> String {
    format!(
        "{} – {}",
        format_long_date(from, language),
        format_long_date(to, language)
    )
}

/// Integer with digit grouping: `1234567` → `1,234,567` / `1’234’567`
pub fn format_count(count: u64, language: Language) -> String {
    let digits = count.to_string();
    let separator = language.group_separator();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date_english() {
        assert_eq!(format_long_date("2024-01-05", Language::En), "January 05, 2024");
        assert_eq!(format_long_date("2024-12-31", Language::En), "December 31, 2024");
    }

    #[test]
    fn test_long_date_german() {
        assert_eq!(format_long_date("2024-01-05", Language::De), "05. Januar 2024");
        assert_eq!(format_long_date("2024-03-01", Language::De), "01. März 2024");
    }

    #[test]
    fn test_long_date_accepts_timestamps() {
        assert_eq!(
            format_long_date("2024-01-31T00:00:00Z", Language::En),
            "January 31, 2024"
        );
    }

    #[test]
    fn test_long_date_passthrough() {
        assert_eq!(format_long_date("soon", Language::En), "soon");
    }

    #[test]
    fn test_range() {
        assert_eq!(
            format_range("2024-01-01", "2024-01-31", Language::En),
            "January 01, 2024 – January 31, 2024"
        );
    }

    #[test]
    fn test_count_grouping() {
        assert_eq!(format_count(0, Language::En), "0");
        assert_eq!(format_count(42, Language::En), "42");
        assert_eq!(format_count(999, Language::De), "999");
        assert_eq!(format_count(1000, Language::En), "1,000");
        assert_eq!(format_count(1234567, Language::En), "1,234,567");
        assert_eq!(format_count(1234567, Language::De), "1\u{2019}234\u{2019}567");
        assert_eq!(format_count(100000, Language::De), "100\u{2019}000");
    }
}
