//! Dashboard View
//!
//! One query lifecycle at a time:
//!
//! ```text
//! Idle ──submit──▶ (validate) ──ok──▶ Loading ──▶ Resolved | Errored
//!                      └──invalid──▶ Errored
//! ```
//!
//! Editing any field while a result or error is on screen drops both and
//! returns to `Idle`.

use crate::client::{Backend, ClientError, ClientResult};
use crate::i18n::{format_count, format_range, Catalog, Language, TextKey};
use crate::query::{CountQuery, CountResult, Field, QueryError, QueryForm};
use crate::router::{Route, Router};
use crate::storage::{keys, Storage};

/// Where the current query lifecycle stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Resolved,
    Errored,
}

/// Inline dashboard errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardError {
    MissingDates,
    InvalidRange,
    FetchFailed,
}

impl DashboardError {
    pub fn key(&self) -> TextKey {
        match self {
            DashboardError::MissingDates => TextKey::MissingDates,
            DashboardError::InvalidRange => TextKey::InvalidRange,
            DashboardError::FetchFailed => TextKey::FetchFailed,
        }
    }
}

impl From<QueryError> for DashboardError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::MissingDates => DashboardError::MissingDates,
            QueryError::InvalidRange => DashboardError::InvalidRange,
        }
    }
}

/// Rendered result block, all strings already localized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    /// Submitted work code, or the "all types" label
    pub filter: String,
    pub range: String,
    pub count: String,
}

/// Dashboard state: form, phase, and the result/error pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    form: QueryForm,
    phase: Phase,
    result: Option<CountResult>,
    error: Option<DashboardError>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &QueryForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&CountResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<DashboardError> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Submit control state: idle and both dates filled
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.form.has_dates()
    }

    /// Redirect to login when no token is stored
    pub fn guard(storage: &dyn Storage, router: &Router) -> bool {
        let has_token = storage
            .get(keys::AUTH_TOKEN)
            .is_some_and(|token| !token.is_empty());
        if !has_token {
            router.navigate(Route::Login);
        }
        has_token
    }

    /// Update a field, dropping any stale result or error.
    ///
    /// Ignored while a query is in flight so the result always matches the form.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.is_loading() {
            tracing::debug!(?field, "Edit ignored while loading");
            return;
        }
        self.form.set(field, value);
        if self.result.is_some() || self.error.is_some() {
            self.result = None;
            self.error = None;
            self.phase = Phase::Idle;
        }
    }

    /// Validate and enter `Loading`.
    ///
    /// Returns the query to send, or `None` when validation failed (error is
    /// set inline) or a query is already in flight.
    pub fn begin_submit(&mut self) -> Option<CountQuery> {
        if self.is_loading() {
            return None;
        }

        match self.form.validate() {
            Ok(query) => {
                self.phase = Phase::Loading;
                self.result = None;
                self.error = None;
                Some(query)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Query rejected");
                self.phase = Phase::Errored;
                self.error = Some(e.into());
                None
            }
        }
    }

    /// Settle the in-flight query. Returns `Some(Route::Login)` when the
    /// session has expired; no inline error is shown in that case.
    pub fn finish(&mut self, outcome: ClientResult<CountResult>) -> Option<Route> {
        match outcome {
            Ok(result) => {
                tracing::info!(count = result.count, "Query resolved");
                self.phase = Phase::Resolved;
                self.result = Some(result);
                self.error = None;
                None
            }
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Session expired during query");
                self.phase = Phase::Idle;
                self.result = None;
                Some(Route::Login)
            }
            Err(e) => {
                self.fail(&e);
                None
            }
        }
    }

    fn fail(&mut self, err: &ClientError) {
        tracing::warn!(error = %err, "Query failed");
        self.phase = Phase::Errored;
        self.result = None;
        self.error = Some(DashboardError::FetchFailed);
    }

    /// Validate, send, settle, and follow a session-expiry redirect
    pub async fn submit<B: Backend + ?Sized>(&mut self, backend: &B, router: &Router) {
        let Some(query) = self.begin_submit() else {
            return;
        };
        let outcome = backend.count(&query).await;
        if let Some(route) = self.finish(outcome) {
            router.navigate(route);
        }
    }

    /// Submit button label
    pub fn submit_label(&self, language: Language, catalog: &Catalog) -> String {
        let key = if self.is_loading() {
            TextKey::SubmitLoading
        } else {
            TextKey::SubmitIdle
        };
        catalog.text(language, key)
    }

    pub fn error_message(&self, language: Language, catalog: &Catalog) -> Option<String> {
        self.error.map(|e| catalog.text(language, e.key()))
    }

    pub fn summary(&self, language: Language, catalog: &Catalog) -> Option<ResultSummary> {
        self.result
            .as_ref()
            .map(|result| summarize(result, language, catalog))
    }
}

/// Localize a result for display
pub fn summarize(result: &CountResult, language: Language, catalog: &Catalog) -> ResultSummary {
    ResultSummary {
        filter: result
            .workcode()
            .map(str::to_string)
            .unwrap_or_else(|| catalog.text(language, TextKey::ResultAllTypes)),
        range: format_range(&result.from, &result.to, language),
        count: format_count(result.count, language),
    }
}
