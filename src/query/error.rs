//! Query validation errors

use thiserror::Error;

/// Reasons a query is rejected before any request is made
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// `from` or `to` is empty or not a calendar date
    #[error("Start and end date are required")]
    MissingDates,

    /// `from` falls after `to`
    #[error("Start date must not be after end date")]
    InvalidRange,
}
