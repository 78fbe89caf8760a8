//! Views
//!
//! Framework-agnostic state for the two screens. Each view exposes a
//! `begin_submit`/`finish` pair around its network call so an event loop can
//! await the request without holding the view borrowed, plus an async
//! `submit` that does all three steps in one go.

pub mod dashboard;
pub mod login;

pub use dashboard::{summarize, Dashboard, DashboardError, Phase, ResultSummary};
pub use login::{LoginError, LoginForm};
