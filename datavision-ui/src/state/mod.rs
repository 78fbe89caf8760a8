//! State Management
//!
//! Browser-backed storage and location, plus the reactive app state.

pub mod app;
pub mod browser;

pub use app::{provide_app_state, use_app_state, AppState};
pub use browser::{BrowserLocation, LocalStorage};
