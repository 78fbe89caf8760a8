//! UI Components
//!
//! Reusable Leptos components shared by the login and dashboard pages.

pub mod language_switch;
pub mod result_card;

pub use language_switch::LanguageSwitch;
pub use result_card::{ErrorCard, ResultCard};
