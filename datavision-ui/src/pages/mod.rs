//! Pages
//!
//! One page component per route.

pub mod dashboard;
pub mod login;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
