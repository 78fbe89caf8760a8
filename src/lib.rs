//! # DataVision
//!
//! Client core for UCCP DataVision: token-based login and a dashboard that
//! counts work code communications over a date range.
//!
//! The same core runs in two hosts: the native CLI in this crate and the
//! Leptos single-page app in `datavision-ui`.
//!
//! ## Modules
//!
//! - [`client`]: HTTP client adapter with bearer token injection
//! - [`storage`]: durable client-side key/value storage
//! - [`router`]: hash router for the `login` and `dashboard` views
//! - [`shell`]: application shell and session bootstrap
//! - [`views`]: login and dashboard state machines
//! - [`query`]: analytics query form and validation
//! - [`i18n`]: languages, string catalog, date and number formatting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use datavision::prelude::*;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage: Rc<dyn Storage> = Rc::new(FileStorage::open(FileStorage::default_path())?);
//!     let transport = ReqwestTransport::new(Duration::from_secs(30))?;
//!     let client = ApiClient::new(DEFAULT_API_BASE, transport, Rc::clone(&storage));
//!     let shell = Shell::new(storage, Router::new(Rc::new(MemoryLocation::new("#/"))));
//!
//!     if shell.bootstrap(&client).await {
//!         let mut dashboard = Dashboard::new();
//!         dashboard.edit(Field::From, "2024-01-01");
//!         dashboard.edit(Field::To, "2024-01-31");
//!         dashboard.submit(&client, shell.router()).await;
//!
//!         if let Some(summary) = dashboard.summary(shell.language(), shell.catalog()) {
//!             println!("{}: {}", summary.range, summary.count);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
#[cfg(feature = "native")]
pub mod config;
pub mod i18n;
pub mod query;
pub mod router;
pub mod session;
pub mod shell;
pub mod storage;
pub mod views;

// Re-export top-level types for convenience
pub use client::{ApiClient, Backend, ClientError, ClientResult, Transport};
pub use i18n::{Catalog, Language, TextKey};
pub use query::{CountQuery, CountResult, Field, QueryError, QueryForm};
pub use router::{Location, MemoryLocation, Route, Router};
pub use session::{Session, User};
pub use shell::Shell;
pub use storage::{MemoryStorage, Storage, StorageError};
pub use views::{Dashboard, DashboardError, LoginError, LoginForm};

#[cfg(feature = "native")]
pub use client::ReqwestTransport;
#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
#[cfg(feature = "native")]
pub use storage::FileStorage;

/// Everything a host needs to wire up the client
pub mod prelude {
    pub use crate::client::{ApiClient, Backend, ClientError, DEFAULT_API_BASE};
    pub use crate::i18n::{Catalog, Language, TextKey};
    pub use crate::query::Field;
    pub use crate::router::{Location, MemoryLocation, Route, Router};
    pub use crate::shell::Shell;
    pub use crate::storage::{MemoryStorage, Storage};
    pub use crate::views::{Dashboard, LoginForm};

    #[cfg(feature = "native")]
    pub use crate::client::ReqwestTransport;
    #[cfg(feature = "native")]
    pub use crate::storage::FileStorage;
}
