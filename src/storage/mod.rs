//! Client-Side Storage
//!
//! Durable key/value storage for the three values that survive a reload:
//!
//! - **token**: bearer credential issued at login
//! - **display name**: cached user name, superseded by the next session probe
//! - **language**: UI language preference
//!
//! Backends:
//!
//! - **memory**: ephemeral, for tests
//! - **file**: JSON file under the platform data directory (native builds)
//!
//! The browser build implements [`Storage`] over `window.localStorage`.
//!
//! # Example
//!
//! ```rust
//! use datavision::storage::{keys, MemoryStorage, Storage};
//!
//! let storage = MemoryStorage::new();
//! storage.set(keys::LANGUAGE, "de").unwrap();
//! assert_eq!(storage.get(keys::LANGUAGE).as_deref(), Some("de"));
//! ```

pub mod error;
#[cfg(feature = "native")]
pub mod file;
pub mod memory;

pub use error::{StorageError, StorageResult};
#[cfg(feature = "native")]
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage keys shared by every backend
pub mod keys {
    pub const AUTH_TOKEN: &str = "auth_token";
    pub const USER_NAME: &str = "user_name";
    pub const LANGUAGE: &str = "language";
}

/// Durable string key/value store.
///
/// Methods take `&self`: a store is a shared handle, like `localStorage`.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Write a value, logging instead of failing.
///
/// Losing a cached value only costs a re-login or a default language.
pub fn persist(storage: &dyn Storage, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        tracing::warn!(key, error = %e, "Failed to persist value");
    }
}

/// Remove a value, logging instead of failing
pub fn forget(storage: &dyn Storage, key: &str) {
    if let Err(e) = storage.remove(key) {
        tracing::warn!(key, error = %e, "Failed to remove value");
    }
}
