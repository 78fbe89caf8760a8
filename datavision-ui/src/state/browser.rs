//! Browser Backends
//!
//! `window.localStorage` as [`Storage`] and `window.location.hash` as
//! [`Location`].

use wasm_bindgen::JsValue;

use datavision::router::Location;
use datavision::storage::{Storage, StorageError, StorageResult};

/// [`Storage`] over `window.localStorage`.
///
/// Private browsing modes may deny access; reads then find nothing and
/// writes fail with [`StorageError::Unavailable`].
#[derive(Clone)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if inner.is_none() {
            web_sys::console::warn_1(&"localStorage unavailable, session will not persist".into());
        }
        Self { inner }
    }

    fn store(&self) -> StorageResult<&web_sys::Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", err))
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.store()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.store()?.remove_item(key).map_err(js_error)
    }
}

/// [`Location`] over `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn hash(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }

    fn set_hash(&self, hash: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(hash) {
                web_sys::console::error_1(&format!("Failed to set location hash: {:?}", e).into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datavision::router::{Route, Router};
    use datavision::storage::keys;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let storage = LocalStorage::open();
        storage.set(keys::LANGUAGE, "de").unwrap();
        assert_eq!(storage.get(keys::LANGUAGE).as_deref(), Some("de"));

        storage.remove(keys::LANGUAGE).unwrap();
        assert_eq!(storage.get(keys::LANGUAGE), None);
    }

    #[wasm_bindgen_test]
    fn router_writes_browser_hash() {
        let router = Router::new(Rc::new(BrowserLocation));
        router.navigate(Route::Login);
        assert_eq!(BrowserLocation.hash(), "#/login");
        assert_eq!(router.current(), Route::Login);

        router.navigate(Route::Dashboard);
        assert_eq!(Route::from_fragment(&BrowserLocation.hash()), Route::Dashboard);
    }
}
