//! Browser Storage Backend
//!
//! `window.localStorage` behind the core `StorageBackend` trait.

use lms_core::{LmsConfig, LmsStorage, StorageBackend, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// Local storage of the current window; absent when the browser denies it
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { inner }
    }

    fn storage(&self) -> StorageResult<&web_sys::Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("window.localStorage is not accessible".to_string()))
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a thrown DOMException to a storage error
fn js_error(key: &str, err: JsValue) -> StorageError {
    let name = String::from(js_sys::Error::from(err.clone()).name());
    if name == "QuotaExceededError" {
        StorageError::QuotaExceeded { key: key.to_string() }
    } else {
        StorageError::Backend(format!("{:?}", err))
    }
}

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?.get_item(key).map_err(|e| js_error(key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?.set_item(key, value).map_err(|e| js_error(key, e))
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.storage()?.remove_item(key).map_err(|e| js_error(key, e))
    }
}

/// App collections in this browser, namespaced per config
pub fn app_storage(config: &LmsConfig) -> LmsStorage<BrowserStorage> {
    LmsStorage::with_keys(BrowserStorage::new(), config.storage_keys())
}
