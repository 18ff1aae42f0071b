//! Repository Layer - Core Traits
//!
//! Abstract key/value interface shaped after `window.localStorage`.
//! Implementations: browser local storage (UI crate), in-memory.

use super::error::StorageResult;

/// String key/value store with whole-value reads and writes
pub trait StorageBackend {
    /// Value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`; absent keys are not an error
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
