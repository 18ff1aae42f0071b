//! In-memory storage backend
//!
//! Behaves like `localStorage`, including an optional byte quota.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::error::{StorageError, StorageResult};
use super::traits::StorageBackend;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
    /// Max total bytes of keys plus values
    quota: Option<usize>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Every operation fails, like storage disabled by the browser
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Raw value, bypassing availability checks
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Store a raw value, bypassing the quota
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    fn check_available(&self) -> StorageResult<()> {
        if self.unavailable {
            return Err(StorageError::Unavailable("memory storage disabled".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.check_available()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check_available()?;
        if let Some(quota) = self.quota {
            if self.used_bytes_without(key) + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded { key: key.to_string() });
            }
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.check_available()?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
