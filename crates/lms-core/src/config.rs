//! App configuration
//!
//! Every field has a default; the host page may override any of them with a
//! JSON document.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::DEFAULT_MODULE_TITLES;
use crate::repository::StorageKeys;

pub const DEFAULT_VIDEO_URL: &str = "https://test-streams.mux.dev/x36xhzz/x3zzv.m3u8";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LmsConfig {
    /// Prefix of every local storage key
    pub storage_namespace: String,
    /// Video played for every module until real content exists
    pub demo_video_url: String,
    /// Entries kept by the in-memory log buffer
    pub log_capacity: usize,
    /// Modules each track is seeded with
    pub module_titles: Vec<String>,
}

impl Default for LmsConfig {
    fn default() -> Self {
        Self {
            storage_namespace: StorageKeys::DEFAULT_NAMESPACE.to_string(),
            demo_video_url: DEFAULT_VIDEO_URL.to_string(),
            log_capacity: 200,
            module_titles: DEFAULT_MODULE_TITLES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl LmsConfig {
    /// Malformed input yields the defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Ignoring malformed config, using defaults");
                Self::default()
            }
        }
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::new(&self.storage_namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = LmsConfig::from_json(r#"{"storageNamespace":"demo","logCapacity":5}"#);
        assert_eq!(config.storage_namespace, "demo");
        assert_eq!(config.log_capacity, 5);
        assert_eq!(config.demo_video_url, DEFAULT_VIDEO_URL);
        assert_eq!(config.module_titles.len(), 5);
        assert_eq!(config.storage_keys().notes, "demo_notes");
    }

    #[test]
    fn test_malformed_uses_defaults() {
        assert_eq!(LmsConfig::from_json("{not json"), LmsConfig::default());
    }
}
