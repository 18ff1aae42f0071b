//! Storage errors

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures of the key/value backend or of the JSON documents in it
#[derive(Debug)]
pub enum StorageError {
    /// Backend cannot be reached (no window, storage disabled, private mode)
    Unavailable(String),
    /// Write rejected because the backend is full
    QuotaExceeded { key: String },
    /// Any other backend failure
    Backend(String),
    /// Stored document is not valid JSON for its collection
    Serde(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::QuotaExceeded { key } => write!(f, "Storage quota exceeded writing {}", key),
            StorageError::Backend(msg) => write!(f, "Storage error: {}", msg),
            StorageError::Serde(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Serde(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
