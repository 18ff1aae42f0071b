//! Backend sync hook
//!
//! Registration hands the new profile to a `SyncHook`. No backend exists
//! yet, so the only implementation logs and returns.

use tracing::info;

use crate::domain::UserData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncError(pub String);

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sync failed: {}", self.0)
    }
}

impl std::error::Error for SyncError {}

pub trait SyncHook {
    fn sync(&self, user_data: &UserData) -> Result<(), SyncError>;
}

/// Performs no request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSync;

impl SyncHook for NoopSync {
    fn sync(&self, user_data: &UserData) -> Result<(), SyncError> {
        info!(user_id = %user_data.id, "Backend sync not configured, keeping data local");
        Ok(())
    }
}
