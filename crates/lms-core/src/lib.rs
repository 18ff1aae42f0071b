//! DAIEL LMS Core
//!
//! Layered architecture:
//! - domain: courses, notes, progress records and their rules
//! - repository: key/value persistence of those records
//! - state / playback: in-memory state shared by the dashboard and player
//!
//! Nothing here touches the browser; the UI crate supplies the
//! `localStorage` backend.

pub mod timestamp;
pub mod domain;
pub mod repository;
pub mod state;
pub mod playback;
pub mod config;
pub mod sync;

pub use config::LmsConfig;
pub use playback::{PlaybackState, ProgressTick, PLAYBACK_RATES};
pub use repository::{LmsStorage, MemoryStorage, StorageBackend, StorageError, StorageKeys, StorageResult};
pub use state::CourseState;
pub use sync::{NoopSync, SyncError, SyncHook};
