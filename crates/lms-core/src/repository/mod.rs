//! Repository Layer
//!
//! Key/value persistence of the domain collections.

mod error;
mod traits;
mod clock;
mod keys;
mod memory;
mod local_store;

#[cfg(test)]
mod tests;

pub use error::{StorageError, StorageResult};
pub use traits::StorageBackend;
pub use clock::{Clock, FixedClock, SystemClock};
pub use keys::StorageKeys;
pub use memory::MemoryStorage;
pub use local_store::{note_key, milestone_key, LmsStorage};
