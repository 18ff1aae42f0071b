//! Domain Layer
//!
//! Entities persisted to local storage and the rules that act on them.
//! This layer has no storage dependency (serde and chrono only).

mod entity;
mod course;
mod note;
mod video_progress;
mod milestone;
mod sandbox;
mod user;

pub use entity::{Entity, next_time_id, remove_by_id};
pub use course::{Course, Module, TrackInfo, LEARNING_TRACKS, DEFAULT_MODULE_TITLES, learning_tracks, course_progress, simulated_progress};
pub use note::{Note, NoteCategory, NoteDraft, NotesMap, sort_notes, next_note_id};
pub use video_progress::{VideoProgress, VideoProgressUpdate, VideoProgressMap};
pub use milestone::{Milestone, MilestoneDraft, MilestonesMap};
pub use sandbox::{SandboxCode, SandboxCodeMap};
pub use user::{AuthUser, ExportedData, UserData};
