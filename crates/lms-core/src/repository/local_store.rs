//! Local Store
//!
//! Namespaced collections over a `StorageBackend`. Every collection is one
//! JSON document rewritten whole on each change.
//!
//! Each operation comes in two forms: `try_*` returns the error, the plain
//! form logs it and degrades to `None` / `false` / an empty collection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use super::clock::{Clock, SystemClock};
use super::error::StorageResult;
use super::keys::StorageKeys;
use super::traits::StorageBackend;
use crate::domain::{
    next_note_id, next_time_id, remove_by_id, sort_notes, ExportedData, Milestone, MilestoneDraft, MilestonesMap, Note,
    NoteDraft, NotesMap, SandboxCode, SandboxCodeMap, UserData, VideoProgress, VideoProgressMap,
    VideoProgressUpdate,
};

/// Notes key for a (course, video) pair
pub fn note_key(course_id: &str, video_id: &str) -> String {
    format!("{}_{}", course_id, video_id)
}

/// Milestones key for a course
pub fn milestone_key(course_id: &str) -> String {
    format!("course_{}", course_id)
}

/// Log a failed operation and fall back
fn or_log<T>(result: StorageResult<T>, action: &str, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!(error = %e, "Error {}", action);
            fallback
        }
    }
}

/// All app collections over one backend
#[derive(Debug, Clone)]
pub struct LmsStorage<B, C = SystemClock> {
    backend: B,
    keys: StorageKeys,
    clock: C,
}

impl<B: StorageBackend> LmsStorage<B, SystemClock> {
    pub fn new(backend: B) -> Self {
        Self::with_keys(backend, StorageKeys::default())
    }

    pub fn with_keys(backend: B, keys: StorageKeys) -> Self {
        Self {
            backend,
            keys,
            clock: SystemClock,
        }
    }
}

impl<B: StorageBackend, C: Clock> LmsStorage<B, C> {
    pub fn with_clock(backend: B, keys: StorageKeys, clock: C) -> Self {
        Self { backend, keys, clock }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read_doc<T: DeserializeOwned + Default>(&self, key: &str) -> StorageResult<T> {
        match self.backend.get_item(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(T::default()),
        }
    }

    fn write_doc<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string(value)?;
        self.backend.set_item(key, &json)
    }

    // ========================
    // User Data
    // ========================

    pub fn try_save_user_data(&self, user_data: &UserData) -> StorageResult<()> {
        self.write_doc(&self.keys.user_data, user_data)
    }

    pub fn save_user_data(&self, user_data: &UserData) -> bool {
        or_log(self.try_save_user_data(user_data).map(|_| true), "saving user data", false)
    }

    pub fn try_get_user_data(&self) -> StorageResult<Option<UserData>> {
        self.read_doc(&self.keys.user_data)
    }

    pub fn get_user_data(&self) -> Option<UserData> {
        or_log(self.try_get_user_data(), "retrieving user data", None)
    }

    // ========================
    // Notes
    // ========================

    pub fn try_get_all_notes(&self) -> StorageResult<NotesMap> {
        self.read_doc(&self.keys.notes)
    }

    pub fn get_all_notes(&self) -> NotesMap {
        or_log(self.try_get_all_notes(), "retrieving all notes", NotesMap::new())
    }

    /// Append a note, stamping `id` and `savedAt`
    pub fn try_save_note(&self, course_id: &str, video_id: &str, draft: NoteDraft) -> StorageResult<Note> {
        let mut notes = self.try_get_all_notes()?;
        let list = notes.entry(note_key(course_id, video_id)).or_default();

        let now = self.clock.now();
        let id = next_note_id(list, now.timestamp_millis());
        let note = Note::from_draft(draft, id, now);
        list.push(note.clone());

        self.write_doc(&self.keys.notes, &notes)?;
        debug!(course_id, video_id, note_id = %note.id, "Note saved");
        Ok(note)
    }

    pub fn save_note(&self, course_id: &str, video_id: &str, draft: NoteDraft) -> Option<Note> {
        or_log(self.try_save_note(course_id, video_id, draft).map(Some), "saving note", None)
    }

    /// Notes for one video, ascending by timestamp
    pub fn try_get_notes_by_video(&self, course_id: &str, video_id: &str) -> StorageResult<Vec<Note>> {
        let mut notes = self
            .try_get_all_notes()?
            .remove(&note_key(course_id, video_id))
            .unwrap_or_default();
        sort_notes(&mut notes);
        Ok(notes)
    }

    pub fn get_notes_by_video(&self, course_id: &str, video_id: &str) -> Vec<Note> {
        or_log(self.try_get_notes_by_video(course_id, video_id), "retrieving notes", Vec::new())
    }

    /// `false` when no note with `note_id` is stored for the pair;
    /// the document is only rewritten when a note was removed
    pub fn try_delete_note(&self, course_id: &str, video_id: &str, note_id: &str) -> StorageResult<bool> {
        let mut notes = self.try_get_all_notes()?;
        let Some(list) = notes.get_mut(&note_key(course_id, video_id)) else {
            return Ok(false);
        };
        let removed = remove_by_id(list, note_id);
        if removed == 0 {
            return Ok(false);
        }
        self.write_doc(&self.keys.notes, &notes)?;
        debug!(course_id, video_id, note_id, removed, "Note deleted");
        Ok(true)
    }

    pub fn delete_note(&self, course_id: &str, video_id: &str, note_id: &str) -> bool {
        or_log(self.try_delete_note(course_id, video_id, note_id), "deleting note", false)
    }

    // ========================
    // Video Progress
    // ========================

    pub fn try_get_all_video_progress(&self) -> StorageResult<VideoProgressMap> {
        self.read_doc(&self.keys.video_progress)
    }

    pub fn get_all_video_progress(&self) -> VideoProgressMap {
        or_log(self.try_get_all_video_progress(), "retrieving video progress", VideoProgressMap::new())
    }

    pub fn try_get_video_progress(&self, video_id: &str) -> StorageResult<Option<VideoProgress>> {
        Ok(self.try_get_all_video_progress()?.remove(video_id))
    }

    pub fn get_video_progress(&self, video_id: &str) -> Option<VideoProgress> {
        or_log(self.try_get_video_progress(video_id), "retrieving video progress", None)
    }

    /// Replace the record for `video_id`, stamping `lastWatched`
    pub fn try_save_video_progress(&self, video_id: &str, update: VideoProgressUpdate) -> StorageResult<()> {
        let mut all = self.try_get_all_video_progress()?;
        all.insert(video_id.to_string(), VideoProgress::from_update(update, self.clock.now()));
        self.write_doc(&self.keys.video_progress, &all)
    }

    pub fn save_video_progress(&self, video_id: &str, update: VideoProgressUpdate) -> bool {
        or_log(self.try_save_video_progress(video_id, update).map(|_| true), "saving video progress", false)
    }

    // ========================
    // Milestones
    // ========================

    pub fn try_get_all_milestones(&self) -> StorageResult<MilestonesMap> {
        self.read_doc(&self.keys.milestones)
    }

    pub fn get_all_milestones(&self) -> MilestonesMap {
        or_log(self.try_get_all_milestones(), "retrieving milestones", MilestonesMap::new())
    }

    pub fn try_get_milestones(&self, course_id: &str) -> StorageResult<Vec<Milestone>> {
        Ok(self
            .try_get_all_milestones()?
            .remove(&milestone_key(course_id))
            .unwrap_or_default())
    }

    pub fn get_milestones(&self, course_id: &str) -> Vec<Milestone> {
        or_log(self.try_get_milestones(course_id), "retrieving milestones", Vec::new())
    }

    pub fn try_save_milestone(&self, course_id: &str, draft: MilestoneDraft) -> StorageResult<Milestone> {
        let mut all = self.try_get_all_milestones()?;
        let list = all.entry(milestone_key(course_id)).or_default();

        let now = self.clock.now();
        let id = next_time_id("milestone", list, now.timestamp_millis());

        let milestone = Milestone::from_draft(draft, id, now);
        list.push(milestone.clone());
        self.write_doc(&self.keys.milestones, &all)?;
        Ok(milestone)
    }

    pub fn save_milestone(&self, course_id: &str, draft: MilestoneDraft) -> Option<Milestone> {
        or_log(self.try_save_milestone(course_id, draft).map(Some), "saving milestone", None)
    }

    // ========================
    // Sandbox Code
    // ========================

    pub fn try_get_all_sandbox_code(&self) -> StorageResult<SandboxCodeMap> {
        self.read_doc(&self.keys.sandbox_code)
    }

    pub fn get_all_sandbox_code(&self) -> SandboxCodeMap {
        or_log(self.try_get_all_sandbox_code(), "retrieving sandbox code", SandboxCodeMap::new())
    }

    pub fn try_get_sandbox_code(&self, sandbox_id: &str) -> StorageResult<Option<SandboxCode>> {
        Ok(self.try_get_all_sandbox_code()?.remove(sandbox_id))
    }

    pub fn get_sandbox_code(&self, sandbox_id: &str) -> Option<SandboxCode> {
        or_log(self.try_get_sandbox_code(sandbox_id), "retrieving sandbox code", None)
    }

    pub fn try_save_sandbox_code(&self, sandbox_id: &str, code: &str) -> StorageResult<()> {
        let mut all = self.try_get_all_sandbox_code()?;
        all.insert(
            sandbox_id.to_string(),
            SandboxCode {
                code: code.to_string(),
                saved_at: self.clock.now(),
            },
        );
        self.write_doc(&self.keys.sandbox_code, &all)
    }

    pub fn save_sandbox_code(&self, sandbox_id: &str, code: &str) -> bool {
        or_log(self.try_save_sandbox_code(sandbox_id, code).map(|_| true), "saving sandbox code", false)
    }

    // ========================
    // Whole Storage
    // ========================

    /// Remove every collection (logout)
    pub fn try_clear_all_data(&self) -> StorageResult<()> {
        for key in self.keys.all() {
            self.backend.remove_item(key)?;
        }
        Ok(())
    }

    pub fn clear_all_data(&self) -> bool {
        or_log(self.try_clear_all_data().map(|_| true), "clearing data", false)
    }

    pub fn try_export_all_data(&self) -> StorageResult<ExportedData> {
        Ok(ExportedData {
            user_data: self.try_get_user_data()?,
            notes: self.try_get_all_notes()?,
            video_progress: self.try_get_all_video_progress()?,
            milestones: self.try_get_all_milestones()?,
            sandbox_code: self.try_get_all_sandbox_code()?,
        })
    }

    /// Snapshot for backend sync; collections that fail to read export empty
    pub fn export_all_data(&self) -> ExportedData {
        ExportedData {
            user_data: self.get_user_data(),
            notes: self.get_all_notes(),
            video_progress: self.get_all_video_progress(),
            milestones: self.get_all_milestones(),
            sandbox_code: self.get_all_sandbox_code(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
