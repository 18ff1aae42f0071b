//! Course State
//!
//! Course list, selection and guest/registered status shared by the
//! dashboard and the player.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::domain::{learning_tracks, AuthUser, Course, UserData};
use crate::repository::{Clock, LmsStorage, StorageBackend};
use crate::sync::SyncHook;

#[derive(Debug, Clone, PartialEq)]
pub struct CourseState {
    pub courses: Vec<Course>,
    current_course_id: Option<String>,
    pub current_video: Option<String>,
    pub is_guest_mode: bool,
    pub user_data: Option<UserData>,
}

impl Default for CourseState {
    fn default() -> Self {
        Self {
            courses: learning_tracks(),
            current_course_id: None,
            current_video: None,
            is_guest_mode: true,
            user_data: None,
        }
    }
}

impl CourseState {
    /// Initial state; a stored profile ends guest mode
    pub fn load<B: StorageBackend, C: Clock>(storage: &LmsStorage<B, C>) -> Self {
        let mut state = Self::default();
        if let Some(user_data) = storage.get_user_data() {
            info!(user_id = %user_data.id, "Restored user profile");
            state.user_data = Some(user_data);
            state.is_guest_mode = false;
        }
        state
    }

    pub fn find_course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub fn current_course(&self) -> Option<&Course> {
        self.current_course_id.as_deref().and_then(|id| self.find_course(id))
    }

    /// Clamped to 0-100; unknown ids are ignored
    pub fn update_course_progress(&mut self, course_id: &str, percentage: i32) {
        if let Some(course) = self.courses.iter_mut().find(|c| c.id == course_id) {
            course.set_progress(percentage);
        }
    }

    /// Unknown ids clear the selection
    pub fn select_course(&mut self, course_id: &str) {
        self.current_course_id = self.find_course(course_id).map(|c| c.id.clone());
    }

    pub fn select_video(&mut self, video_id: impl Into<String>) {
        self.current_video = Some(video_id.into());
    }

    /// Promote the guest to a registered user. The guest-mode export is
    /// embedded in the stored profile before the sync hook runs.
    pub fn register_and_sync<B, C, S>(&mut self, user: &AuthUser, storage: &LmsStorage<B, C>, sync: &S) -> bool
    where
        B: StorageBackend,
        C: Clock,
        S: SyncHook,
    {
        let guest_data = storage.export_all_data();
        let user_data = UserData::register(user, Some(guest_data), storage.clock().now());

        self.user_data = Some(user_data.clone());
        self.is_guest_mode = false;

        let saved = storage.save_user_data(&user_data);
        if !saved {
            warn!(user_id = %user.id, "Registered profile kept in memory only");
        }
        match sync.sync(&user_data) {
            Ok(()) => saved,
            Err(e) => {
                warn!(error = %e, "Error during registration and sync");
                false
            }
        }
    }

    /// Back to guest mode with empty storage
    pub fn logout<B: StorageBackend, C: Clock>(&mut self, storage: &LmsStorage<B, C>) -> bool {
        self.user_data = None;
        self.is_guest_mode = true;
        self.current_course_id = None;
        self.current_video = None;
        storage.clear_all_data()
    }

    /// Every course expanded with `titles` as modules, keyed by course id
    pub fn track_details<S: AsRef<str>>(
        &self,
        titles: &[S],
        mut progress_for: impl FnMut(&str, u32) -> f64,
    ) -> BTreeMap<String, Course> {
        self.courses
            .iter()
            .map(|course| {
                let detailed = course.with_modules(titles, |module_id| progress_for(&course.id, module_id));
                (course.id.clone(), detailed)
            })
            .collect()
    }

    /// Expand every course with modules and set each course's progress to
    /// the mean of its modules
    pub fn seed_track_details<S: AsRef<str>>(
        &mut self,
        titles: &[S],
        progress_for: impl FnMut(&str, u32) -> f64,
    ) -> BTreeMap<String, Course> {
        let details = self.track_details(titles, progress_for);
        for course in self.courses.iter_mut() {
            if let Some(detailed) = details.get(&course.id) {
                course.progress = detailed.module_progress();
            }
        }
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NoteCategory, NoteDraft};
    use crate::repository::{FixedClock, MemoryStorage, StorageKeys};
    use crate::sync::{NoopSync, SyncError};
    use chrono::{TimeZone, Utc};

    struct FailingSync;

    impl SyncHook for FailingSync {
        fn sync(&self, _user_data: &UserData) -> Result<(), SyncError> {
            Err(SyncError("offline".to_string()))
        }
    }

    fn user() -> AuthUser {
        AuthUser {
            id: "user-1".to_string(),
            email: "learner@example.com".to_string(),
            name: Some("Learner".to_string()),
        }
    }

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap())
    }

    #[test]
    fn test_default_is_guest() {
        let state = CourseState::default();
        assert!(state.is_guest_mode);
        assert_eq!(state.courses.len(), 5);
        assert!(state.current_course().is_none());
    }

    #[test]
    fn test_update_progress_and_select() {
        let mut state = CourseState::default();
        state.update_course_progress("python-ml", 42);
        state.update_course_progress("nope", 10);
        state.select_course("python-ml");
        assert_eq!(state.current_course().map(|c| c.progress), Some(42));

        // selection tracks later updates
        state.update_course_progress("python-ml", 150);
        assert_eq!(state.current_course().map(|c| c.progress), Some(100));

        state.select_course("unknown");
        assert!(state.current_course().is_none());
    }

    #[test]
    fn test_selection_is_course_and_video_pair() {
        let mut state = CourseState::default();
        assert!(state.current_video.is_none());

        state.select_course("graphics-design");
        state.select_video("4");
        assert_eq!(state.current_course().map(|c| c.id.as_str()), Some("graphics-design"));
        assert_eq!(state.current_video.as_deref(), Some("4"));

        // opening another module replaces both halves
        state.select_course("web-dev");
        state.select_video("1");
        assert_eq!(state.current_course().map(|c| c.name.as_str()), Some("Web Development"));
        assert_eq!(state.current_video.as_deref(), Some("1"));
    }

    #[test]
    fn test_register_embeds_guest_data_and_persists() {
        let backend = MemoryStorage::new();
        let storage = LmsStorage::with_clock(&backend, StorageKeys::default(), clock());
        storage
            .save_note("web-dev", "1", NoteDraft::new("guest note", "00:00:10", NoteCategory::Idea))
            .unwrap();

        let mut state = CourseState::load(&storage);
        assert!(state.is_guest_mode);
        assert!(state.register_and_sync(&user(), &storage, &NoopSync));
        assert!(!state.is_guest_mode);

        let stored = storage.get_user_data().unwrap();
        assert_eq!(stored.name, "Learner");
        let guest = stored.guest_data.unwrap();
        assert_eq!(guest.notes["web-dev_1"][0].text, "guest note");

        let reloaded = CourseState::load(&storage);
        assert!(!reloaded.is_guest_mode);
        assert_eq!(reloaded.user_data.map(|u| u.id), Some("user-1".to_string()));
    }

    #[test]
    fn test_register_reports_sync_failure() {
        let backend = MemoryStorage::new();
        let storage = LmsStorage::with_clock(&backend, StorageKeys::default(), clock());
        let mut state = CourseState::default();
        assert!(!state.register_and_sync(&user(), &storage, &FailingSync));
        assert!(!state.is_guest_mode);
        assert!(storage.get_user_data().is_some());
    }

    #[test]
    fn test_logout_wipes_storage() {
        let backend = MemoryStorage::new();
        let storage = LmsStorage::with_clock(&backend, StorageKeys::default(), clock());
        let mut state = CourseState::default();
        state.register_and_sync(&user(), &storage, &NoopSync);
        state.select_course("web-dev");
        state.select_video("3");

        assert!(state.logout(&storage));
        assert!(state.is_guest_mode);
        assert!(state.current_course().is_none());
        assert!(state.current_video.is_none());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_track_details() {
        let state = CourseState::default();
        let details = state.track_details(&["One", "Two"], |course_id, module_id| {
            if course_id == "web-dev" { 100.0 } else { module_id as f64 }
        });
        assert_eq!(details.len(), 5);
        assert_eq!(details["web-dev"].module_progress(), 100);
        assert_eq!(details["kdp-publishing"].modules[1].progress, 2.0);
    }

    #[test]
    fn test_seed_sets_course_progress_to_module_mean() {
        let mut state = CourseState::default();
        let details = state.seed_track_details(&["A", "B", "C"], |_, module_id| module_id as f64 * 20.0);
        assert_eq!(details["web-dev"].modules.len(), 3);
        assert!(state.courses.iter().all(|c| c.progress == 40));
        assert!(state.courses.iter().all(|c| c.modules.is_empty()));
    }
}
