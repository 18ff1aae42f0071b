//! Course Context
//!
//! Course list and guest/registered status shared by the dashboard and the
//! player, provided via Leptos Context API.

use std::collections::BTreeMap;

use leptos::prelude::*;
use lms_core::domain::{AuthUser, Course};
use lms_core::{CourseState, LmsConfig, LmsStorage, NoopSync};

use crate::storage::{app_storage, BrowserStorage};

/// App-wide course state provided via context
#[derive(Clone, Copy)]
pub struct CourseContext {
    /// Course state - read
    pub state: ReadSignal<CourseState>,
    /// Course state - write
    set_state: WriteSignal<CourseState>,
    config: StoredValue<LmsConfig>,
    /// Courses expanded with modules, seeded once per session
    track_details: StoredValue<BTreeMap<String, Course>>,
}

impl CourseContext {
    /// Restores a stored user profile, if any, and seeds module progress
    /// with random values
    pub fn new(config: LmsConfig) -> Self {
        let mut initial = CourseState::load(&app_storage(&config));
        let details = initial.seed_track_details(&config.module_titles, |_, _| js_sys::Math::random() * 100.0);
        let (state, set_state) = signal(initial);
        Self {
            state,
            set_state,
            config: StoredValue::new(config),
            track_details: StoredValue::new(details),
        }
    }

    /// Course with its modules
    pub fn track_detail(&self, course_id: &str) -> Option<Course> {
        self.track_details.with_value(|d| d.get(course_id).cloned())
    }

    pub fn config(&self) -> LmsConfig {
        self.config.get_value()
    }

    /// Fresh handle on this browser's storage
    pub fn storage(&self) -> LmsStorage<BrowserStorage> {
        self.config.with_value(app_storage)
    }

    pub fn courses(&self) -> Vec<Course> {
        self.state.with(|s| s.courses.clone())
    }

    pub fn find_course(&self, course_id: &str) -> Option<Course> {
        self.state.with(|s| s.find_course(course_id).cloned())
    }

    /// Course open in the player
    pub fn current_course(&self) -> Option<Course> {
        self.state.with(|s| s.current_course().cloned())
    }

    pub fn current_course_id(&self) -> Option<String> {
        self.state.with(|s| s.current_course().map(|c| c.id.clone()))
    }

    /// Module (video) open in the player
    pub fn current_video(&self) -> Option<String> {
        self.state.with(|s| s.current_video.clone())
    }

    pub fn is_guest_mode(&self) -> bool {
        self.state.with(|s| s.is_guest_mode)
    }

    /// Set a course's progress percentage (clamped to 0-100)
    pub fn update_course_progress(&self, course_id: &str, percentage: i32) {
        self.set_state.update(|s| s.update_course_progress(course_id, percentage));
    }

    pub fn select_course(&self, course_id: &str) {
        self.set_state.update(|s| s.select_course(course_id));
    }

    pub fn select_video(&self, video_id: impl Into<String>) {
        let video_id = video_id.into();
        self.set_state.update(|s| s.select_video(video_id));
    }

    /// Register the guest, keeping guest data in the new profile
    pub fn register_and_sync(&self, user: &AuthUser) -> bool {
        let storage = self.storage();
        let mut ok = false;
        self.set_state.update(|s| ok = s.register_and_sync(user, &storage, &NoopSync));
        ok
    }

    /// Back to guest mode, wiping local storage
    pub fn logout(&self) -> bool {
        let storage = self.storage();
        let mut ok = false;
        self.set_state.update(|s| ok = s.logout(&storage));
        ok
    }
}

/// Get the course context; panics outside `App`
pub fn use_course() -> CourseContext {
    expect_context::<CourseContext>()
}
