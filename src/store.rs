//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Which main view is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    Course,
}

/// Navigation and player coordination state. The selected course and
/// video live in `CourseContext`.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub current_view: View,
    /// Player position as `HH:MM:SS`, used for new notes
    pub current_timestamp: String,
    pub mobile_menu_open: bool,
    /// Pending seek from the notes list (a note timestamp), consumed by the player
    pub seek_request: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_timestamp: "00:00:00".to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch to the player, starting from the top of the video
pub fn store_open_player(store: &AppStore) {
    store.current_timestamp().set("00:00:00".to_string());
    store.current_view().set(View::Course);
}

pub fn store_show_dashboard(store: &AppStore) {
    store.current_view().set(View::Dashboard);
    store.mobile_menu_open().set(false);
}

/// Ask the player to jump to a note's `HH:MM:SS` / `MM:SS` timestamp
pub fn store_request_seek(store: &AppStore, timestamp: String) {
    store.seek_request().set(Some(timestamp));
}
