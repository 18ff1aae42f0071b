//! DAIEL LMS Frontend App
//!
//! Navigation bar, then either the dashboard or the player with its notes.

use leptos::prelude::*;
use lms_core::domain::VideoProgressUpdate;
use lms_core::LmsConfig;
use reactive_stores::Store;
use rolling_logger::LogBuffer;

use crate::components::{CoursePlayer, Dashboard, NavBar, TimestampedAnnotations};
use crate::context::{use_course, CourseContext};
use crate::store::{use_app_store, AppState, AppStateStoreFields, View};

#[component]
pub fn App(config: LmsConfig, logs: Option<LogBuffer>) -> impl IntoView {
    provide_context(Store::new(AppState::new()));
    provide_context(CourseContext::new(config));
    let logs = StoredValue::new(logs);

    let store = use_app_store();

    let dump_logs = move |_| {
        logs.with_value(|logs| match logs {
            Some(buffer) => web_sys::console::log_1(&buffer.dump().into()),
            None => web_sys::console::warn_1(&"[LOG] Logger not installed".into()),
        });
    };

    view! {
        <div class="app">
            <NavBar />

            <main class="main-content">
                <Show
                    when=move || store.current_view().get() == View::Course
                    fallback=|| view! { <Dashboard /> }
                >
                    <PlayerLayout />
                </Show>
            </main>

            <footer class="footer">
                <p>"© 2026 DAIEL LMS - Learning Management System. All rights reserved."</p>
                <button class="log-dump-btn" title="Print recent log entries to the console" on:click=dump_logs>
                    "Logs"
                </button>
            </footer>
        </div>
    }
}

/// Player column and annotations column for the selected module
#[component]
fn PlayerLayout() -> impl IntoView {
    let ctx = use_course();

    let video_url = ctx.config().demo_video_url;

    let on_progress = move |update: VideoProgressUpdate| {
        let Some(video_id) = ctx.state.with_untracked(|s| s.current_video.clone()) else {
            return;
        };
        ctx.storage().save_video_progress(&video_id, update);
    };

    view! {
        <div class="player-layout">
            <div class="player-column">
                <CoursePlayer video_url=video_url on_progress=on_progress />
            </div>
            <div class="annotations-column">
                <TimestampedAnnotations />
            </div>
        </div>
    }
}
