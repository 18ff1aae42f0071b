//! Timestamped Annotations Component
//!
//! Notes for the selected course module, pinned to playback positions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use lms_core::domain::{sort_notes, Note, NoteCategory, NoteDraft};

use super::{CategorySelector, NoteItem};
use crate::context::use_course;
use crate::store::{store_request_seek, use_app_store, AppStateStoreFields};

/// How long the "Note saved" hint stays visible
const SAVED_HINT_MS: u32 = 1500;

#[component]
pub fn TimestampedAnnotations() -> impl IntoView {
    let ctx = use_course();
    let store = use_app_store();

    let (notes, set_notes) = signal(Vec::<Note>::new());
    let (new_note_text, set_new_note_text) = signal(String::new());
    let (category, set_category) = signal(NoteCategory::General);
    let (is_expanded, set_is_expanded) = signal(false);
    let (just_saved, set_just_saved) = signal(false);

    // (course, video) the notes belong to
    let selection = move || {
        let course_id = ctx.current_course_id()?;
        let video_id = ctx.current_video()?;
        Some((course_id, video_id))
    };

    // Load notes when the course or video changes
    Effect::new(move |_| {
        let loaded = match selection() {
            Some((course_id, video_id)) => ctx.storage().get_notes_by_video(&course_id, &video_id),
            None => Vec::new(),
        };
        set_notes.set(loaded);
    });

    let sorted_notes = Memo::new(move |_| {
        let mut sorted = notes.get();
        sort_notes(&mut sorted);
        sorted
    });

    let add_note = move || {
        let text = new_note_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let Some((course_id, video_id)) = selection() else {
            return;
        };
        let draft = NoteDraft::new(text, store.current_timestamp().get_untracked(), category.get_untracked());

        let Some(saved) = ctx.storage().save_note(&course_id, &video_id, draft) else {
            return;
        };
        match serde_wasm_bindgen::to_value(&saved) {
            Ok(value) => web_sys::console::log_2(&"Note added:".into(), &value),
            Err(e) => tracing::debug!(error = %e, "Could not convert note for console"),
        }
        set_notes.update(|n| n.push(saved));
        set_new_note_text.set(String::new());

        set_just_saved.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SAVED_HINT_MS).await;
            let _ = set_just_saved.try_set(false);
        });
    };

    let delete_note = move |note_id: String| {
        let Some((course_id, video_id)) = selection() else {
            return;
        };
        if ctx.storage().delete_note(&course_id, &video_id, &note_id) {
            set_notes.update(|n| n.retain(|note| note.id != note_id));
        }
    };

    let seek_to = move |timestamp: String| {
        store_request_seek(&store, timestamp);
    };

    view! {
        <div class="timestamped-annotations">
            <div class="annotations-header">
                <h3>"Notes"</h3>
                <button
                    class="expand-btn"
                    title=move || if is_expanded.get() { "Collapse" } else { "Expand" }
                    on:click=move |_| set_is_expanded.update(|v| *v = !*v)
                >
                    {move || if is_expanded.get() { "−" } else { "+" }}
                </button>
            </div>

            <div class="note-input-section">
                <div class="note-input-wrapper">
                    <input
                        type="text"
                        class="note-input"
                        placeholder="Add a note..."
                        prop:value=move || new_note_text.get()
                        on:input=move |ev| set_new_note_text.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                add_note();
                            }
                        }
                    />
                    <span class="current-timestamp">{move || store.current_timestamp().get()}</span>
                </div>

                <div class="note-controls">
                    <CategorySelector current=category on_change=move |c: NoteCategory| set_category.set(c) />
                    <button
                        class="add-note-btn"
                        disabled=move || new_note_text.with(|t| t.trim().is_empty())
                        on:click=move |_| add_note()
                    >
                        "Save Note"
                    </button>
                    <Show when=move || just_saved.get()>
                        <span class="note-saved-hint">"Note saved"</span>
                    </Show>
                </div>
            </div>

            <div class=move || if is_expanded.get() { "notes-list expanded" } else { "notes-list" }>
                <Show
                    when=move || !sorted_notes.with(|n| n.is_empty())
                    fallback=|| view! { <p class="no-notes">"No notes yet. Add one to get started!"</p> }
                >
                    <For
                        each=move || sorted_notes.get()
                        key=|note| note.id.clone()
                        let:note
                    >
                        <NoteItem note=note on_seek=seek_to on_delete=delete_note />
                    </For>
                </Show>
            </div>

            <Show when=move || !sorted_notes.with(|n| n.is_empty())>
                <div class="notes-summary">
                    <span class="note-count">{move || format!("{} notes", sorted_notes.with(|n| n.len()))}</span>
                </div>
            </Show>
        </div>
    }
}
