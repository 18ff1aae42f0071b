//! Note Item Component

use leptos::prelude::*;
use lms_core::domain::Note;
use lms_core::timestamp::format_timestamp;
use wasm_bindgen::JsValue;

use super::DeleteConfirmButton;

/// Saved date in the browser's locale
fn local_date(note: &Note) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(&note.saved_at.to_rfc3339()));
    String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED))
}

#[component]
pub fn NoteItem(
    note: Note,
    #[prop(into)] on_seek: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let category = note.category;
    let timestamp = note.timestamp.clone();
    let note_id = note.id.clone();
    let saved_on = local_date(&note);

    view! {
        <div class="note-item" style:border-left-color=category.color()>
            <div class="note-header">
                <span class="note-category">{format!("{} {}", category.icon(), category.as_str())}</span>
                <button
                    class="note-timestamp-btn"
                    title="Click to seek to this timestamp"
                    on:click=move |_| on_seek.run(timestamp.clone())
                >
                    {format_timestamp(&note.timestamp)}
                </button>
            </div>

            <p class="note-text">{note.text}</p>

            <div class="note-footer">
                <span class="note-time">{saved_on}</span>
                <DeleteConfirmButton
                    button_class="delete-note-btn"
                    label="note"
                    on_confirm=move || on_delete.run(note_id.clone())
                />
            </div>
        </div>
    }
}
