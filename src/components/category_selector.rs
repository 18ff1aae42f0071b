//! Category Selector Component
//!
//! Note category dropdown.

use leptos::prelude::*;
use lms_core::domain::NoteCategory;

#[component]
pub fn CategorySelector(
    current: ReadSignal<NoteCategory>,
    on_change: impl Fn(NoteCategory) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="category-select"
            prop:value=move || current.get().as_str()
            on:change=move |ev| on_change(NoteCategory::from_name(&event_target_value(&ev)))
        >
            {NoteCategory::ALL.iter().map(|category| {
                view! {
                    <option value=category.as_str()>{category.label()}</option>
                }
            }).collect_view()}
        </select>
    }
}
