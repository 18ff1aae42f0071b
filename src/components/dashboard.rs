//! Dashboard Component
//!
//! Course card grid, or the detail view of one track.

use leptos::prelude::*;

use super::{CourseCard, TrackDetail};
use crate::context::use_course;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_course();
    let (selected_track, set_selected_track) = signal::<Option<String>>(None);

    let courses = move || ctx.courses();

    let detail_view = move || {
        let course_id = selected_track.get()?;
        let course = ctx.track_detail(&course_id)?;
        Some(view! {
            <TrackDetail course=course on_back=move || set_selected_track.set(None) />
        })
    };

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1>"Learning Dashboard"</h1>
                <p class="subtitle">"Master multiple skills through structured learning paths"</p>
            </div>

            <Show
                when=move || selected_track.get().is_some()
                fallback=move || view! {
                    <div class="courses-grid">
                        <For
                            each=courses
                            key=|course| course.id.clone()
                            let:course
                        >
                            <CourseCard
                                course=course
                                on_select=move |id: String| set_selected_track.set(Some(id))
                            />
                        </For>
                    </div>
                }
            >
                {detail_view}
            </Show>
        </div>
    }
}
