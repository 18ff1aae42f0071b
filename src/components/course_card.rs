//! Course Card Component
//!
//! One learning track in the dashboard grid.

use leptos::prelude::*;
use lms_core::domain::Course;

use super::ProgressBar;
use crate::context::use_course;

#[component]
pub fn CourseCard(course: Course, #[prop(into)] on_select: Callback<String>) -> impl IntoView {
    let ctx = use_course();
    let course_id = course.id.clone();

    // Live progress from the shared course list
    let progress = Memo::new({
        let course_id = course_id.clone();
        move |_| ctx.find_course(&course_id).map(|c| c.progress).unwrap_or(0)
    });

    view! {
        <div class="course-card" on:click=move |_| on_select.run(course_id.clone())>
            <div class="card-header" style:background-color=course.color.clone()>
                <span class="course-icon">"📚"</span>
            </div>

            <div class="card-body">
                <h3>{course.name}</h3>
                <p class="course-description">{course.description}</p>

                <div class="progress-section">
                    <div class="progress-label-inline">
                        <span>"Progress"</span>
                        <span class="progress-value">{move || format!("{}%", progress.get())}</span>
                    </div>
                    <ProgressBar percent=Signal::derive(move || progress.get() as f64) color=course.color />
                </div>

                <button class="card-cta">
                    {move || if progress.get() >= 100 { "✓ Completed" } else { "Start Learning →" }}
                </button>
            </div>
        </div>
    }
}
