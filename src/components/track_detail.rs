//! Track Detail Component
//!
//! A course's overall progress and its module cards.

use leptos::prelude::*;
use lms_core::domain::{simulated_progress, Course, Module};

use super::ProgressBar;
use crate::context::use_course;
use crate::store::{store_open_player, use_app_store};

#[component]
pub fn TrackDetail(course: Course, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_course();
    let course_id = StoredValue::new(course.id.clone());

    let progress = Memo::new(move |_| {
        course_id.with_value(|id| ctx.find_course(id).map(|c| c.progress).unwrap_or(0))
    });

    let simulate = move |_| {
        let next = simulated_progress(progress.get_untracked());
        course_id.with_value(|id| ctx.update_course_progress(id, next as i32));
        tracing::debug!(course_id = %course_id.get_value(), progress = next, "Simulated progress");
    };

    let color = course.color.clone();
    let modules = course.modules.clone();

    view! {
        <div class="track-detail-view">
            <button class="back-btn" on:click=move |_| on_back.run(())>
                "← Back to Dashboard"
            </button>

            <div class="track-detail">
                <div class="track-header">
                    <div class="track-color-badge" style:background-color=course.color.clone()></div>
                    <div>
                        <h2>{course.name}</h2>
                        <p>{course.description}</p>
                    </div>
                </div>

                <div class="overall-progress">
                    <span class="progress-label">"Overall Progress"</span>
                    <ProgressBar percent=Signal::derive(move || progress.get() as f64) color=color.clone() />
                    <span class="progress-percentage">{move || format!("{}%", progress.get())}</span>
                    <Show when=move || (progress.get() >= 100)>
                        <span class="completed-label">"✓ Completed"</span>
                    </Show>
                </div>

                <div class="modules-grid">
                    <h3>"Modules"</h3>
                    {modules.into_iter().map(|module| view! {
                        <ModuleCard
                            course_id=course_id.get_value()
                            module=module
                            color=color.clone()
                        />
                    }).collect_view()}
                </div>

                <button class="demo-progress-btn" on:click=simulate>
                    "📈 Simulate Progress"
                </button>
            </div>
        </div>
    }
}

/// Module card; clicking opens the player on this module
#[component]
fn ModuleCard(course_id: String, module: Module, color: String) -> impl IntoView {
    let ctx = use_course();
    let store = use_app_store();
    let module_id = module.id;

    let open = move |_| {
        ctx.select_course(&course_id);
        ctx.select_video(module_id.to_string());
        store_open_player(&store);
    };

    let completed = module.is_completed();
    let progress = module.progress;

    view! {
        <div class="module-card" on:click=open>
            <div class="module-header">
                <h4>{module.title.clone()}</h4>
                <span class="module-number">{format!("Module {}", module_id)}</span>
            </div>

            <div class="module-progress">
                <ProgressBar percent=progress color=color small=true />
                <span class="progress-text">{format!("{}%", module.display_progress())}</span>
            </div>

            <button class="module-action-btn">
                {if completed { "✓ Completed" } else { "Continue →" }}
            </button>
        </div>
    }
}
