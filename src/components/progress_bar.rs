//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `percent` in the course color
#[component]
pub fn ProgressBar(
    #[prop(into)] percent: Signal<f64>,
    #[prop(into)] color: String,
    #[prop(optional)] small: bool,
) -> impl IntoView {
    let container_class = if small { "progress-bar-small" } else { "progress-bar-container" };

    view! {
        <div class=container_class>
            <div
                class="progress-bar-fill"
                style:width=move || format!("{}%", percent.get().clamp(0.0, 100.0))
                style:background-color=color
            ></div>
        </div>
    }
}
