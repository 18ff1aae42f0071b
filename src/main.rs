//! DAIEL LMS Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use lms_core::LmsConfig;

/// Config from `<script id="lms-config" type="application/json">`, if present
fn load_config() -> LmsConfig {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("lms-config"))
        .and_then(|el| el.text_content())
        .map(|json| LmsConfig::from_json(&json))
        .unwrap_or_default()
}

fn main() {
    console_error_panic_hook::set_once();

    let config = load_config();
    let logs = logging::init(config.log_capacity);
    tracing::info!(namespace = %config.storage_namespace, "DAIEL LMS starting");

    mount_to_body(move || view! { <App config=config.clone() logs=logs.clone() /> });
}
