//! Navigation Bar Component
//!
//! Logo, section links, account actions and the course breadcrumb.

use leptos::prelude::*;
use lms_core::domain::AuthUser;

use crate::context::use_course;
use crate::store::{store_show_dashboard, use_app_store, AppStateStoreFields, View};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_course();
    let store = use_app_store();
    let (show_sign_up, set_show_sign_up) = signal(false);

    let go_dashboard = move |_| store_show_dashboard(&store);

    let toggle_menu = move |_| store.mobile_menu_open().update(|open| *open = !*open);

    let nav_links_class = move || {
        if store.mobile_menu_open().get() {
            "nav-links active"
        } else {
            "nav-links"
        }
    };

    // Course name for the breadcrumb, player view only
    let breadcrumb = move || {
        if store.current_view().get() != View::Course {
            return None;
        }
        ctx.current_course().map(|c| c.name)
    };

    let display_name = move || {
        ctx.state.with(|s| {
            s.user_data
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };

    let logout = move |_| {
        if !ctx.logout() {
            tracing::warn!("Logged out, but local data could not be cleared");
        }
        store_show_dashboard(&store);
    };

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <div class="nav-logo-section">
                    <img
                        src="logo.png"
                        alt="DAIEL Logo"
                        class="app-logo"
                        on:click=go_dashboard
                    />
                </div>

                <button class="hamburger-menu" on:click=toggle_menu>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class=nav_links_class>
                    <a href="#home" class="nav-link">"HOME"</a>
                    <a href="#about" class="nav-link">"ABOUT"</a>
                    <a
                        href="#courses"
                        class="nav-link"
                        on:click=move |ev| {
                            ev.prevent_default();
                            store_show_dashboard(&store);
                        }
                    >
                        "COURSES"
                    </a>
                    <a href="#contact" class="nav-link">"CONTACT"</a>
                </div>

                <div class="nav-auth">
                    <Show
                        when=move || ctx.is_guest_mode()
                        fallback=move || view! {
                            <span class="nav-user">{display_name}</span>
                            <button class="nav-link-btn" on:click=logout>"Logout"</button>
                        }
                    >
                        <button
                            class="nav-signup-btn"
                            on:click=move |_| set_show_sign_up.update(|v| *v = !*v)
                        >
                            "Sign Up"
                        </button>
                    </Show>
                </div>

                {move || breadcrumb().map(|name| view! {
                    <div class="nav-breadcrumb-section">
                        <span class="nav-breadcrumb">"/"</span>
                        <span class="nav-course-name">{name}</span>
                    </div>
                })}
            </div>

            <Show when=move || show_sign_up.get() && ctx.is_guest_mode()>
                <SignUpForm on_done=move || set_show_sign_up.set(false) />
            </Show>
        </nav>
    }
}

/// Local profile form. Guest notes and progress are kept in the new profile.
#[component]
fn SignUpForm(on_done: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let ctx = use_course();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() {
            return;
        }
        let name_value = name.get_untracked().trim().to_string();
        let user = AuthUser {
            id: format!("user_{}", js_sys::Date::now() as i64),
            email: email_value,
            name: (!name_value.is_empty()).then_some(name_value),
        };
        if !ctx.register_and_sync(&user) {
            tracing::warn!(user_id = %user.id, "Registration finished with errors");
        }
        on_done();
    };

    view! {
        <form class="sign-up-form" on:submit=submit>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                required
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <button type="submit" class="nav-signup-btn">"Create Profile"</button>
            <button type="button" class="nav-link-btn" on:click=move |_| on_done()>"Cancel"</button>
        </form>
    }
}
