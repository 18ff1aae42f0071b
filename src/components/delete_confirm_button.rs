//! Two-step delete: the first click arms, the second confirms.

use leptos::prelude::*;

/// `label` names what gets deleted, e.g. "note" gives "Delete note?".
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let prompt = format!("Delete {}?", label);
    let title = format!("Delete {}", label);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        title="Confirm"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        title="Keep"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    title=title.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    "✕"
                </button>
            }
            .into_any()
        }
    }
}
