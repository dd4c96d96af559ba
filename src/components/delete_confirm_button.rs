//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second one deletes.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a trash button initially. When clicked, shows "Delete?" with ✓/✗.
///
/// # Arguments
/// * `item_label` - What is being deleted, used in the button title
/// * `on_confirm` - Callback to execute when the user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] item_label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let title = format!("Delete {}", item_label);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                view! {
                    <button
                        type="button"
                        class="delete-btn"
                        title=title.clone()
                        on:click=move |_| set_confirming.set(true)
                    >
                        "🗑"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| set_confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
