//! Product Form Modal
//!
//! Add/update dialog bound to the controller's draft.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::FormMode;
use crate::context::use_app_context;
use crate::models::DraftField;
use crate::store::AppStateStoreFields;

#[component]
pub fn ProductFormModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let is_editing = move || store.form_mode().get() == Some(FormMode::Edit);

    view! {
        <Show when=move || store.form_mode().with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| ctx.close()>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <span class="modal-title">
                            {move || if is_editing() { "Update Product" } else { "Add Product" }}
                        </span>
                        <button type="button" class="close-btn" on:click=move |_| ctx.close()>"×"</button>
                    </div>

                    <form
                        class="product-form"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            ctx.submit();
                        }
                    >
                        {DraftField::ALL.into_iter().map(|field| view! { <DraftInput field=field /> }).collect_view()}
                    </form>

                    <div class="modal-footer">
                        <button type="button" class="secondary-btn" on:click=move |_| ctx.close()>
                            "Close"
                        </button>
                        <button type="button" class="primary-btn" on:click=move |_| ctx.submit()>
                            {move || if is_editing() { "Update Product" } else { "Add Product" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// One draft field as a text input or textarea
#[component]
fn DraftInput(field: DraftField) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let value = move || store.draft().with(|draft| draft.value(field).to_string());

    let on_input = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let text = if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.value()
        } else {
            return;
        };
        ctx.edit_draft(field, text);
    };

    if field.is_multiline() {
        view! {
            <textarea
                class="form-input"
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                class="form-input"
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    }
}
