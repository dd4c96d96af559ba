//! Product Table Component
//!
//! Filtered product list with per-row delete and edit actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Product;
use crate::store::AppStateStoreFields;

const COLUMNS: &[&str] = &["Name", "Category", "Price", "Stock", "Description"];

#[component]
pub fn ProductTable() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <Show
            when=move || store.filtered().with(|products| !products.is_empty())
            fallback=|| view! { <h2 class="empty-state">"No products found..."</h2> }
        >
            <table class="product-table">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|title| view! { <th scope="col">{*title}</th> }).collect_view()}
                        <th scope="col"></th>
                        <th scope="col"></th>
                    </tr>
                </thead>
                <tbody>
                    // Keyed by the whole record so edited rows re-render
                    <For
                        each=move || store.filtered().get()
                        key=|product| product.clone()
                        children=|product| view! { <ProductRow product=product /> }
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let id = product.id.clone();
    let for_edit = product.clone();

    view! {
        <tr>
            <td>{product.name.clone()}</td>
            <td>{product.category}</td>
            <td>{product.price}</td>
            <td>{product.quantity}</td>
            <td>{product.description}</td>
            <td class="row-action">
                <DeleteConfirmButton
                    item_label=product.name
                    on_confirm=Callback::new(move |_| ctx.remove(id.clone()))
                />
            </td>
            <td class="row-action">
                <button
                    type="button"
                    class="edit-btn"
                    title="Edit"
                    on:click=move |_| ctx.open_for_edit(&for_edit)
                >
                    "✎"
                </button>
            </td>
        </tr>
    }
}
