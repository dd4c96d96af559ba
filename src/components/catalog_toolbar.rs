//! Catalog Toolbar
//!
//! Search box, category selector and manual refresh.

use leptos::prelude::*;

use crate::catalog::CategoryFilter;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn CatalogToolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="catalog-toolbar">
            <input
                type="text"
                class="search-input"
                placeholder="Search by product name"
                prop:value=move || store.search().get()
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />
            <select
                class="category-select"
                prop:value=move || store.category().with(|c| c.as_value().to_string())
                on:change=move |ev| ctx.set_category(CategoryFilter::from_value(&event_target_value(&ev)))
            >
                <option value={CategoryFilter::ALL_VALUE}>"All categories"</option>
                <For
                    each=move || store.categories().get()
                    key=|category| category.clone()
                    children=|category| {
                        let label = category.clone();
                        view! { <option value=category>{label}</option> }
                    }
                />
            </select>
            <button type="button" class="refresh-btn" title="Reload products" on:click=move |_| ctx.refresh()>
                "⟳"
            </button>
        </div>
    }
}
