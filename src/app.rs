//! Catalog Admin App
//!
//! Root component: wires the controller to the store and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpProductApi;
use crate::catalog::CatalogController;
use crate::components::{CatalogToolbar, NoticeBanner, ProductFormModal, ProductTable};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::{store_publish, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_environment();
    log::info!("Product API at {}", config.collection_url());

    let controller = Rc::new(CatalogController::new(HttpProductApi::new(config)));
    let store = Store::new(AppState::from(&controller.snapshot()));
    controller.subscribe(move |state| store_publish(&store, state));

    // Provide context to all children
    let ctx = AppContext::new(controller, store);
    provide_context(ctx);

    // Load products on mount
    ctx.refresh();

    view! {
        <div class="catalog-page">
            <NoticeBanner />

            <header class="catalog-header">
                <button type="button" class="add-product-btn" on:click=move |_| ctx.open_for_create()>
                    "+ Add Product"
                </button>
            </header>

            <h1 class="catalog-title">"Products"</h1>

            <CatalogToolbar />
            <ProductTable />

            <p class="product-count">
                {move || format!(
                    "{} of {} products",
                    store.filtered().with(Vec::len),
                    store.total().get(),
                )}
            </p>

            <ProductFormModal />
        </div>
    }
}
