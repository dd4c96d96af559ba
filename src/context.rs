//! Application Context
//!
//! Controller handle and snapshot store shared via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpProductApi;
use crate::catalog::{CatalogController, CategoryFilter};
use crate::models::{DraftField, Product, ProductId};
use crate::store::AppStore;

pub type AppController = CatalogController<HttpProductApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Controller owning the catalog state (browser thread only)
    controller: StoredValue<Rc<AppController>, LocalStorage>,
    /// Read-only snapshot for views
    pub store: AppStore,
}

impl AppContext {
    pub fn new(controller: Rc<AppController>, store: AppStore) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            store,
        }
    }

    fn controller(&self) -> Rc<AppController> {
        self.controller.get_value()
    }

    /// Reload products from the API
    pub fn refresh(&self) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.refresh().await;
        });
    }

    /// Create or update from the current draft
    pub fn submit(&self) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.submit().await;
        });
    }

    pub fn remove(&self, id: ProductId) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.remove(&id).await;
        });
    }

    pub fn open_for_create(&self) {
        self.controller().open_for_create();
    }

    pub fn open_for_edit(&self, product: &Product) {
        self.controller().open_for_edit(product);
    }

    pub fn close(&self) {
        self.controller().close();
    }

    pub fn edit_draft(&self, field: DraftField, value: String) {
        self.controller().edit_draft(field, value);
    }

    pub fn set_search(&self, search: String) {
        self.controller().set_search(search);
    }

    pub fn set_category(&self, category: CategoryFilter) {
        self.controller().set_category(category);
    }

    pub fn dismiss_notice(&self, seq: u64) {
        self.controller().dismiss_notice(seq);
    }

    pub fn dismiss_failure(&self) {
        self.controller().dismiss_failure();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
