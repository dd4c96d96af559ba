//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store only
//! mirrors the controller's state; components read from it and send every
//! change through [`crate::context::AppContext`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{CatalogState, CategoryFilter, Failure, FormMode, Notice};
use crate::models::{Draft, Product};

/// Render snapshot of the catalog with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Products passing the search and category filters
    pub filtered: Vec<Product>,
    /// Size of the cached list before filtering
    pub total: usize,
    /// Category selector options
    pub categories: Vec<String>,
    /// `None` while the form is hidden
    pub form_mode: Option<FormMode>,
    pub draft: Draft,
    pub search: String,
    pub category: CategoryFilter,
    pub notice: Option<Notice>,
    pub failure: Option<Failure>,
}

impl From<&CatalogState> for AppState {
    fn from(state: &CatalogState) -> Self {
        Self {
            filtered: state.filtered(),
            total: state.products().len(),
            categories: state.categories(),
            form_mode: state.form_mode(),
            draft: state.draft().clone(),
            search: state.search().to_string(),
            category: state.category().clone(),
            notice: state.notice().cloned(),
            failure: state.failure().cloned(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Mirror a controller transition, writing only the fields that changed
pub fn store_publish(store: &AppStore, state: &CatalogState) {
    store_sync_products(store, state);
    store_sync_form(store, state);
    store_sync_filters(store, state);
    store_sync_messages(store, state);
}

/// Filtered list, total and category options
pub fn store_sync_products(store: &AppStore, state: &CatalogState) {
    let filtered = state.filtered();
    if store.filtered().with_untracked(|current| *current != filtered) {
        *store.filtered().write() = filtered;
    }
    let total = state.products().len();
    if store.total().get_untracked() != total {
        *store.total().write() = total;
    }
    let categories = state.categories();
    if store.categories().with_untracked(|current| *current != categories) {
        *store.categories().write() = categories;
    }
}

/// Form visibility and the draft being edited
pub fn store_sync_form(store: &AppStore, state: &CatalogState) {
    let form_mode = state.form_mode();
    if store.form_mode().get_untracked() != form_mode {
        *store.form_mode().write() = form_mode;
    }
    if store.draft().with_untracked(|current| current != state.draft()) {
        *store.draft().write() = state.draft().clone();
    }
}

/// Search text and selected category
pub fn store_sync_filters(store: &AppStore, state: &CatalogState) {
    if store.search().with_untracked(|current| current != state.search()) {
        *store.search().write() = state.search().to_string();
    }
    if store.category().with_untracked(|current| current != state.category()) {
        *store.category().write() = state.category().clone();
    }
}

/// Success notice and failure banner
pub fn store_sync_messages(store: &AppStore, state: &CatalogState) {
    if store.notice().with_untracked(|current| current.as_ref() != state.notice()) {
        *store.notice().write() = state.notice().cloned();
    }
    if store.failure().with_untracked(|current| current.as_ref() != state.failure()) {
        *store.failure().write() = state.failure().cloned();
    }
}
