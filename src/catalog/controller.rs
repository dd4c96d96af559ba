//! Catalog Controller
//!
//! Owns the [`CatalogState`] and drives the Product API. Every transition
//! goes through [`CatalogController::mutate`], which notifies subscribers
//! with a read-only view of the new state.

use std::cell::RefCell;

use super::filter::CategoryFilter;
use super::state::{CatalogState, Operation, Submission};
use crate::api::ProductApi;
use crate::error::ApiResult;
use crate::models::{DraftField, Product, ProductId};

type Listener = Box<dyn Fn(&CatalogState)>;

pub struct CatalogController<A> {
    api: A,
    state: RefCell<CatalogState>,
    listeners: RefCell<Vec<Listener>>,
}

impl<A: ProductApi> CatalogController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RefCell::new(CatalogState::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Called after every transition, in registration order
    pub fn subscribe(&self, listener: impl Fn(&CatalogState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Apply one transition; the borrow ends before listeners run and never
    /// spans an `.await`
    fn mutate<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        let state = self.state.borrow();
        for listener in self.listeners.borrow().iter() {
            listener(&state);
        }
        result
    }

    // ========================
    // Synchronous transitions
    // ========================

    pub fn open_for_create(&self) {
        self.mutate(CatalogState::open_for_create);
    }

    pub fn open_for_edit(&self, product: &Product) {
        self.mutate(|s| s.open_for_edit(product));
    }

    pub fn close(&self) {
        self.mutate(CatalogState::close);
    }

    pub fn edit_draft(&self, field: DraftField, value: String) {
        self.mutate(|s| s.edit_draft(field, value));
    }

    pub fn set_search(&self, search: String) {
        self.mutate(|s| s.set_search(search));
    }

    pub fn set_category(&self, category: CategoryFilter) {
        self.mutate(|s| s.set_category(category));
    }

    pub fn dismiss_notice(&self, seq: u64) {
        self.mutate(|s| s.dismiss_notice(seq));
    }

    pub fn dismiss_failure(&self) {
        self.mutate(CatalogState::dismiss_failure);
    }

    // ========================
    // API operations
    // ========================

    /// Fetch the full list. A response older than one already applied is
    /// dropped.
    pub async fn refresh(&self) -> ApiResult<()> {
        let ticket = self.mutate(CatalogState::begin_refresh);
        match self.api.list().await {
            Ok(products) => {
                let count = products.len();
                if self.mutate(|s| s.finish_refresh(ticket, products)) {
                    log::info!("Loaded {} products", count);
                } else {
                    log::debug!("Dropped stale product list ({:?})", ticket);
                }
                Ok(())
            }
            Err(err) => {
                if self.mutate(|s| s.fail_refresh(ticket, err.clone())) {
                    log::warn!("Loading products failed: {}", err);
                } else {
                    log::debug!("Dropped stale list failure ({:?}): {}", ticket, err);
                }
                Err(err)
            }
        }
    }

    /// Create or update depending on the edit target. On success the form
    /// closes and the list is reloaded; on failure the form stays open.
    pub async fn submit(&self) -> ApiResult<()> {
        let submission = self.state.borrow().submission();
        let (operation, result) = match &submission {
            Submission::Create(draft) => (Operation::Create, self.api.create(draft).await),
            Submission::Update(id, draft) => (Operation::Update, self.api.update(id, draft).await),
        };

        if let Err(err) = result {
            log::warn!("{:?} failed: {}", operation, err);
            self.mutate(|s| s.record_failure(operation, err.clone()));
            return Err(err);
        }

        log::info!("{:?} succeeded", operation);
        self.mutate(|s| s.submit_succeeded(&submission));
        // A failed reload is recorded by refresh itself
        let _ = self.refresh().await;
        Ok(())
    }

    /// Delete, then reload; on failure the row stays
    pub async fn remove(&self, id: &ProductId) -> ApiResult<()> {
        if let Err(err) = self.api.delete(id).await {
            log::warn!("Deleting product {} failed: {}", id, err);
            self.mutate(|s| s.record_failure(Operation::Delete, err.clone()));
            return Err(err);
        }

        log::info!("Deleted product {}", id);
        self.mutate(CatalogState::delete_succeeded);
        let _ = self.refresh().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::state::FormMode;
    use crate::error::{check_status, ApiError};
    use crate::models::Draft;
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(Draft),
        Update(ProductId, Draft),
        Delete(ProductId),
    }

    /// Scripted answer for one list call
    enum ListReply {
        Ready(Vec<Product>),
        /// Yields to the executor first, so a later call can finish before it
        Slow(ApiResult<Vec<Product>>),
    }

    /// In-memory API answering with scripted statuses
    #[derive(Default)]
    struct FakeApi {
        products: RefCell<Vec<Product>>,
        calls: RefCell<Vec<Call>>,
        mutation_status: Cell<u16>,
        list_fails: Cell<bool>,
        list_replies: RefCell<VecDeque<ListReply>>,
        next_id: Cell<u32>,
    }

    impl FakeApi {
        fn with_products(products: Vec<Product>) -> Self {
            let api = Self::default();
            api.next_id.set(products.len() as u32 + 1);
            *api.products.borrow_mut() = products;
            api.mutation_status.set(200);
            api
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn list_calls(&self) -> usize {
            self.calls.borrow().iter().filter(|c| **c == Call::List).count()
        }
    }

    #[async_trait(?Send)]
    impl ProductApi for FakeApi {
        async fn list(&self) -> ApiResult<Vec<Product>> {
            self.calls.borrow_mut().push(Call::List);
            let reply = self.list_replies.borrow_mut().pop_front();
            match reply {
                Some(ListReply::Ready(products)) => return Ok(products),
                Some(ListReply::Slow(result)) => {
                    for _ in 0..3 {
                        tokio::task::yield_now().await;
                    }
                    return result;
                }
                None => {}
            }
            if self.list_fails.get() {
                return Err(ApiError::Transport("Failed to fetch".to_string()));
            }
            Ok(self.products.borrow().clone())
        }

        async fn create(&self, draft: &Draft) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Create(draft.clone()));
            check_status(self.mutation_status.get())?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.products.borrow_mut().push(product_from(&id.to_string(), draft));
            Ok(())
        }

        async fn update(&self, id: &ProductId, draft: &Draft) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Update(id.clone(), draft.clone()));
            check_status(self.mutation_status.get())?;
            for product in self.products.borrow_mut().iter_mut() {
                if &product.id == id {
                    *product = product_from(id.as_str(), draft);
                }
            }
            Ok(())
        }

        async fn delete(&self, id: &ProductId) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Delete(id.clone()));
            check_status(self.mutation_status.get())?;
            self.products.borrow_mut().retain(|p| &p.id != id);
            Ok(())
        }
    }

    fn product_from(id: &str, draft: &Draft) -> Product {
        Product {
            id: ProductId::new(id),
            name: draft.name.clone(),
            category: draft.category.clone(),
            price: draft.price.clone(),
            quantity: draft.quantity.clone(),
            description: draft.description.clone(),
        }
    }

    fn make_product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            price: "1".to_string(),
            quantity: "1".to_string(),
            description: String::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            make_product("1", "Pen", "stationery"),
            make_product("2", "Pencil", "stationery"),
            make_product("3", "Mug", "kitchen"),
        ]
    }

    async fn loaded_controller() -> CatalogController<FakeApi> {
        let controller = CatalogController::new(FakeApi::with_products(sample()));
        controller.refresh().await.unwrap();
        controller
    }

    #[tokio::test]
    async fn test_refresh_replaces_list() {
        let controller = loaded_controller().await;
        let state = controller.snapshot();

        assert_eq!(state.products(), sample().as_slice());
        assert_eq!(state.filtered(), sample());
    }

    #[tokio::test]
    async fn test_search_and_category_scenarios() {
        let controller = loaded_controller().await;

        controller.set_search("pen".to_string());
        let names: Vec<_> = controller.snapshot().filtered().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Pen", "Pencil"]);

        controller.set_search(String::new());
        controller.set_category(CategoryFilter::from_value("kitchen"));
        let ids: Vec<_> = controller.snapshot().filtered().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId::new("3")]);
    }

    #[tokio::test]
    async fn test_submit_without_target_creates() {
        let controller = loaded_controller().await;
        controller.api().mutation_status.set(201);

        controller.open_for_create();
        controller.edit_draft(DraftField::Name, "Notebook".to_string());
        controller.edit_draft(DraftField::Category, "stationery".to_string());
        controller.submit().await.unwrap();

        let state = controller.snapshot();
        let calls = controller.api().calls();
        assert!(matches!(&calls[1], Call::Create(d) if d.name == "Notebook"));
        assert_eq!(calls.last(), Some(&Call::List));
        assert_eq!(controller.api().list_calls(), 2);

        assert!(!state.form_open());
        assert_eq!(state.notice().map(|n| n.message()), Some("Product added successfully"));
        assert!(state.products().iter().any(|p| p.name == "Notebook"));
    }

    #[tokio::test]
    async fn test_submit_with_target_updates_that_id() {
        let controller = loaded_controller().await;
        let mug = controller.snapshot().products()[2].clone();

        controller.open_for_edit(&mug);
        controller.edit_draft(DraftField::Name, "Big Mug".to_string());
        controller.submit().await.unwrap();

        let calls = controller.api().calls();
        match &calls[1] {
            Call::Update(id, draft) => {
                assert_eq!(id, &mug.id);
                assert_eq!(draft.name, "Big Mug");
                assert_eq!(draft.category, "kitchen");
            }
            other => panic!("expected update, got {:?}", other),
        }

        let state = controller.snapshot();
        assert_eq!(state.notice().map(|n| n.message()), Some("Product updated successfully"));
        assert_eq!(state.products()[2].name, "Big Mug");
    }

    #[tokio::test]
    async fn test_failed_create_keeps_form_open_without_refresh() {
        let controller = loaded_controller().await;
        controller.api().mutation_status.set(500);

        controller.open_for_create();
        controller.edit_draft(DraftField::Name, "Broken".to_string());
        let result = controller.submit().await;

        assert_eq!(result, Err(ApiError::Status(500)));
        assert_eq!(controller.api().list_calls(), 1);

        let state = controller.snapshot();
        assert_eq!(state.form_mode(), Some(FormMode::Create));
        assert_eq!(state.notice(), None);
        assert_eq!(state.draft().name, "Broken");
        assert_eq!(state.failure().map(|f| f.error.clone()), Some(ApiError::Status(500)));
    }

    #[tokio::test]
    async fn test_failed_update_keeps_edit_form_open() {
        let controller = loaded_controller().await;
        let mug = controller.snapshot().products()[2].clone();
        controller.api().mutation_status.set(503);

        controller.open_for_edit(&mug);
        controller.edit_draft(DraftField::Price, "9.99".to_string());
        let result = controller.submit().await;

        assert_eq!(result, Err(ApiError::Status(503)));
        assert!(matches!(controller.api().calls().last(), Some(Call::Update(..))));
        assert_eq!(controller.api().list_calls(), 1);

        let state = controller.snapshot();
        assert_eq!(state.form_mode(), Some(FormMode::Edit));
        assert_eq!(state.edit_target(), Some(&mug.id));
        assert_eq!(state.draft().price, "9.99");
        assert_eq!(state.notice(), None);
        assert_eq!(state.products()[2], mug);
        assert_eq!(
            state.failure().map(|f| f.to_string()),
            Some("Could not update product: server responded with status 503".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_refreshes_on_success() {
        let controller = loaded_controller().await;

        controller.remove(&ProductId::new("2")).await.unwrap();

        assert_eq!(controller.api().list_calls(), 2);
        let ids: Vec<_> = controller.snapshot().products().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec![ProductId::new("1"), ProductId::new("3")]);
    }

    #[tokio::test]
    async fn test_failed_remove_keeps_row() {
        let controller = loaded_controller().await;
        controller.api().mutation_status.set(404);

        let result = controller.remove(&ProductId::new("2")).await;

        assert_eq!(result, Err(ApiError::Status(404)));
        assert_eq!(controller.api().list_calls(), 1);
        assert_eq!(controller.snapshot().products().len(), 3);
        assert_eq!(
            controller.snapshot().failure().map(|f| f.to_string()),
            Some("Could not delete product: server responded with status 404".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_cached_list() {
        let controller = loaded_controller().await;
        controller.api().list_fails.set(true);

        assert!(controller.refresh().await.is_err());

        let state = controller.snapshot();
        assert_eq!(state.products().len(), 3);
        assert!(state.failure().is_some());
    }

    #[tokio::test]
    async fn test_late_failure_of_older_refresh_is_dropped() {
        let controller = CatalogController::new(FakeApi::with_products(Vec::new()));
        {
            let mut replies = controller.api().list_replies.borrow_mut();
            replies.push_back(ListReply::Slow(Err(ApiError::Status(503))));
            replies.push_back(ListReply::Ready(vec![make_product("9", "Fresh", "x")]));
        }

        let (first, second) = tokio::join!(controller.refresh(), controller.refresh());

        let mut results = vec![first, second];
        results.sort_by_key(|r| r.is_ok());
        assert_eq!(results, vec![Err(ApiError::Status(503)), Ok(())]);
        let state = controller.snapshot();
        let names: Vec<_> = state.products().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Fresh"]);
        assert_eq!(state.failure(), None);
    }

    #[tokio::test]
    async fn test_subscribers_see_every_transition() {
        let controller = CatalogController::new(FakeApi::with_products(sample()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.subscribe(move |state| sink.borrow_mut().push(state.form_open()));

        controller.open_for_create();
        controller.close();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
