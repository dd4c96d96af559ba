//! Product API
//!
//! The external collaborator the catalog talks to, organized as a trait
//! so the controller can run against HTTP or an in-memory fake.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Draft, Product, ProductId};

pub use http::HttpProductApi;

/// Create/read/update/delete over the product collection
///
/// Futures are `!Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait ProductApi {
    /// Full collection, no pagination
    async fn list(&self) -> ApiResult<Vec<Product>>;

    /// The server assigns the identifier
    async fn create(&self, draft: &Draft) -> ApiResult<()>;

    /// Full replace of the record's fields
    async fn update(&self, id: &ProductId, draft: &Draft) -> ApiResult<()>;

    async fn delete(&self, id: &ProductId) -> ApiResult<()>;
}
