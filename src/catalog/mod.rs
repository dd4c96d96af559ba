//! Catalog View Controller
//!
//! State, filtering and API-driving logic behind the admin page.
//! Nothing in here touches the DOM.

mod controller;
mod filter;
mod state;

pub use controller::CatalogController;
pub use filter::CategoryFilter;
pub use state::{CatalogState, Failure, FormMode, Notice};
