//! UI Components
//!
//! Leptos components of the catalog page.

mod catalog_toolbar;
mod delete_confirm_button;
mod notice_banner;
mod product_form_modal;
mod product_table;

pub use catalog_toolbar::CatalogToolbar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use notice_banner::NoticeBanner;
pub use product_form_modal::ProductFormModal;
pub use product_table::ProductTable;
