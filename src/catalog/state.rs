//! Catalog State
//!
//! Everything the admin view knows, mutated only through the named
//! transitions below. The filtered list is computed on demand.

use std::fmt;

use super::filter::{distinct_categories, filter_products, CategoryFilter};
use crate::error::ApiError;
use crate::models::{Draft, DraftField, Product, ProductId};

/// What the form is doing while visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Request the form turns into on submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(Draft),
    Update(ProductId, Draft),
}

/// API operation, for failure reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn description(&self) -> &'static str {
        match self {
            Operation::List => "load products",
            Operation::Create => "add product",
            Operation::Update => "update product",
            Operation::Delete => "delete product",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Created,
    Updated,
}

/// Success confirmation shown after a create or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self.kind {
            NoticeKind::Created => "Product added successfully",
            NoticeKind::Updated => "Product updated successfully",
        }
    }
}

/// Last operation that did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub operation: Operation,
    pub error: ApiError,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not {}: {}", self.operation.description(), self.error)
    }
}

/// Sequence number taken when a list fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    form_open: bool,
    products: Vec<Product>,
    draft: Draft,
    edit_target: Option<ProductId>,
    search: String,
    category: CategoryFilter,
    notice: Option<Notice>,
    failure: Option<Failure>,
    refresh_issued: u64,
    refresh_applied: u64,
    notice_seq: u64,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Read access
    // ========================

    #[cfg(test)]
    pub fn form_open(&self) -> bool {
        self.form_open
    }

    /// `None` while the form is hidden
    pub fn form_mode(&self) -> Option<FormMode> {
        if !self.form_open {
            return None;
        }
        Some(match self.edit_target {
            Some(_) => FormMode::Edit,
            None => FormMode::Create,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered(&self) -> Vec<Product> {
        filter_products(&self.products, &self.search, &self.category)
    }

    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.products)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[cfg(test)]
    pub fn edit_target(&self) -> Option<&ProductId> {
        self.edit_target.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    // ========================
    // Form transitions
    // ========================

    pub fn open_for_create(&mut self) {
        self.draft = Draft::default();
        self.edit_target = None;
        self.form_open = true;
    }

    pub fn open_for_edit(&mut self, product: &Product) {
        self.draft = Draft::from(product);
        self.edit_target = Some(product.id.clone());
        self.form_open = true;
    }

    /// Hides the form; the draft stays until the next open overwrites it
    pub fn close(&mut self) {
        self.form_open = false;
    }

    pub fn edit_draft(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    pub fn submission(&self) -> Submission {
        match &self.edit_target {
            Some(id) => Submission::Update(id.clone(), self.draft.clone()),
            None => Submission::Create(self.draft.clone()),
        }
    }

    pub fn submit_succeeded(&mut self, submission: &Submission) {
        let kind = match submission {
            Submission::Create(_) => NoticeKind::Created,
            Submission::Update(..) => NoticeKind::Updated,
        };
        self.notice_seq += 1;
        self.notice = Some(Notice { seq: self.notice_seq, kind });
        self.failure = None;
        self.form_open = false;
    }

    // ========================
    // Filter inputs
    // ========================

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    // ========================
    // Refresh sequencing
    // ========================

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.refresh_issued += 1;
        RefreshTicket(self.refresh_issued)
    }

    /// Replaces the cached list unless a newer fetch was already applied.
    /// Returns whether the list was applied.
    pub fn finish_refresh(&mut self, ticket: RefreshTicket, products: Vec<Product>) -> bool {
        if ticket.0 <= self.refresh_applied {
            return false;
        }
        self.refresh_applied = ticket.0;
        self.products = products;
        if matches!(self.failure, Some(Failure { operation: Operation::List, .. })) {
            self.failure = None;
        }
        true
    }

    /// Records a failed list fetch unless a newer list was already applied.
    /// Returns whether the failure was recorded.
    pub fn fail_refresh(&mut self, ticket: RefreshTicket, error: ApiError) -> bool {
        if ticket.0 <= self.refresh_applied {
            return false;
        }
        self.record_failure(Operation::List, error);
        true
    }

    // ========================
    // Outcomes
    // ========================

    pub fn record_failure(&mut self, operation: Operation, error: ApiError) {
        self.failure = Some(Failure { operation, error });
    }

    pub fn delete_succeeded(&mut self) {
        if matches!(self.failure, Some(Failure { operation: Operation::Delete, .. })) {
            self.failure = None;
        }
    }

    /// Ignored when a newer notice replaced the one with `seq`
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    pub fn dismiss_failure(&mut self) {
        self.failure = None;
    }
}
