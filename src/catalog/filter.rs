//! Catalog Filtering
//!
//! Pure derivation of the displayed list from (products, search, category).

use std::collections::BTreeSet;

use crate::models::Product;

/// Category selector value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Selector value meaning "no category restriction"
    pub const ALL_VALUE: &'static str = "all";

    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_VALUE,
            CategoryFilter::Only(category) => category,
        }
    }

    #[cfg(test)]
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Exact, case-sensitive comparison
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// Case-insensitive substring match on the product name
pub fn matches_search(name: &str, search: &str) -> bool {
    name.to_lowercase().contains(&search.to_lowercase())
}

/// Products passing both predicates, in their original order
pub fn filter_products(products: &[Product], search: &str, category: &CategoryFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| category.matches(&p.category) && matches_search(&p.name, search))
        .cloned()
        .collect()
}

/// Distinct non-empty categories, sorted, for the category selector
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.as_str())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
