//! Filter outcomes.

use crate::catalog::Product;

/// Result of filtering the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// No snapshot is available yet (never loaded, loading, or failed).
    NotLoaded,
    /// The catalog is loaded but nothing matched.
    NoMatches,
    /// Matching products in snapshot order.
    Matches(Vec<Product>),
}

impl FilterOutcome {
    /// Number of matching products.
    pub fn len(&self) -> usize {
        match self {
            FilterOutcome::Matches(items) => items.len(),
            FilterOutcome::NotLoaded | FilterOutcome::NoMatches => 0,
        }
    }

    /// Check if nothing matched (or nothing is loaded).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume into the matching products.
    pub fn into_products(self) -> Vec<Product> {
        match self {
            FilterOutcome::Matches(items) => items,
            FilterOutcome::NotLoaded | FilterOutcome::NoMatches => Vec::new(),
        }
    }
}
