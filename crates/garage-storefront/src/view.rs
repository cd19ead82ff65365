//! What the product grid currently shows.

use garage_commerce::catalog::{CatalogStatus, CatalogStore, Product};
use garage_commerce::search::FilterOutcome;

/// State of the product grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogView {
    /// The catalog has not arrived yet.
    #[default]
    Loading,
    /// The catalog could not be loaded; carries the message to show.
    Error(String),
    /// Loaded, but nothing matches the current query.
    Empty,
    /// Products to show, in catalog order.
    Loaded(Vec<Product>),
}

impl CatalogView {
    /// Project the store and query into a view.
    pub fn project(store: &CatalogStore, query: &str, load_failed: &str) -> Self {
        match store.status() {
            CatalogStatus::NotLoaded | CatalogStatus::Loading => CatalogView::Loading,
            CatalogStatus::Failed(_) => CatalogView::Error(load_failed.to_string()),
            CatalogStatus::Loaded => match store.filter(query) {
                FilterOutcome::Matches(items) => CatalogView::Loaded(items),
                FilterOutcome::NoMatches => CatalogView::Empty,
                FilterOutcome::NotLoaded => CatalogView::Loading,
            },
        }
    }

    /// Products shown, if any.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogView::Loaded(items) => items,
            CatalogView::Loading | CatalogView::Error(_) | CatalogView::Empty => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_commerce::{Currency, Money};

    fn store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.replace(vec![Product::new(
            1,
            "Toyota",
            "Corolla",
            "Sedan",
            Money::new(1_000_000, Currency::CLP),
        )]);
        store
    }

    #[test]
    fn test_projection() {
        assert_eq!(CatalogView::project(&CatalogStore::new(), "", "x"), CatalogView::Loading);
        assert_eq!(CatalogView::project(&store(), "zzz", "x"), CatalogView::Empty);
        assert_eq!(CatalogView::project(&store(), "toyo", "x").products().len(), 1);
    }
}
