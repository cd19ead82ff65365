//! The catalog store: owns the current snapshot.

use tracing::{info, warn};

use crate::catalog::{CatalogSource, Product, SourceError};
use crate::ids::ProductCode;
use crate::search::{FilterOutcome, TextFilter};

/// Where the catalog is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    /// No load has been attempted.
    #[default]
    NotLoaded,
    /// A fetch is outstanding.
    Loading,
    /// The snapshot holds the last successful fetch.
    Loaded,
    /// The last fetch failed; the snapshot is empty.
    Failed(String),
}

/// Holds the catalog snapshot and answers lookups and filters against it.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    snapshot: Vec<Product>,
    status: CatalogStatus,
}

impl CatalogStore {
    /// Create an empty, not-yet-loaded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog and replace the snapshot.
    ///
    /// On failure the snapshot is left empty and the status records the
    /// error. Returns the number of products loaded.
    pub async fn load<S>(&mut self, source: &S) -> Result<usize, SourceError>
    where
        S: CatalogSource + ?Sized,
    {
        self.status = CatalogStatus::Loading;
        info!(source = %source.describe(), "loading catalog");

        match source.fetch().await {
            Ok(products) => {
                let count = products.len();
                self.replace(products);
                info!(count, "catalog loaded");
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed");
                self.snapshot.clear();
                self.status = CatalogStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Replace the snapshot wholesale.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.snapshot = products;
        self.status = CatalogStatus::Loaded;
    }

    /// Products whose brand, model or category contain the query, ignoring case.
    ///
    /// An empty query returns the whole snapshot. Snapshot order is preserved.
    pub fn filter(&self, query: &str) -> FilterOutcome {
        if self.status != CatalogStatus::Loaded {
            return FilterOutcome::NotLoaded;
        }

        let filter = TextFilter::new(query);
        let matches: Vec<Product> = self
            .snapshot
            .iter()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect();

        if matches.is_empty() {
            FilterOutcome::NoMatches
        } else {
            FilterOutcome::Matches(matches)
        }
    }

    /// Look a product up by code.
    pub fn find(&self, code: ProductCode) -> Option<&Product> {
        self.snapshot.iter().find(|product| product.code == code)
    }

    /// The current snapshot.
    pub fn products(&self) -> &[Product] {
        &self.snapshot
    }

    /// Number of products in the snapshot.
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Check if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Current load status.
    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalogSource;
    use crate::money::{Currency, Money};

    fn corolla() -> Product {
        Product::new(1, "Toyota", "Corolla", "Sedan", Money::new(1_000_000, Currency::CLP))
    }

    fn ranger() -> Product {
        Product::new(2, "Ford", "Ranger", "Pickup", Money::new(2_500_000, Currency::CLP))
    }

    fn loaded(products: Vec<Product>) -> CatalogStore {
        let mut store = CatalogStore::new();
        store.replace(products);
        store
    }

    #[test]
    fn test_empty_query_returns_snapshot() {
        let store = loaded(vec![corolla(), ranger()]);
        match store.filter("") {
            FilterOutcome::Matches(items) => assert_eq!(items.len(), 2),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_across_fields() {
        let store = loaded(vec![corolla(), ranger()]);

        for query in ["TOYO", "sedan", "coRoLLa"] {
            match store.filter(query) {
                FilterOutcome::Matches(items) => {
                    assert_eq!(items.len(), 1, "query {query}");
                    assert_eq!(items[0].code, ProductCode::new(1));
                }
                other => panic!("query {query}: unexpected outcome {other:?}"),
            }
        }
    }

    #[test]
    fn test_no_matches_is_distinct_from_not_loaded() {
        let store = loaded(vec![corolla()]);
        assert_eq!(store.filter("zzz"), FilterOutcome::NoMatches);

        let fresh = CatalogStore::new();
        assert_eq!(fresh.filter(""), FilterOutcome::NotLoaded);
    }

    #[test]
    fn test_filter_preserves_order() {
        let store = loaded(vec![ranger(), corolla()]);
        let codes: Vec<i64> = store
            .filter("r")
            .into_products()
            .iter()
            .map(|p| p.code.get())
            .collect();
        assert_eq!(codes, vec![2, 1]);
    }

    #[test]
    fn test_find() {
        let store = loaded(vec![corolla(), ranger()]);
        assert_eq!(store.find(ProductCode::new(2)).map(|p| p.model.as_str()), Some("Ranger"));
        assert!(store.find(ProductCode::new(99)).is_none());
    }

    #[tokio::test]
    async fn test_load_replaces_snapshot() {
        let mut store = loaded(vec![corolla(), ranger()]);
        let source = StaticCatalogSource::new(vec![ranger()]);

        let count = store.load(&source).await.unwrap();
        assert_eq!(count, 1);
        assert_eq!(store.products(), &[ranger()]);
        assert_eq!(store.status(), &CatalogStatus::Loaded);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_snapshot_empty() {
        let mut store = loaded(vec![corolla()]);
        let source = StaticCatalogSource::failing(SourceError::Http {
            status: 500,
            url: "https://catalog.example".into(),
        });

        assert!(store.load(&source).await.is_err());
        assert!(store.is_empty());
        assert!(matches!(store.status(), CatalogStatus::Failed(_)));
        assert_eq!(store.filter(""), FilterOutcome::NotLoaded);
    }
}
