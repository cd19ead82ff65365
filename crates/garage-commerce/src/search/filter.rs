//! Text filter over brand, model and category.

use crate::catalog::Product;

/// A case-insensitive substring filter.
///
/// A product matches when any of brand, model or category contains the
/// needle. An empty needle matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    /// Build a filter from raw search box text.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    /// Check if the filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check a product against the filter.
    pub fn matches(&self, product: &Product) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&product.brand, &product.model, &product.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product() -> Product {
        Product::new(1, "Toyota", "Corolla", "Sedán", Money::new(1, Currency::CLP))
    }

    #[test]
    fn test_matches_any_field() {
        assert!(TextFilter::new("toyota").matches(&product()));
        assert!(TextFilter::new("ROLL").matches(&product()));
        assert!(TextFilter::new("SEDÁN").matches(&product()));
        assert!(!TextFilter::new("ford").matches(&product()));
    }

    #[test]
    fn test_type_tag_is_not_searched() {
        let tagged = product().with_type_tag("Familiar");
        assert!(!TextFilter::new("familiar").matches(&tagged));
    }

    #[test]
    fn test_whitespace_query_matches_all() {
        let filter = TextFilter::new("   ");
        assert!(filter.is_empty());
        assert!(filter.matches(&product()));
    }
}
