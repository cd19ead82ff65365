//! Product catalog module.
//!
//! Contains the product type, the catalog source seam, and the store that
//! owns the current snapshot.

mod product;
mod source;
mod store;

pub use product::{strip_decorations, Product, ProductRecord};
pub use source::{decode_catalog, CatalogSource, SourceError, StaticCatalogSource};
pub use store::{CatalogStatus, CatalogStore};
