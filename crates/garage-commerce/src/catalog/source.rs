//! Catalog source seam.
//!
//! The catalog endpoint is an external collaborator. Anything that can hand
//! back a list of products implements [`CatalogSource`].

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::{Product, ProductRecord};
use crate::money::Currency;

/// Why a catalog could not be obtained.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SourceError {
    /// Endpoint answered with a non-success status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// Endpoint could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Body was not a sequence of product records.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Something that can fetch the full catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product, in the order the source serves them.
    async fn fetch(&self) -> Result<Vec<Product>, SourceError>;

    /// Short description for logs (e.g., the URL).
    fn describe(&self) -> String {
        "catalog source".to_string()
    }
}

/// Decode a catalog body: a bare JSON array of product records.
pub fn decode_catalog(body: &[u8], currency: Currency) -> Result<Vec<Product>, SourceError> {
    let records: Vec<ProductRecord> =
        serde_json::from_slice(body).map_err(|e| SourceError::Decode(e.to_string()))?;
    Ok(records
        .into_iter()
        .map(|record| record.into_product(currency))
        .collect())
}

/// An in-memory source that always answers the same way.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    response: Result<Vec<Product>, SourceError>,
}

impl StaticCatalogSource {
    /// A source serving the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            response: Ok(products),
        }
    }

    /// A source that always fails with the given error.
    pub fn failing(error: SourceError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        self.response.clone()
    }

    fn describe(&self) -> String {
        "static catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bare_array() {
        let body = br#"[
            {"codigo": 1, "marca": "Toyota", "modelo": "Corolla", "categoria": "Sedan", "precio_venta": 1000000},
            {"codigo": 2, "marca": "Ford", "modelo": "Ranger", "categoria": "Pickup", "precio_venta": 2500000}
        ]"#;
        let products = decode_catalog(body, Currency::CLP).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].brand, "Ford");
    }

    #[test]
    fn test_decode_rejects_object_wrapper() {
        let body = br#"{"vehiculos": []}"#;
        assert!(matches!(
            decode_catalog(body, Currency::CLP),
            Err(SourceError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_catalog(b"<html>", Currency::CLP).is_err());
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticCatalogSource::failing(SourceError::Connection("offline".into()));
        assert_eq!(
            source.fetch().await,
            Err(SourceError::Connection("offline".into()))
        );
    }
}
