//! Catalog sources backed by HTTP and the local filesystem.

use std::path::PathBuf;

use async_trait::async_trait;
use garage_commerce::catalog::{decode_catalog, CatalogSource, Product, SourceError};
use garage_commerce::Currency;
use tracing::info;

use crate::client::{FetchClient, FetchError};

/// Catalog served as a JSON array from a URL.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: FetchClient,
    url: String,
    currency: Currency,
}

impl HttpCatalogSource {
    /// Create a source for the given URL.
    pub fn new(url: impl Into<String>, currency: Currency) -> Result<Self, FetchError> {
        Ok(Self::with_client(FetchClient::new()?, url, currency))
    }

    /// Create a source sharing an existing client.
    pub fn with_client(client: FetchClient, url: impl Into<String>, currency: Currency) -> Self {
        Self {
            client,
            url: url.into(),
            currency,
        }
    }

    /// The catalog URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        let body = self.client.get_bytes(&self.url).await?;
        let products = decode_catalog(&body, self.currency)?;
        info!(url = %self.url, count = products.len(), "catalog fetched");
        Ok(products)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Catalog read from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    currency: Currency,
}

impl FileCatalogSource {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>, currency: Currency) -> Self {
        Self {
            path: path.into(),
            currency,
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::Connection(format!("{}: {e}", self.path.display())))?;
        decode_catalog(&body, self.currency)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source from a location string: `http(s)://` URLs are fetched,
/// anything else is read as a file path (a `file://` prefix is stripped).
pub fn source_for(location: &str, currency: Currency) -> Result<Box<dyn CatalogSource>, FetchError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpCatalogSource::new(location, currency)?))
    } else {
        let path = location.strip_prefix("file://").unwrap_or(location);
        Ok(Box::new(FileCatalogSource::new(path, currency)))
    }
}
