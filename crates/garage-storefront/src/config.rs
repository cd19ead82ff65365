//! Storefront configuration.

use std::path::PathBuf;

use garage_commerce::checkout::DEFAULT_INVOICE_PREFIX;
use garage_commerce::{Currency, Locale};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorefrontError};

/// Public catalog of the Garage Online storefront.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/Berlyn-Simet/vehiculos_json/main/vehiculos.json";

/// Settings for one storefront session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Where the catalog is fetched from (URL or file path).
    pub catalog_url: String,
    /// Display locale.
    pub locale: Locale,
    /// Currency catalog prices are expressed in.
    pub currency: Currency,
    /// Name shown in page headers.
    pub store_name: String,
    /// Invoice document name prefix.
    pub invoice_prefix: String,
    /// Directory invoice documents are written to.
    pub invoice_dir: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            locale: Locale::default(),
            currency: Currency::CLP,
            store_name: "Garage Online".to_string(),
            invoice_prefix: DEFAULT_INVOICE_PREFIX.to_string(),
            invoice_dir: PathBuf::from("."),
        }
    }
}

impl StorefrontConfig {
    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.catalog_url.trim().is_empty() {
            return Err(StorefrontError::Config("catalog_url is empty".into()));
        }
        if self.invoice_prefix.trim().is_empty() {
            return Err(StorefrontError::Config("invoice_prefix is empty".into()));
        }
        if self
            .invoice_prefix
            .chars()
            .any(|c| std::path::is_separator(c) || c.is_control())
        {
            return Err(StorefrontError::Config(format!(
                "invoice_prefix contains invalid characters: {:?}",
                self.invoice_prefix
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.locale, Locale::EsCl);
        assert_eq!(config.invoice_prefix, "factura-garage-online");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"locale": "en-US", "store_name": "Test"}"#).unwrap();
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.store_name, "Test");
        assert_eq!(config.currency, Currency::CLP);
    }

    #[test]
    fn test_validate_rejects_bad_prefix() {
        let config = StorefrontConfig {
            invoice_prefix: "../escape".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(StorefrontError::Config(_))));
    }
}
