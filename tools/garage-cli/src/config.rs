//! CLI configuration.

use anyhow::{Context, Result};
use garage_storefront::StorefrontConfig;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the catalog location.
pub const CATALOG_URL_ENV: &str = "GARAGE_CATALOG_URL";

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["garage.toml", ".garage.toml", "garage.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub store: StorefrontConfig,

    /// Interactive shop settings.
    #[serde(default)]
    pub shop: ShopConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Apply overrides from an environment variable lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(CATALOG_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.store.catalog_url = url;
        }
    }
}

/// Interactive shop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    /// Maximum products listed per page in the picker.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    15
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Generate a default garage.toml config file.
pub fn generate_default_config() -> String {
    let defaults = StorefrontConfig::default();
    format!(
        r#"# Garage Online storefront configuration

[store]
catalog_url = "{catalog_url}"
locale = "es-CL"
currency = "CLP"
store_name = "Garage Online"
invoice_prefix = "{prefix}"
invoice_dir = "invoices"

[shop]
page_size = 15
"#,
        catalog_url = defaults.catalog_url,
        prefix = defaults.invoice_prefix,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_commerce::Locale;

    #[test]
    fn test_generated_config_parses() {
        let config = CliConfig::parse("garage.toml", &generate_default_config()).unwrap();
        assert_eq!(config.store.locale, Locale::EsCl);
        assert_eq!(config.store.invoice_dir, std::path::PathBuf::from("invoices"));
        assert_eq!(config.shop.page_size, 15);
    }

    #[test]
    fn test_missing_sections_default() {
        let config = CliConfig::parse("garage.toml", "").unwrap();
        assert_eq!(config, CliConfig::default());

        let config = CliConfig::parse("garage.json", r#"{"store": {"locale": "en-US"}}"#).unwrap();
        assert_eq!(config.store.locale, Locale::EnUs);
    }

    #[test]
    fn test_env_override() {
        let mut config = CliConfig::default();
        config.apply_env(|key| (key == CATALOG_URL_ENV).then(|| "file:///tmp/cat.json".to_string()));
        assert_eq!(config.store.catalog_url, "file:///tmp/cat.json");

        let mut config = CliConfig::default();
        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config.store.catalog_url, StorefrontConfig::default().catalog_url);
    }
}
