//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod page;
pub mod shop;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use garage_data::source_for;
use garage_storefront::{InvoiceSink, Storefront};

use crate::context::Context;

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Initial search query.
    #[arg(short, long, default_value = "")]
    pub query: String,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Filter by brand, model or category.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Show at most this many products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the page command.
#[derive(Args)]
pub struct PageArgs {
    /// Filter by brand, model or category.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Output file.
    #[arg(short, long, default_value = "garage-online.html")]
    pub out: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Create a session from the context's config and load the catalog.
///
/// A failed load is reported but not fatal: the session stays usable and its
/// grid shows the load-failed state.
pub async fn open_storefront(ctx: &Context, invoices: impl InvoiceSink + 'static) -> Result<Storefront> {
    let store_config = ctx.config.store.clone();
    store_config.validate()?;

    let source = source_for(&store_config.catalog_url, store_config.currency)
        .context("Failed to create catalog client")?;
    tracing::debug!(catalog = %source.describe(), "catalog source selected");

    let mut storefront = Storefront::new(store_config, invoices);
    let spinner = ctx.output.spinner();
    match storefront.load(source.as_ref(), &spinner).await {
        Ok(count) => ctx.output.debug(&format!("Loaded {} products", count)),
        Err(err) => ctx.output.debug(&format!("Catalog load failed: {}", err)),
    }
    if let Some(notice) = storefront.take_notice() {
        ctx.output.notice(&notice);
    }

    Ok(storefront)
}
