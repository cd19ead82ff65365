//! Data access layer for the storefront catalog.
//!
//! This crate provides:
//! - `FetchClient` - HTTP GET with status checking and JSON decoding
//! - `HttpCatalogSource` - Catalog source backed by a remote JSON document
//! - `FileCatalogSource` - Catalog source backed by a local JSON file

mod client;
mod source;

pub use client::*;
pub use source::*;
