//! Storefront error types.

use std::path::PathBuf;

use garage_commerce::CommerceError;
use thiserror::Error;

/// Errors surfaced by storefront operations.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// A cart, prompt or checkout rule was violated.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The invoice document could not be written.
    #[error("Failed to write invoice {path}: {source}")]
    InvoiceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StorefrontError {
    /// Whether the shopper can fix this in place (bad quantity, incomplete form).
    pub fn is_validation(&self) -> bool {
        matches!(self, StorefrontError::Commerce(err) if err.is_validation())
    }
}

/// Result type for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
