//! Commerce error types.

use thiserror::Error;

use crate::catalog::SourceError;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the current catalog snapshot.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity text could not be read as an integer.
    #[error("Quantity is not a whole number: {0:?}")]
    UnparsableQuantity(String),

    /// No product is bound to the quantity prompt.
    #[error("No product selected")]
    NothingSelected,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Payment form failed validation.
    #[error("Payment form incomplete: {}", .0.join(", "))]
    PaymentFormInvalid(Vec<String>),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Catalog could not be fetched or decoded.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[from] SourceError),
}

impl CommerceError {
    /// Whether this error is a user input problem that the user can fix in place.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CommerceError::InvalidQuantity(_)
                | CommerceError::UnparsableQuantity(_)
                | CommerceError::PaymentFormInvalid(_)
        )
    }
}
