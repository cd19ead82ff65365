//! Storefront domain types and logic for Garage Online.
//!
//! This crate holds everything the storefront decides without touching the
//! network or a display:
//!
//! - **Catalog**: Products, the catalog source seam, the snapshot store
//! - **Search**: Live text filtering over the snapshot
//! - **Cart**: Cart lines, merging, totals
//! - **Checkout**: Quantity prompt, checkout flow, payment form, invoices
//!
//! # Example
//!
//! ```rust
//! use garage_commerce::prelude::*;
//!
//! let corolla = Product::new(1, "Toyota", "Corolla", "Sedan", Money::new(1_000_000, Currency::CLP));
//!
//! let mut cart = Cart::new(Currency::CLP);
//! let mut prompt = QuantityPrompt::new();
//! prompt.open(corolla);
//! prompt.confirm_with(&mut cart, "2").unwrap();
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().unwrap().format(Locale::EsCl), "$2.000.000");
//! ```

pub mod error;
pub mod ids;
pub mod locale;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use locale::Locale;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::locale::Locale;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogSource, CatalogStatus, CatalogStore, Product, ProductRecord, SourceError,
        StaticCatalogSource,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSummary, LinePricing};

    // Checkout
    pub use crate::checkout::{
        AddedToCart, CheckoutFlow, CheckoutStep, InvoiceLine, InvoiceRecord, PaymentDetails,
        PaymentForm, PromptState, QuantityPrompt,
    };

    // Search
    pub use crate::search::{FilterOutcome, TextFilter};
}
