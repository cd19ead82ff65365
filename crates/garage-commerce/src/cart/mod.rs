//! Shopping cart module.
//!
//! Contains the cart, its lines, and derived pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{CartSummary, LinePricing};
