//! Checkout module.
//!
//! Contains the quantity prompt, the checkout flow, the payment form and
//! invoice records.

mod flow;
mod invoice;
mod payment;
mod selection;

pub use flow::{CheckoutFlow, CheckoutStep};
pub use invoice::{InvoiceLine, InvoiceRecord, DEFAULT_INVOICE_PREFIX};
pub use payment::{
    FieldConstraint, FormField, PaymentDetails, PaymentForm, CARD_CVV, CARD_EXPIRY, CARD_NAME,
    CARD_NUMBER,
};
pub use selection::{parse_quantity, AddedToCart, PromptState, QuantityPrompt, DEFAULT_QUANTITY_INPUT};
