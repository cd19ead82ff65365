//! Garage Online storefront session and render layer.
//!
//! This crate provides:
//! - `Storefront` - one shopper's session: catalog, cart, prompt, checkout
//! - `CatalogView` - what the product grid shows
//! - Section renderers for the grid, cart panel, badge and payment form
//! - Invoice document rendering and delivery through an `InvoiceSink`
//! - `BusyIndicator` and its RAII `BusyGuard`

pub mod busy;
pub mod config;
pub mod error;
pub mod invoice;
pub mod messages;
pub mod notice;
pub mod page;
pub mod sections;
pub mod session;
pub mod view;

pub use busy::{BusyGuard, BusyIndicator, NoBusyIndicator, RecordingBusyIndicator};
pub use config::{StorefrontConfig, DEFAULT_CATALOG_URL};
pub use error::StorefrontError;
pub use invoice::{FileInvoiceSink, InvoiceDocument, InvoiceSink, MemoryInvoiceSink};
pub use messages::Messages;
pub use notice::{Notice, NoticeKind};
pub use session::{CheckoutReceipt, Storefront};
pub use view::CatalogView;
