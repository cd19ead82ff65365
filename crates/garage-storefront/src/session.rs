//! The storefront session.
//!
//! [`Storefront`] owns the catalog store, the cart, the quantity prompt and
//! the checkout flow for one shopper. Front ends drive it through `&mut self`
//! methods and render from its accessors.

use chrono::{DateTime, FixedOffset, Local};
use garage_commerce::cart::Cart;
use garage_commerce::catalog::{CatalogSource, CatalogStore, Product, SourceError};
use garage_commerce::checkout::{
    AddedToCart, CheckoutFlow, CheckoutStep, InvoiceRecord, PaymentForm, QuantityPrompt,
};
use garage_commerce::{CommerceError, ProductCode};
use tracing::{debug, info, warn};

use crate::busy::{BusyGuard, BusyIndicator};
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::invoice::{render_invoice, InvoiceDocument, InvoiceSink, INVOICE_EXTENSION};
use crate::messages::Messages;
use crate::notice::Notice;
use crate::page::Page;
use crate::sections::{
    render_cart_badge, render_cart_panel, render_catalog_grid, render_header, render_payment_form,
};
use crate::view::CatalogView;

/// Result of a completed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    /// The invoice that was emitted.
    pub invoice: InvoiceRecord,
    /// Where the sink put the document.
    pub location: String,
}

/// One shopper's storefront session.
pub struct Storefront {
    config: StorefrontConfig,
    messages: &'static Messages,
    catalog: CatalogStore,
    view: CatalogView,
    query: String,
    cart: Cart,
    prompt: QuantityPrompt,
    checkout: CheckoutFlow,
    payment: PaymentForm,
    badge_pulse: bool,
    notice: Option<Notice>,
    invoices: Box<dyn InvoiceSink>,
}

impl Storefront {
    /// Create a session with an empty cart and no catalog.
    pub fn new(config: StorefrontConfig, invoices: impl InvoiceSink + 'static) -> Self {
        let messages = Messages::for_locale(config.locale);
        let cart = Cart::new(config.currency);
        Self {
            config,
            messages,
            catalog: CatalogStore::new(),
            view: CatalogView::Loading,
            query: String::new(),
            cart,
            prompt: QuantityPrompt::new(),
            checkout: CheckoutFlow::new(),
            payment: PaymentForm::new(),
            badge_pulse: false,
            notice: None,
            invoices: Box::new(invoices),
        }
    }

    // --- Catalog ---

    /// Fetch the catalog and redraw the grid.
    ///
    /// The busy indicator is shown for the duration of the fetch. On failure
    /// the grid shows the load-failed message and the error is returned.
    pub async fn load<S>(
        &mut self,
        source: &S,
        busy: &dyn BusyIndicator,
    ) -> std::result::Result<usize, SourceError>
    where
        S: CatalogSource + ?Sized,
    {
        let _busy = BusyGuard::new(busy, self.messages.loading);
        self.view = CatalogView::Loading;

        let result = self.catalog.load(source).await;
        self.refresh_view();
        if result.is_err() {
            self.notice = Some(Notice::error(self.messages.load_failed));
        }
        result
    }

    /// Set the search query and redraw the grid.
    pub fn search(&mut self, query: &str) -> &CatalogView {
        self.query = query.to_string();
        self.refresh_view();
        &self.view
    }

    fn refresh_view(&mut self) {
        self.view = CatalogView::project(&self.catalog, &self.query, self.messages.load_failed);
    }

    /// What the grid currently shows.
    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The catalog store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    // --- Quantity prompt ---

    /// Open the quantity prompt for a product ("add to cart" on a card).
    pub fn select_product(&mut self, code: ProductCode) -> Result<&Product> {
        let Some(product) = self.catalog.find(code).cloned() else {
            debug!(%code, "selected product not in catalog");
            self.notice = Some(Notice::validation(self.messages.product_unavailable));
            return Err(CommerceError::ProductNotFound(code.get()).into());
        };

        self.prompt.open(product);
        self.prompt
            .selected()
            .ok_or_else(|| CommerceError::NothingSelected.into())
    }

    /// Confirm the prompt with the typed quantity.
    ///
    /// An invalid or too large quantity leaves the prompt open and the cart
    /// unchanged.
    pub fn confirm_quantity(&mut self, input: &str) -> Result<AddedToCart> {
        match self.prompt.confirm_with(&mut self.cart, input) {
            Ok(added) => {
                self.badge_pulse = true;
                self.notice = Some(Notice::success(self.messages.added_to_cart));
                Ok(added)
            }
            Err(err) => {
                match &err {
                    e if e.is_validation() => {
                        debug!(input, "rejected quantity");
                        self.notice = Some(Notice::validation(self.messages.quantity_invalid));
                    }
                    CommerceError::Overflow => {
                        debug!(input, "quantity would overflow the cart");
                        self.notice = Some(Notice::validation(self.messages.quantity_too_large));
                    }
                    CommerceError::NothingSelected => {}
                    other => {
                        warn!(error = %other, "add to cart failed");
                        self.notice = Some(Notice::error(other.to_string()));
                    }
                }
                Err(err.into())
            }
        }
    }

    /// Dismiss the prompt without changing the cart.
    pub fn dismiss_prompt(&mut self) {
        self.prompt.dismiss();
    }

    /// The quantity prompt.
    pub fn prompt(&self) -> &QuantityPrompt {
        &self.prompt
    }

    // --- Cart and checkout ---

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current checkout step.
    pub fn checkout_step(&self) -> CheckoutStep {
        self.checkout.step()
    }

    /// Open the cart view.
    pub fn open_cart(&mut self) -> Result<()> {
        self.checkout.open_cart()?;
        Ok(())
    }

    /// Close the cart or payment view.
    pub fn close_checkout(&mut self) {
        self.checkout.close();
    }

    /// Move from the cart view to the payment view.
    pub fn begin_payment(&mut self) -> Result<()> {
        if let Err(err) = self.checkout.begin_payment(&self.cart) {
            if matches!(err, CommerceError::EmptyCart) {
                self.notice = Some(Notice::validation(self.messages.cart_empty));
            }
            return Err(err.into());
        }
        Ok(())
    }

    /// Set a payment form field. Returns false for an unknown field.
    pub fn set_payment_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.payment.set(name, value)
    }

    /// The payment form.
    pub fn payment_form(&self) -> &PaymentForm {
        &self.payment
    }

    /// Submit the payment form, stamping the invoice with the local time.
    pub fn submit_payment(&mut self) -> Result<CheckoutReceipt> {
        self.submit_payment_at(Local::now().fixed_offset())
    }

    /// Submit the payment form.
    ///
    /// On success the invoice is delivered, then the cart is reset and the
    /// payment view closes. If validation or delivery fails, nothing changes.
    pub fn submit_payment_at(&mut self, now: DateTime<FixedOffset>) -> Result<CheckoutReceipt> {
        self.checkout.ensure_payment_open()?;

        let details = match self.payment.validate() {
            Ok(details) => details,
            Err(err) => {
                if let CommerceError::PaymentFormInvalid(fields) = &err {
                    debug!(?fields, "payment form rejected");
                    let labels = fields
                        .iter()
                        .map(|f| self.messages.field_label(f).to_string())
                        .collect();
                    self.notice =
                        Some(Notice::validation(self.messages.payment_incomplete).with_details(labels));
                }
                return Err(err.into());
            }
        };

        let invoice = InvoiceRecord::from_cart(&self.cart, details.cardholder, now)?;
        let document = InvoiceDocument {
            file_name: format!(
                "{}.{}",
                invoice.file_stem(&self.config.invoice_prefix),
                INVOICE_EXTENSION
            ),
            html: render_invoice(&invoice, self.config.locale, self.messages),
        };

        let location = match self.invoices.deliver(&document) {
            Ok(location) => location,
            Err(err) => {
                warn!(error = %err, "invoice delivery failed; cart kept");
                self.notice = Some(Notice::error(self.messages.invoice_failed));
                return Err(err);
            }
        };

        self.cart.reset();
        self.payment.clear();
        self.checkout.complete()?;
        self.badge_pulse = true;
        self.notice = Some(Notice::success(self.messages.payment_success));
        info!(invoice = %invoice.id, total = %invoice.total, %location, "checkout completed");

        Ok(CheckoutReceipt { invoice, location })
    }

    // --- Notices and rendering ---

    /// Take the latest notice, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Whether the cart badge will pulse on its next render.
    pub fn badge_pulse(&self) -> bool {
        self.badge_pulse
    }

    /// Render the cart badge; clears the pulse flag.
    pub fn render_badge(&mut self) -> String {
        let pulse = std::mem::take(&mut self.badge_pulse);
        render_cart_badge(self.cart.item_count(), pulse)
    }

    /// Render the product grid.
    pub fn render_grid(&self) -> String {
        render_catalog_grid(&self.view, self.config.locale, self.messages)
    }

    /// Render the cart panel.
    pub fn render_cart(&self) -> Result<String> {
        Ok(render_cart_panel(&self.cart, self.config.locale, self.messages)?)
    }

    /// Render the whole page: header, grid, cart panel and, while the
    /// payment view is open, the payment form.
    pub fn render_page(&mut self) -> Result<String> {
        let badge = self.render_badge();
        let mut page = Page::storefront(self.config.locale.tag(), self.config.store_name.clone());
        page.push(render_header(&self.config.store_name, &self.query, &badge, self.messages));
        page.push(format!("<main>\n{}\n</main>", self.render_grid()));
        page.push(self.render_cart()?);
        if self.checkout.step() == CheckoutStep::PaymentView {
            page.push(render_payment_form(&self.payment, self.messages));
        }
        Ok(page.render())
    }

    /// Session configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Messages for the session locale.
    pub fn messages(&self) -> &'static Messages {
        self.messages
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("catalog", &self.catalog.len())
            .field("query", &self.query)
            .field("cart_items", &self.cart.item_count())
            .field("checkout", &self.checkout.step())
            .finish_non_exhaustive()
    }
}

impl From<StorefrontError> for Notice {
    fn from(err: StorefrontError) -> Self {
        if err.is_validation() {
            Notice::validation(err.to_string())
        } else {
            Notice::error(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::busy::NoBusyIndicator;
    use crate::invoice::MemoryInvoiceSink;
    use garage_commerce::catalog::StaticCatalogSource;
    use garage_commerce::{Currency, Money};

    fn catalog() -> StaticCatalogSource {
        StaticCatalogSource::new(vec![
            Product::new(1, "Toyota", "Corolla", "Sedan", Money::new(1_000_000, Currency::CLP)),
            Product::new(2, "Ford", "Ranger", "Pickup", Money::new(2_500_000, Currency::CLP)),
        ])
    }

    async fn loaded() -> Storefront {
        let mut store = Storefront::new(StorefrontConfig::default(), MemoryInvoiceSink::new());
        store.load(&catalog(), &NoBusyIndicator).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_search_updates_view() {
        let mut store = loaded().await;
        assert_eq!(store.view().products().len(), 2);
        assert_eq!(store.search("ford").products().len(), 1);
        assert_eq!(store.search("zzz"), &CatalogView::Empty);
        assert_eq!(store.search("").products().len(), 2);
    }

    #[tokio::test]
    async fn test_select_unknown_product() {
        let mut store = loaded().await;
        let err = store.select_product(ProductCode::new(99)).unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Commerce(CommerceError::ProductNotFound(99))
        ));
        assert!(!store.prompt().is_open());
        assert!(store.take_notice().is_some());
    }

    #[tokio::test]
    async fn test_badge_pulse_clears_after_render() {
        let mut store = loaded().await;
        store.select_product(ProductCode::new(1)).unwrap();
        store.confirm_quantity("1").unwrap();

        assert!(store.badge_pulse());
        assert!(store.render_badge().contains("pulse"));
        assert!(!store.render_badge().contains("pulse"));
    }

    #[tokio::test]
    async fn test_invalid_quantity_notice() {
        let mut store = loaded().await;
        store.select_product(ProductCode::new(1)).unwrap();
        assert!(store.confirm_quantity("0").unwrap_err().is_validation());

        let notice = store.take_notice().unwrap();
        assert_eq!(notice.text, "La cantidad debe ser mayor que cero.");
        assert!(store.prompt().is_open());
        assert!(store.cart().is_empty());
    }

    #[tokio::test]
    async fn test_cart_overflow_keeps_session_usable() {
        let mut store = loaded().await;
        store.select_product(ProductCode::new(1)).unwrap();
        store.confirm_quantity(&(i64::MAX / 1_000_000).to_string()).unwrap();

        store.select_product(ProductCode::new(2)).unwrap();
        let err = store.confirm_quantity("1").unwrap_err();
        assert!(matches!(err, StorefrontError::Commerce(CommerceError::Overflow)));
        assert_eq!(
            store.take_notice().unwrap().text,
            "La cantidad supera lo que el carrito puede registrar."
        );
        assert!(store.prompt().is_open());
        assert_eq!(store.cart().unique_item_count(), 1);

        let html = store.render_page().unwrap();
        assert!(html.contains("Toyota Corolla"));
        store.dismiss_prompt();
        store.open_cart().unwrap();
        store.begin_payment().unwrap();
        for (name, value) in [
            ("card_name", "Ana Pérez"),
            ("card_number", "4111 1111 1111 1111"),
            ("card_expiry", "12/30"),
            ("card_cvv", "123"),
        ] {
            store.set_payment_field(name, value);
        }
        store.submit_payment().unwrap();
        assert!(store.cart().is_empty());
    }

    #[tokio::test]
    async fn test_empty_cart_blocks_payment() {
        let mut store = loaded().await;
        store.open_cart().unwrap();
        assert!(store.begin_payment().is_err());
        assert_eq!(store.checkout_step(), CheckoutStep::CartView);
        assert_eq!(store.take_notice().unwrap().text, "El carrito está vacío.");
    }

    #[tokio::test]
    async fn test_render_page_shows_payment_form_only_in_payment_view() {
        let mut store = loaded().await;
        assert!(!store.render_page().unwrap().contains("paymentForm"));

        store.select_product(ProductCode::new(2)).unwrap();
        store.confirm_quantity("1").unwrap();
        store.open_cart().unwrap();
        store.begin_payment().unwrap();

        let html = store.render_page().unwrap();
        assert!(html.contains("paymentForm"));
        assert!(html.contains("Ford Ranger"));
    }
}
