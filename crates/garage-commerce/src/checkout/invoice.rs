//! Invoice records produced by a completed checkout.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::{InvoiceId, ProductCode};
use crate::locale::Locale;
use crate::money::Money;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Default prefix for invoice document names.
pub const DEFAULT_INVOICE_PREFIX: &str = "factura-garage-online";

/// One purchased product on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceLine {
    /// Product code.
    pub code: ProductCode,
    /// "Brand Model".
    pub description: String,
    /// Units purchased.
    pub quantity: i64,
    /// Unit price at purchase time.
    pub unit_price: Money,
    /// unit_price * quantity.
    pub subtotal: Money,
}

impl InvoiceLine {
    /// "Toyota Corolla (x2)".
    pub fn label(&self) -> String {
        format!("{} (x{})", self.description, self.quantity)
    }
}

/// A purchase receipt built from the cart at payment time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceRecord {
    /// Invoice number.
    pub id: InvoiceId,
    /// When the invoice was issued, in the shopper's local offset.
    pub issued_at: DateTime<FixedOffset>,
    /// Cardholder name from the payment form.
    pub customer_name: String,
    /// Purchased lines in cart order.
    pub lines: Vec<InvoiceLine>,
    /// Grand total.
    pub total: Money,
}

impl InvoiceRecord {
    /// Build an invoice from the cart's current contents.
    ///
    /// The cart is not modified; resetting it is the caller's job once the
    /// invoice has been delivered.
    pub fn from_cart(
        cart: &Cart,
        customer_name: impl Into<String>,
        issued_at: DateTime<FixedOffset>,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let lines = cart
            .lines()
            .iter()
            .map(|line| {
                Ok(InvoiceLine {
                    code: line.product.code,
                    description: line.product.display_name(),
                    quantity: line.quantity,
                    unit_price: line.product.price,
                    subtotal: line.subtotal()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        Ok(Self {
            id: InvoiceId::issue(issued_at.timestamp_millis()),
            issued_at,
            customer_name: customer_name.into(),
            lines,
            total: cart.total()?,
        })
    }

    /// Document name without extension, e.g. `factura-garage-online-1718000000000`.
    pub fn file_stem(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.id)
    }

    /// Issue date in the locale's date format.
    pub fn issued_on(&self, locale: Locale) -> String {
        self.issued_at.format(locale.date_format()).to_string()
    }

    /// Total units on the invoice.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Currency;
    use chrono::TimeZone;

    fn issued_at() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(4 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, 15, 30, 0)
            .unwrap()
    }

    fn cart() -> Cart {
        let mut cart = Cart::new(Currency::CLP);
        let corolla = Product::new(1, "Toyota", "Corolla", "Sedan", Money::new(1_000_000, Currency::CLP));
        let ranger = Product::new(2, "Ford", "Ranger", "Pickup", Money::new(2_500_000, Currency::CLP));
        cart.add_item(&corolla, 2).unwrap();
        cart.add_item(&ranger, 1).unwrap();
        cart
    }

    #[test]
    fn test_from_cart() {
        let invoice = InvoiceRecord::from_cart(&cart(), "Ana", issued_at()).unwrap();

        assert_eq!(invoice.lines.len(), 2);
        assert_eq!(invoice.lines[0].label(), "Toyota Corolla (x2)");
        assert_eq!(invoice.lines[0].subtotal.amount_minor, 2_000_000);
        assert_eq!(invoice.total.amount_minor, 4_500_000);
        assert_eq!(invoice.item_count(), 3);
        assert_eq!(invoice.customer_name, "Ana");
    }

    #[test]
    fn test_empty_cart_has_no_invoice() {
        let result = InvoiceRecord::from_cart(&Cart::new(Currency::CLP), "Ana", issued_at());
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[test]
    fn test_file_stem_and_date() {
        let invoice = InvoiceRecord::from_cart(&cart(), "Ana", issued_at()).unwrap();
        let stem = invoice.file_stem(DEFAULT_INVOICE_PREFIX);

        assert!(stem.starts_with("factura-garage-online-"));
        assert!(invoice.id.get() >= issued_at().timestamp_millis());
        assert_eq!(invoice.issued_on(Locale::EsCl), "09-03-2024");
        assert_eq!(invoice.issued_on(Locale::EnUs), "3/9/2024");
    }

    #[test]
    fn test_consecutive_invoices_have_distinct_ids() {
        let first = InvoiceRecord::from_cart(&cart(), "Ana", issued_at()).unwrap();
        let second = InvoiceRecord::from_cart(&cart(), "Ana", issued_at()).unwrap();
        assert!(second.id > first.id);
    }
}
