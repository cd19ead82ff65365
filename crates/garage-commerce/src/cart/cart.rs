//! Cart and cart line types.

use crate::cart::{CartSummary, LinePricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductCode;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The session's shopping cart.
///
/// Holds at most one line per product code, in the order products were first
/// added. Quantities are not capped and not checked against stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Lines in insertion order.
    lines: Vec<CartLine>,
    /// Cart currency.
    currency: Currency,
}

impl Cart {
    /// Create an empty cart in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add a quantity of a product.
    ///
    /// Merges into the existing line for the product's code, or appends a new
    /// line. Returns the line's quantity after the change.
    ///
    /// Returns an error, leaving the cart untouched, if:
    /// - quantity is not positive
    /// - the product is priced in another currency
    /// - the line subtotal, the cart total or the item count would overflow
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<i64, CommerceError> {
        if quantity <= 0 {
            debug!(code = %product.code, quantity, "rejected non-positive quantity");
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        // The whole cart must stay summable after the change.
        let added = product.price.try_multiply(quantity).ok_or(CommerceError::Overflow)?;
        self.total()?.try_add(&added).ok_or(CommerceError::Overflow)?;
        self.checked_item_count()
            .and_then(|count| count.checked_add(quantity))
            .ok_or(CommerceError::Overflow)?;

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.code == product.code) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            existing
                .product
                .price
                .try_multiply(new_quantity)
                .ok_or(CommerceError::Overflow)?;

            existing.quantity = new_quantity;
            debug!(code = %product.code, quantity = new_quantity, "cart line incremented");
            return Ok(new_quantity);
        }

        let line = CartLine::new(product.clone(), quantity)?;
        self.lines.push(line);
        debug!(code = %product.code, quantity, "cart line added");
        Ok(quantity)
    }

    /// Sum of unit price × quantity over all lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let subtotals = self
            .lines
            .iter()
            .map(CartLine::subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(subtotals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    /// Total number of units (sum of quantities, not distinct lines).
    ///
    /// `add_item` keeps this within `i64`; a cart built any other way
    /// saturates instead of wrapping.
    pub fn item_count(&self) -> i64 {
        self.checked_item_count().unwrap_or(i64::MAX)
    }

    fn checked_item_count(&self) -> Option<i64> {
        self.lines
            .iter()
            .try_fold(0_i64, |acc, l| acc.checked_add(l.quantity))
    }

    /// Empty the cart.
    pub fn reset(&mut self) {
        self.lines.clear();
        debug!("cart reset");
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product code.
    pub fn line(&self, code: ProductCode) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.code == code)
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Per-line pricing plus totals, computed in one pass.
    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                Ok(LinePricing {
                    code: line.product.code,
                    unit_price: line.product.price,
                    quantity: line.quantity,
                    subtotal: line.subtotal()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let grand_total = Money::try_sum(lines.iter().map(|l| &l.subtotal), self.currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartSummary {
            item_count: self.item_count(),
            grand_total,
            lines,
        })
    }
}

/// One product's entry in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Every attribute of the product as it was when added.
    pub product: Product,
    /// Units in the cart; always positive.
    pub quantity: i64,
}

impl CartLine {
    /// Create a new line.
    pub fn new(product: Product, quantity: i64) -> Result<Self, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        product
            .price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(Self { product, quantity })
    }

    /// Unit price × quantity.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(code: i64, price: i64) -> Product {
        Product::new(code, "Toyota", format!("Model {code}"), "Sedan", Money::new(price, Currency::CLP))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::CLP);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total().unwrap().is_zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new(Currency::CLP);
        cart.add_item(&product(1, 1000), 2).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new(Currency::CLP);
        let p = product(1, 1000);

        for (q1, q2) in [(1, 1), (3, 7), (1, 999)] {
            cart.reset();
            cart.add_item(&p, q1).unwrap();
            let after = cart.add_item(&p, q2).unwrap();

            assert_eq!(after, q1 + q2);
            assert_eq!(cart.unique_item_count(), 1);
            assert_eq!(cart.line(p.code).unwrap().quantity, q1 + q2);
        }
    }

    #[test]
    fn test_non_positive_quantity_leaves_cart_unchanged() {
        let mut cart = Cart::new(Currency::CLP);
        cart.add_item(&product(1, 1000), 1).unwrap();
        let before = cart.clone();

        for q in [0, -1, -50, i64::MIN] {
            let result = cart.add_item(&product(1, 1000), q);
            assert!(matches!(result, Err(CommerceError::InvalidQuantity(v)) if v == q));
            let result = cart.add_item(&product(2, 1000), q);
            assert!(result.is_err());
            assert_eq!(cart, before);
        }
    }

    #[test]
    fn test_total_and_count() {
        let mut cart = Cart::new(Currency::CLP);
        cart.add_item(&product(1, 1000), 2).unwrap();
        cart.add_item(&product(2, 2500), 3).unwrap();

        assert_eq!(cart.total().unwrap().amount_minor, 2 * 1000 + 3 * 2500);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_reset() {
        let mut cart = Cart::new(Currency::CLP);
        cart.add_item(&product(1, 1000), 2).unwrap();
        cart.reset();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total().unwrap().is_zero());
    }

    #[test]
    fn test_insertion_order() {
        let mut cart = Cart::new(Currency::CLP);
        cart.add_item(&product(3, 10), 1).unwrap();
        cart.add_item(&product(1, 10), 1).unwrap();
        cart.add_item(&product(3, 10), 1).unwrap();

        let codes: Vec<i64> = cart.lines().iter().map(|l| l.product.code.get()).collect();
        assert_eq!(codes, vec![3, 1]);
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::new(Currency::CLP);
        cart.add_item(&product(1, 1_000_000), 2).unwrap();

        let summary = cart.summary().unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.grand_total.amount_minor, 2_000_000);
        assert_eq!(summary.lines[0].subtotal.amount_minor, 2_000_000);
    }

    #[test]
    fn test_overflow_is_rejected() {
        let mut cart = Cart::new(Currency::CLP);
        let expensive = product(1, i64::MAX / 2);
        cart.add_item(&expensive, 1).unwrap();

        assert!(matches!(cart.add_item(&expensive, 2), Err(CommerceError::Overflow)));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_overflow_across_lines_is_rejected() {
        let mut cart = Cart::new(Currency::CLP);
        let half = i64::MAX / 2 + 1;
        cart.add_item(&product(1, 1), half).unwrap();
        let before = cart.clone();

        assert!(matches!(cart.add_item(&product(2, 1), half), Err(CommerceError::Overflow)));
        assert_eq!(cart, before);
        assert_eq!(cart.item_count(), half);
        assert_eq!(cart.total().unwrap().amount_minor, half);

        // Still able to check out and reset.
        cart.add_item(&product(2, 1), 1).unwrap();
        assert_eq!(cart.item_count(), half + 1);
        cart.reset();
        assert!(cart.total().unwrap().is_zero());
    }

    #[test]
    fn test_item_count_overflow_is_rejected() {
        let mut cart = Cart::new(Currency::CLP);
        cart.add_item(&product(1, 0), i64::MAX).unwrap();

        assert!(matches!(cart.add_item(&product(2, 0), 1), Err(CommerceError::Overflow)));
        assert_eq!(cart.item_count(), i64::MAX);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_currency_mismatch_is_rejected() {
        let mut cart = Cart::new(Currency::CLP);
        cart.add_item(&product(1, 1000), 1).unwrap();
        let before = cart.clone();

        let usd = Product::new(2, "Ford", "Ranger", "Pickup", Money::new(1000, Currency::USD));
        let result = cart.add_item(&usd, 1);

        assert!(matches!(
            result,
            Err(CommerceError::CurrencyMismatch { ref expected, ref got }) if expected == "CLP" && got == "USD"
        ));
        assert_eq!(cart, before);
        assert_eq!(cart.total().unwrap().amount_minor, 1000);
    }
}
