//! Cart pricing breakdown.

use crate::ids::ProductCode;
use crate::locale::Locale;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for the whole cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of quantities.
    pub item_count: i64,
    /// Sum of line subtotals.
    pub grand_total: Money,
    /// Per-line pricing in cart order.
    pub lines: Vec<LinePricing>,
}

impl CartSummary {
    /// Grand total formatted for display.
    pub fn formatted_total(&self, locale: Locale) -> String {
        self.grand_total.format(locale)
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Product code of the line.
    pub code: ProductCode,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Subtotal (unit_price * quantity).
    pub subtotal: Money,
}

impl LinePricing {
    /// "2 x $1.000.000" as shown on the cart panel.
    pub fn quantity_label(&self, locale: Locale) -> String {
        format!("{} x {}", self.quantity, self.unit_price.format(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_quantity_label() {
        let line = LinePricing {
            code: ProductCode::new(1),
            unit_price: Money::new(1_000_000, Currency::CLP),
            quantity: 2,
            subtotal: Money::new(2_000_000, Currency::CLP),
        };
        assert_eq!(line.quantity_label(Locale::EsCl), "2 x $1.000.000");
    }
}
