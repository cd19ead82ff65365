//! Checkout modal sequencing.

use crate::cart::Cart;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which checkout view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Neither the cart nor the payment view is open.
    #[default]
    Closed,
    /// Cart review.
    CartView,
    /// Payment form.
    PaymentView,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Closed => "closed",
            CheckoutStep::CartView => "cart",
            CheckoutStep::PaymentView => "payment",
        }
    }
}

/// Checkout flow state.
///
/// Linear: cart view, then payment view, then back to closed once the
/// payment form is accepted. Closing is always allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    step: CheckoutStep,
}

impl CheckoutFlow {
    /// Create a closed flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Open the cart view.
    pub fn open_cart(&mut self) -> Result<(), CommerceError> {
        match self.step {
            CheckoutStep::Closed | CheckoutStep::CartView => self.go(CheckoutStep::CartView),
            CheckoutStep::PaymentView => Err(self.invalid(CheckoutStep::CartView)),
        }
    }

    /// Close the cart view and open the payment view.
    ///
    /// Not available while the cart is empty.
    pub fn begin_payment(&mut self, cart: &Cart) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::CartView {
            return Err(self.invalid(CheckoutStep::PaymentView));
        }
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        self.go(CheckoutStep::PaymentView)
    }

    /// Require the payment view to be open.
    pub fn ensure_payment_open(&self) -> Result<(), CommerceError> {
        if self.step == CheckoutStep::PaymentView {
            Ok(())
        } else {
            Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: "submit".to_string(),
            })
        }
    }

    /// Close the payment view after a successful submission.
    pub fn complete(&mut self) -> Result<(), CommerceError> {
        self.ensure_payment_open()?;
        self.go(CheckoutStep::Closed)
    }

    /// Close whichever view is open.
    pub fn close(&mut self) {
        self.step = CheckoutStep::Closed;
    }

    fn go(&mut self, next: CheckoutStep) -> Result<(), CommerceError> {
        debug!(from = self.step.as_str(), to = next.as_str(), "checkout step");
        self.step = next;
        Ok(())
    }

    fn invalid(&self, to: CheckoutStep) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::{Currency, Money};

    fn filled_cart() -> Cart {
        let mut cart = Cart::new(Currency::CLP);
        let product = Product::new(1, "Toyota", "Corolla", "Sedan", Money::new(1000, Currency::CLP));
        cart.add_item(&product, 1).unwrap();
        cart
    }

    #[test]
    fn test_linear_sequence() {
        let mut flow = CheckoutFlow::new();
        let cart = filled_cart();

        flow.open_cart().unwrap();
        assert_eq!(flow.step(), CheckoutStep::CartView);
        flow.begin_payment(&cart).unwrap();
        assert_eq!(flow.step(), CheckoutStep::PaymentView);
        flow.complete().unwrap();
        assert_eq!(flow.step(), CheckoutStep::Closed);
    }

    #[test]
    fn test_payment_requires_cart_view() {
        let mut flow = CheckoutFlow::new();
        let cart = filled_cart();
        assert!(matches!(
            flow.begin_payment(&cart),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
    }

    #[test]
    fn test_payment_requires_items() {
        let mut flow = CheckoutFlow::new();
        flow.open_cart().unwrap();
        assert!(matches!(
            flow.begin_payment(&Cart::new(Currency::CLP)),
            Err(CommerceError::EmptyCart)
        ));
        assert_eq!(flow.step(), CheckoutStep::CartView);
    }

    #[test]
    fn test_complete_requires_payment_view() {
        let mut flow = CheckoutFlow::new();
        flow.open_cart().unwrap();
        assert!(flow.complete().is_err());
    }

    #[test]
    fn test_close_from_anywhere() {
        let mut flow = CheckoutFlow::new();
        flow.open_cart().unwrap();
        flow.begin_payment(&filled_cart()).unwrap();
        flow.close();
        assert_eq!(flow.step(), CheckoutStep::Closed);
    }
}
