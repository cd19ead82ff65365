//! Quantity prompt shown when a product's "add to cart" control is used.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Value the quantity input is reset to whenever the prompt opens.
pub const DEFAULT_QUANTITY_INPUT: &str = "1";

/// States of the quantity prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum PromptState {
    /// No prompt is showing.
    #[default]
    Idle,
    /// The prompt is open for a product, with the current input text.
    PromptingQuantity { product: Product, input: String },
    /// The last confirmation added units to the cart; the prompt is closed.
    Added { code: ProductCode, quantity: i64 },
}

/// Outcome of a successful confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddedToCart {
    /// Product that was added.
    pub code: ProductCode,
    /// Units added by this confirmation.
    pub quantity: i64,
    /// Units of this product in the cart afterwards.
    pub line_quantity: i64,
}

/// The quantity prompt.
///
/// There is a single confirm entry point. Opening the prompt replaces the
/// bound product, so a confirmation always applies to the most recently
/// selected product, and at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantityPrompt {
    state: PromptState,
}

impl QuantityPrompt {
    /// Create an idle prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the prompt for a product, resetting the input.
    pub fn open(&mut self, product: Product) {
        debug!(code = %product.code, "quantity prompt opened");
        self.state = PromptState::PromptingQuantity {
            product,
            input: DEFAULT_QUANTITY_INPUT.to_string(),
        };
    }

    /// Replace the input text. Ignored when the prompt is not open.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if let PromptState::PromptingQuantity { input, .. } = &mut self.state {
            *input = text.into();
        }
    }

    /// Confirm the current input against the bound product.
    ///
    /// On success the units are added to the cart and the prompt closes. On
    /// an invalid quantity the prompt stays open and the cart is untouched.
    pub fn confirm(&mut self, cart: &mut Cart) -> Result<AddedToCart, CommerceError> {
        let PromptState::PromptingQuantity { product, input } = &self.state else {
            return Err(CommerceError::NothingSelected);
        };

        let quantity = parse_quantity(input)?;
        let line_quantity = cart.add_item(product, quantity)?;
        let added = AddedToCart {
            code: product.code,
            quantity,
            line_quantity,
        };

        self.state = PromptState::Added {
            code: added.code,
            quantity,
        };
        Ok(added)
    }

    /// Set the input and confirm in one step.
    pub fn confirm_with(
        &mut self,
        cart: &mut Cart,
        text: impl Into<String>,
    ) -> Result<AddedToCart, CommerceError> {
        self.set_input(text);
        self.confirm(cart)
    }

    /// Close the prompt without touching the cart.
    pub fn dismiss(&mut self) {
        self.state = PromptState::Idle;
    }

    /// Check if the prompt is showing.
    pub fn is_open(&self) -> bool {
        matches!(self.state, PromptState::PromptingQuantity { .. })
    }

    /// Product currently bound to the prompt.
    pub fn selected(&self) -> Option<&Product> {
        match &self.state {
            PromptState::PromptingQuantity { product, .. } => Some(product),
            PromptState::Idle | PromptState::Added { .. } => None,
        }
    }

    /// Current input text, if open.
    pub fn input(&self) -> Option<&str> {
        match &self.state {
            PromptState::PromptingQuantity { input, .. } => Some(input),
            PromptState::Idle | PromptState::Added { .. } => None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &PromptState {
        &self.state
    }
}

/// Read a quantity from input text.
///
/// Accepts a whole number with optional surrounding whitespace. Values that
/// are not whole numbers fail with `UnparsableQuantity`; non-positive values
/// with `InvalidQuantity`.
pub fn parse_quantity(text: &str) -> Result<i64, CommerceError> {
    let quantity: i64 = text
        .trim()
        .parse()
        .map_err(|_| CommerceError::UnparsableQuantity(text.to_string()))?;
    if quantity <= 0 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    Ok(quantity)
}
