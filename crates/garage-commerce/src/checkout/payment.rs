//! Payment form fields and validation.
//!
//! Payment is simulated: nothing here talks to a processor. The form only
//! decides whether every declared field satisfies its constraints.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A constraint on a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldConstraint {
    /// Must contain something other than whitespace.
    Required,
    /// At least this many characters once trimmed.
    MinLength(usize),
    /// Between `min` and `max` digits; spaces are ignored.
    Digits { min: usize, max: usize },
    /// `MM/YY` with a month from 01 to 12.
    MonthYear,
}

impl FieldConstraint {
    /// Check a value. Only `Required` rejects an empty value.
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            FieldConstraint::Required => !value.is_empty(),
            _ if value.is_empty() => true,
            FieldConstraint::MinLength(min) => value.chars().count() >= *min,
            FieldConstraint::Digits { min, max } => {
                let compact: String = value.chars().filter(|c| *c != ' ').collect();
                compact.chars().all(|c| c.is_ascii_digit())
                    && (*min..=*max).contains(&compact.len())
            }
            FieldConstraint::MonthYear => is_month_year(value),
        }
    }
}

fn is_month_year(value: &str) -> bool {
    let Some((month, year)) = value.split_once('/') else {
        return false;
    };
    let two_digits = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_digit());
    if !two_digits(month) || !two_digits(year) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

/// A declared form field and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Stable field name.
    pub name: &'static str,
    /// Current value as typed.
    pub value: String,
    /// Constraints checked in order.
    pub constraints: Vec<FieldConstraint>,
}

impl FormField {
    fn new(name: &'static str, constraints: Vec<FieldConstraint>) -> Self {
        Self {
            name,
            value: String::new(),
            constraints,
        }
    }

    /// First constraint the current value fails, if any.
    pub fn violation(&self) -> Option<FieldConstraint> {
        self.constraints
            .iter()
            .copied()
            .find(|constraint| !constraint.accepts(&self.value))
    }
}

pub const CARD_NAME: &str = "card_name";
pub const CARD_NUMBER: &str = "card_number";
pub const CARD_EXPIRY: &str = "card_expiry";
pub const CARD_CVV: &str = "card_cvv";

/// Values of a payment form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    /// Cardholder name, trimmed. Printed on the invoice.
    pub cardholder: String,
    /// Last four digits of the card number.
    pub card_last4: String,
}

/// The simulated payment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentForm {
    fields: Vec<FormField>,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentForm {
    /// Create an empty form with the standard card fields.
    pub fn new() -> Self {
        use FieldConstraint::*;
        Self {
            fields: vec![
                FormField::new(CARD_NAME, vec![Required, MinLength(3)]),
                FormField::new(CARD_NUMBER, vec![Required, Digits { min: 13, max: 19 }]),
                FormField::new(CARD_EXPIRY, vec![Required, MonthYear]),
                FormField::new(CARD_CVV, vec![Required, Digits { min: 3, max: 4 }]),
            ],
        }
    }

    /// Set a field's value. Returns false for an unknown field name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Current value of a field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Declared fields in display order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Names of the fields whose value fails a constraint.
    pub fn invalid_fields(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.violation().is_some())
            .map(|f| f.name.to_string())
            .collect()
    }

    /// Validate every field.
    pub fn validate(&self) -> Result<PaymentDetails, CommerceError> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(CommerceError::PaymentFormInvalid(invalid));
        }

        let cardholder = self.value(CARD_NAME).unwrap_or_default().trim().to_string();
        let digits: String = self
            .value(CARD_NUMBER)
            .unwrap_or_default()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let card_last4 = digits[digits.len().saturating_sub(4)..].to_string();

        Ok(PaymentDetails {
            cardholder,
            card_last4,
        })
    }

    /// Clear every value.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}
