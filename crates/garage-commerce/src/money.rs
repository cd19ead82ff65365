//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's smallest unit so that totals never
//! drift the way floating-point sums do.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::locale::Locale;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Chilean peso (no minor unit in circulation).
    #[default]
    CLP,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "CLP").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CLP => "CLP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::CLP | Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::CLP => 0,
            Currency::USD | Currency::EUR => 2,
        }
    }

    /// Locale whose conventions are used when none is given.
    pub fn default_locale(&self) -> Locale {
        match self {
            Currency::CLP | Currency::EUR => Locale::EsCl,
            Currency::USD => Locale::EnUs,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "CLP" => Some(Currency::CLP),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the minor unit.
    ///
    /// ```
    /// use garage_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_minor, 4999);
    /// let price = Money::from_decimal(1_000_000.0, Currency::CLP);
    /// assert_eq!(price.amount_minor, 1_000_000);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Try to add another Money value.
    ///
    /// Returns None if the currencies differ or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Format with the symbol and the locale's digit grouping (e.g., "$2.000.000").
    pub fn format(&self, locale: Locale) -> String {
        format!("{}{}", self.currency.symbol(), self.format_amount(locale))
    }

    /// Format without symbol (e.g., "2.000.000" or "49,99").
    pub fn format_amount(&self, locale: Locale) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount_minor.unsigned_abs();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let whole = locale.group_digits(&(abs / divisor).to_string());

        if places == 0 {
            format!("{sign}{whole}")
        } else {
            let fraction = abs % divisor;
            format!(
                "{sign}{whole}{}{fraction:0width$}",
                locale.decimal_separator(),
                width = places as usize
            )
        }
    }

    /// Format using the currency's default locale.
    pub fn display(&self) -> String {
        self.format(self.currency.default_locale())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.amount_minor, 4999);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);

        let m = Money::from_decimal(15_990_000.0, Currency::CLP);
        assert_eq!(m.amount_minor, 15_990_000);
    }

    #[test]
    fn test_clp_grouping() {
        let m = Money::new(2_000_000, Currency::CLP);
        assert_eq!(m.format(Locale::EsCl), "$2.000.000");
        assert_eq!(m.format(Locale::EnUs), "$2,000,000");
        assert_eq!(m.to_string(), "$2.000.000");
    }

    #[test]
    fn test_decimal_currency_format() {
        let m = Money::new(123_456_789, Currency::USD);
        assert_eq!(m.format(Locale::EnUs), "$1,234,567.89");
        assert_eq!(m.format(Locale::EsCl), "$1.234.567,89");

        let m = Money::new(5, Currency::EUR);
        assert_eq!(m.format_amount(Locale::EsCl), "0,05");
    }

    #[test]
    fn test_negative_format() {
        let m = Money::new(-1500, Currency::CLP);
        assert_eq!(m.format_amount(Locale::EsCl), "-1.500");
    }

    #[test]
    fn test_try_add_and_multiply() {
        let a = Money::new(1000, Currency::CLP);
        let b = Money::new(500, Currency::CLP);
        assert_eq!(a.try_add(&b).unwrap().amount_minor, 1500);
        assert_eq!(a.try_multiply(3).unwrap().amount_minor, 3000);
        assert!(Money::new(i64::MAX, Currency::CLP).try_multiply(2).is_none());
    }

    #[test]
    fn test_currency_mismatch() {
        let clp = Money::new(1000, Currency::CLP);
        let eur = Money::new(1000, Currency::EUR);
        assert!(clp.try_add(&eur).is_none());
    }

    #[test]
    fn test_try_sum() {
        let values = [
            Money::new(100, Currency::CLP),
            Money::new(200, Currency::CLP),
        ];
        let total = Money::try_sum(values.iter(), Currency::CLP).unwrap();
        assert_eq!(total.amount_minor, 300);

        let empty: [Money; 0] = [];
        assert!(Money::try_sum(empty.iter(), Currency::CLP).unwrap().is_zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("CLP"), Some(Currency::CLP));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
