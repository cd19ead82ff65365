//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an invoice number where a product code is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Macro to generate integer-backed newtype ID structs.
macro_rules! define_numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from its integer value.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the integer value.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

define_numeric_id!(
    /// Unique catalog code of a product (wire field `codigo`).
    ProductCode
);

define_numeric_id!(
    /// Invoice identifier: a Unix timestamp in milliseconds, unique per process.
    InvoiceId
);

static LAST_INVOICE_MILLIS: AtomicI64 = AtomicI64::new(0);

impl InvoiceId {
    /// Issue a new invoice id from the given wall-clock milliseconds.
    ///
    /// Ids are strictly increasing: an invoice issued in the same millisecond
    /// as the previous one (or after a clock step backwards) takes the next
    /// free value.
    pub fn issue(now_millis: i64) -> Self {
        let mut last = LAST_INVOICE_MILLIS.load(Ordering::SeqCst);
        loop {
            let next = now_millis.max(last.saturating_add(1));
            match LAST_INVOICE_MILLIS.compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return Self(next),
                Err(observed) => last = observed,
            }
        }
    }

    /// Issue a new invoice id from the current time.
    pub fn generate() -> Self {
        Self::issue(chrono::Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_creation() {
        let code = ProductCode::new(42);
        assert_eq!(code.get(), 42);
        assert_eq!(format!("{}", code), "42");
    }

    #[test]
    fn test_code_equality() {
        assert_eq!(ProductCode::from(7), ProductCode::new(7));
        assert_ne!(ProductCode::new(7), ProductCode::new(8));
    }

    #[test]
    fn test_code_deserializes_from_integer() {
        let code: ProductCode = serde_json::from_str("15").unwrap();
        assert_eq!(code, ProductCode::new(15));
    }

    #[test]
    fn test_invoice_ids_strictly_increase() {
        let first = InvoiceId::issue(1_700_000_000_000);
        let second = InvoiceId::issue(1_700_000_000_000);
        let third = InvoiceId::issue(1_600_000_000_000);
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn test_invoice_id_generation() {
        let a = InvoiceId::generate();
        let b = InvoiceId::generate();
        assert_ne!(a, b);
    }
}
