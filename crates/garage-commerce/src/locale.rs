//! Display locales.
//!
//! A locale decides number grouping, the decimal separator and date layout.
//! User-facing message catalogs key off the same value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// Spanish (Chile): `1.234.567,89`, dates `dd-mm-yyyy`.
    #[default]
    #[serde(rename = "es-CL")]
    EsCl,
    /// English (United States): `1,234,567.89`, dates `m/d/yyyy`.
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// BCP 47 tag (e.g., "es-CL").
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EsCl => "es-CL",
            Locale::EnUs => "en-US",
        }
    }

    /// Separator placed between groups of three integer digits.
    pub fn grouping_separator(&self) -> char {
        match self {
            Locale::EsCl => '.',
            Locale::EnUs => ',',
        }
    }

    /// Separator between integer and fractional digits.
    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::EsCl => ',',
            Locale::EnUs => '.',
        }
    }

    /// `chrono` format string for a calendar date.
    pub fn date_format(&self) -> &'static str {
        match self {
            Locale::EsCl => "%d-%m-%Y",
            Locale::EnUs => "%-m/%-d/%Y",
        }
    }

    /// Parse a locale tag, case-insensitively, accepting `_` for `-`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.replace('_', "-").to_lowercase().as_str() {
            "es-cl" | "es" => Some(Locale::EsCl),
            "en-us" | "en" => Some(Locale::EnUs),
            _ => None,
        }
    }

    /// Insert grouping separators into a run of ASCII digits.
    pub fn group_digits(&self, digits: &str) -> String {
        let separator = self.grouping_separator();
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
