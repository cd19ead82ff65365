//! Product types and the catalog wire record.

use crate::ids::ProductCode;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Immutable once loaded; the catalog store owns the snapshot and hands out
/// clones (cart lines keep their own copy of every attribute).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product code.
    pub code: ProductCode,
    /// Brand (e.g., "Toyota").
    pub brand: String,
    /// Model (e.g., "Corolla").
    pub model: String,
    /// Category (e.g., "Sedan").
    pub category: String,
    /// Free-text type tag as received; may contain decorative symbols.
    pub type_tag: Option<String>,
    /// Unit sale price.
    pub price: Money,
    /// Product image reference.
    pub image: String,
    /// Brand logo reference.
    pub logo: String,
}

impl Product {
    /// Create a product with the required attributes.
    pub fn new(
        code: impl Into<ProductCode>,
        brand: impl Into<String>,
        model: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            code: code.into(),
            brand: brand.into(),
            model: model.into(),
            category: category.into(),
            type_tag: None,
            price,
            image: String::new(),
            logo: String::new(),
        }
    }

    /// Set the type tag.
    pub fn with_type_tag(mut self, tag: impl Into<String>) -> Self {
        self.type_tag = Some(tag.into());
        self
    }

    /// Set the image and logo references.
    pub fn with_media(mut self, image: impl Into<String>, logo: impl Into<String>) -> Self {
        self.image = image.into();
        self.logo = logo.into();
        self
    }

    /// "Brand Model", used for card titles and invoice lines.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Type tag with decorative symbols stripped.
    ///
    /// Returns None when the tag is missing or nothing but symbols.
    pub fn clean_type_tag(&self) -> Option<String> {
        self.type_tag
            .as_deref()
            .map(strip_decorations)
            .filter(|tag| !tag.is_empty())
    }
}

/// Remove emoji and pictographic symbols, then trim.
pub fn strip_decorations(raw: &str) -> String {
    raw.chars()
        .filter(|c| !is_decorative(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_decorative(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF   // emoticons, pictographs, transport, supplemental symbols
            | 0x2600..=0x27BF // misc symbols and dingbats
            | 0x2B00..=0x2BFF // arrows and stars used as decoration
            | 0xFE00..=0xFE0F // variation selectors
            | 0x200D          // zero-width joiner
            | 0x20E3          // combining keycap
    )
}

/// A product record as served by the catalog endpoint.
///
/// Only `tipo`, `imagen` and `logo` are guarded; any other missing field
/// fails decoding of the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub codigo: i64,
    pub marca: String,
    pub modelo: String,
    pub categoria: String,
    #[serde(default)]
    pub tipo: Option<String>,
    pub precio_venta: f64,
    #[serde(default)]
    pub imagen: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl ProductRecord {
    /// Convert into a catalog product priced in the given currency.
    pub fn into_product(self, currency: Currency) -> Product {
        Product {
            code: ProductCode::new(self.codigo),
            brand: self.marca,
            model: self.modelo,
            category: self.categoria,
            type_tag: self.tipo,
            price: Money::from_decimal(self.precio_venta, currency),
            image: self.imagen.unwrap_or_default(),
            logo: self.logo.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_conversion() {
        let json = r#"{
            "codigo": 1,
            "marca": "Toyota",
            "modelo": "Corolla",
            "categoria": "Sedan",
            "tipo": "Sedán \u{1F60E}",
            "precio_venta": 15990000,
            "imagen": "https://img.example/corolla.jpg",
            "logo": "https://img.example/toyota.png"
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let product = record.into_product(Currency::CLP);

        assert_eq!(product.code, ProductCode::new(1));
        assert_eq!(product.display_name(), "Toyota Corolla");
        assert_eq!(product.price.amount_minor, 15_990_000);
        assert_eq!(product.clean_type_tag().as_deref(), Some("Sedán"));
    }

    #[test]
    fn test_optional_fields_guarded() {
        let json = r#"{"codigo": 2, "marca": "Kia", "modelo": "Rio", "categoria": "Hatchback", "precio_venta": 9000000, "tipo": null}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let product = record.into_product(Currency::CLP);
        assert!(product.clean_type_tag().is_none());
        assert!(product.image.is_empty());
        assert!(product.logo.is_empty());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"codigo": 3, "marca": "Kia", "categoria": "SUV", "precio_venta": 1}"#;
        assert!(serde_json::from_str::<ProductRecord>(json).is_err());
    }

    #[test]
    fn test_strip_decorations() {
        assert_eq!(strip_decorations("\u{1F697} Deportivo \u{2728}"), "Deportivo");
        assert_eq!(strip_decorations("4x4 \u{26A1}\u{FE0F}"), "4x4");
        assert_eq!(strip_decorations("Eléctrico"), "Eléctrico");
    }

    #[test]
    fn test_symbol_only_tag_is_none() {
        let product = Product::new(1, "A", "B", "C", Money::zero(Currency::CLP))
            .with_type_tag("\u{1F600}\u{1F64F}");
        assert!(product.clean_type_tag().is_none());
    }
}
