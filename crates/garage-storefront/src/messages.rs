//! User-facing text, per locale.

use garage_commerce::Locale;

/// Every string the storefront shows to a shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub no_matches: &'static str,
    pub not_specified: &'static str,
    pub add_to_cart: &'static str,
    pub search_placeholder: &'static str,
    pub quantity_prompt: &'static str,
    pub quantity_invalid: &'static str,
    pub quantity_too_large: &'static str,
    pub product_unavailable: &'static str,
    pub added_to_cart: &'static str,
    pub cart_title: &'static str,
    pub cart_empty: &'static str,
    pub quantity_label: &'static str,
    pub total_label: &'static str,
    pub checkout: &'static str,
    pub payment_title: &'static str,
    pub payment_incomplete: &'static str,
    pub payment_success: &'static str,
    pub invoice_failed: &'static str,
    pub invoice_title: &'static str,
    pub invoice_date: &'static str,
    pub invoice_customer: &'static str,
    pub invoice_details: &'static str,
    pub invoice_total: &'static str,
    pub card_name: &'static str,
    pub card_number: &'static str,
    pub card_expiry: &'static str,
    pub card_cvv: &'static str,
    pub pay: &'static str,
}

pub const ES_CL: Messages = Messages {
    loading: "Cargando vehículos...",
    load_failed: "No se pudieron cargar los vehículos. Inténtalo de nuevo más tarde.",
    no_matches: "No se encontraron vehículos con ese criterio.",
    not_specified: "No especificado",
    add_to_cart: "Añadir al Carrito",
    search_placeholder: "Buscar por marca, modelo o categoría...",
    quantity_prompt: "Cantidad",
    quantity_invalid: "La cantidad debe ser mayor que cero.",
    quantity_too_large: "La cantidad supera lo que el carrito puede registrar.",
    product_unavailable: "El vehículo seleccionado no está disponible.",
    added_to_cart: "Añadido al carrito",
    cart_title: "Carrito de Compras",
    cart_empty: "El carrito está vacío.",
    quantity_label: "Cantidad",
    total_label: "Total",
    checkout: "Proceder al Pago",
    payment_title: "Información de Pago",
    payment_incomplete: "Por favor, complete todos los campos del formulario de pago.",
    payment_success: "¡Pago exitoso! Se ha generado su factura.",
    invoice_failed: "No se pudo generar la factura. El carrito se ha conservado.",
    invoice_title: "Factura de Compra - Garage Online",
    invoice_date: "Fecha",
    invoice_customer: "Cliente",
    invoice_details: "Detalle de la Compra",
    invoice_total: "Total a Pagar",
    card_name: "Nombre en la tarjeta",
    card_number: "Número de tarjeta",
    card_expiry: "Vencimiento (MM/AA)",
    card_cvv: "CVV",
    pay: "Pagar",
};

pub const EN_US: Messages = Messages {
    loading: "Loading vehicles...",
    load_failed: "The vehicles could not be loaded. Please try again later.",
    no_matches: "No vehicles match that search.",
    not_specified: "Not specified",
    add_to_cart: "Add to Cart",
    search_placeholder: "Search by brand, model or category...",
    quantity_prompt: "Quantity",
    quantity_invalid: "Quantity must be greater than zero.",
    quantity_too_large: "That quantity is more than the cart can hold.",
    product_unavailable: "The selected vehicle is not available.",
    added_to_cart: "Added to cart",
    cart_title: "Shopping Cart",
    cart_empty: "The cart is empty.",
    quantity_label: "Quantity",
    total_label: "Total",
    checkout: "Proceed to Payment",
    payment_title: "Payment Details",
    payment_incomplete: "Please complete every field of the payment form.",
    payment_success: "Payment successful! Your invoice has been generated.",
    invoice_failed: "The invoice could not be generated. Your cart has been kept.",
    invoice_title: "Purchase Invoice - Garage Online",
    invoice_date: "Date",
    invoice_customer: "Customer",
    invoice_details: "Purchase Details",
    invoice_total: "Total Due",
    card_name: "Name on card",
    card_number: "Card number",
    card_expiry: "Expiry (MM/YY)",
    card_cvv: "CVV",
    pay: "Pay",
};

impl Messages {
    /// Messages for a locale.
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::EsCl => &ES_CL,
            Locale::EnUs => &EN_US,
        }
    }

    /// Label of a payment form field by name.
    pub fn field_label(&self, name: &str) -> &'static str {
        use garage_commerce::checkout::{CARD_CVV, CARD_EXPIRY, CARD_NAME, CARD_NUMBER};
        match name {
            CARD_NAME => self.card_name,
            CARD_NUMBER => self.card_number,
            CARD_EXPIRY => self.card_expiry,
            CARD_CVV => self.card_cvv,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_locale() {
        assert_eq!(Messages::for_locale(Locale::EsCl).cart_empty, "El carrito está vacío.");
        assert_eq!(Messages::for_locale(Locale::EnUs).add_to_cart, "Add to Cart");
    }

    #[test]
    fn test_field_label() {
        let messages = Messages::for_locale(Locale::EsCl);
        assert_eq!(messages.field_label("card_cvv"), "CVV");
        assert_eq!(messages.field_label("unknown"), "");
    }
}
