//! Cart panel section.

use garage_commerce::cart::{Cart, CartLine};
use garage_commerce::{CommerceError, Locale};

use super::html_escape;
use crate::messages::Messages;

/// Render the cart panel: one row per line, running total and checkout control.
///
/// The checkout control is disabled while the cart is empty.
pub fn render_cart_panel(
    cart: &Cart,
    locale: Locale,
    messages: &Messages,
) -> Result<String, CommerceError> {
    let summary = cart.summary()?;

    let items = if cart.is_empty() {
        format!(r#"<p class="cart-empty">{}</p>"#, html_escape(messages.cart_empty))
    } else {
        cart.lines()
            .iter()
            .zip(&summary.lines)
            .map(|(line, pricing)| {
                render_cart_line(
                    line,
                    &pricing.quantity_label(locale),
                    &pricing.subtotal.format(locale),
                    messages,
                )
            })
            .collect()
    };

    Ok(format!(
        r#"<section class="cart-panel" data-section="cart">
    <h5 class="cart-title">{}</h5>
    <div class="cart-items">
{}
    </div>
    <div class="cart-footer">
        <span class="cart-count">{}</span>
        <strong>{}: <span class="cart-total">{}</span></strong>
        <button class="checkout" {}>{}</button>
    </div>
</section>"#,
        html_escape(messages.cart_title),
        items,
        summary.item_count,
        html_escape(messages.total_label),
        html_escape(&summary.formatted_total(locale)),
        if cart.is_empty() { "disabled" } else { "" },
        html_escape(messages.checkout),
    ))
}

fn render_cart_line(line: &CartLine, quantity_label: &str, subtotal: &str, messages: &Messages) -> String {
    let product = &line.product;
    let name = product.display_name();

    format!(
        r#"        <div class="cart-item" data-codigo="{}">
            <img src="{}" alt="{} Logo" class="cart-item-logo">
            <img src="{}" alt="{}" class="cart-item-img">
            <div class="cart-item-details">
                <strong>{}</strong>
                <p>{}: {}</p>
            </div>
            <p class="cart-item-subtotal">{}</p>
        </div>
"#,
        product.code,
        html_escape(&product.logo),
        html_escape(&product.brand),
        html_escape(&product.image),
        html_escape(&name),
        html_escape(&name),
        html_escape(messages.quantity_label),
        html_escape(quantity_label),
        html_escape(subtotal),
    )
}
