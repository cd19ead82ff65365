//! Cart badge in the page header.

/// Render the item-count badge.
///
/// `pulse` adds the cosmetic animation class for one render after the cart
/// changes.
pub fn render_cart_badge(item_count: i64, pulse: bool) -> String {
    let class = if pulse { "cart-count pulse" } else { "cart-count" };
    format!(r#"<span id="cartCount" class="{}">{}</span>"#, class, item_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge() {
        assert_eq!(
            render_cart_badge(3, true),
            r#"<span id="cartCount" class="cart-count pulse">3</span>"#
        );
        assert!(!render_cart_badge(0, false).contains("pulse"));
    }
}
