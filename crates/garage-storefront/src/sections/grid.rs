//! Product grid section.

use garage_commerce::catalog::Product;
use garage_commerce::Locale;

use super::html_escape;
use crate::messages::Messages;
use crate::view::CatalogView;

/// Render the product grid for a catalog view.
pub fn render_catalog_grid(view: &CatalogView, locale: Locale, messages: &Messages) -> String {
    let body = match view {
        CatalogView::Loading => format!(
            r#"<div class="catalog-loading" role="status">{}</div>"#,
            html_escape(messages.loading)
        ),
        CatalogView::Error(message) => format!(
            r#"<p class="catalog-error text-danger text-center">{}</p>"#,
            html_escape(message)
        ),
        CatalogView::Empty => format!(
            r#"<p class="catalog-empty text-center">{}</p>"#,
            html_escape(messages.no_matches)
        ),
        CatalogView::Loaded(products) => products
            .iter()
            .map(|p| render_product_card(p, locale, messages))
            .collect(),
    };

    format!(
        r#"<section class="product-grid" data-section="catalog">
{}
</section>"#,
        body
    )
}

/// Render a single product card.
pub fn render_product_card(product: &Product, locale: Locale, messages: &Messages) -> String {
    let name = product.display_name();
    let type_tag = product
        .clean_type_tag()
        .unwrap_or_else(|| messages.not_specified.to_string());

    format!(
        r#"<article class="product-card" data-codigo="{}">
    <img src="{}" class="product-image" alt="{}" loading="lazy">
    <div class="product-body">
        <h5 class="product-title">{}</h5>
        <p class="product-meta">{} | {}</p>
    </div>
    <div class="product-footer">
        <p class="product-price">{}</p>
        <button class="add-to-cart" data-codigo="{}">{}</button>
    </div>
</article>
"#,
        product.code,
        html_escape(&product.image),
        html_escape(&name),
        html_escape(&name),
        html_escape(&product.category),
        html_escape(&type_tag),
        html_escape(&product.price.format(locale)),
        product.code,
        html_escape(messages.add_to_cart),
    )
}
