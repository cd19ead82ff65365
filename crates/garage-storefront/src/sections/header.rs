//! Page header: store name, search box and cart badge.

use super::html_escape;
use crate::messages::Messages;

/// Render the header section.
pub fn render_header(store_name: &str, query: &str, badge_html: &str, messages: &Messages) -> String {
    format!(
        r##"<header class="site-header" data-section="header">
    <a href="/" class="logo">{}</a>
    <form class="search-form" role="search">
        <input id="searchInput" type="search" name="q" value="{}" placeholder="{}" aria-label="{}">
    </form>
    <nav class="header-nav">
        <a href="#cart" class="cart-link">{}</a>
    </nav>
</header>"##,
        html_escape(store_name),
        html_escape(query),
        html_escape(messages.search_placeholder),
        html_escape(messages.search_placeholder),
        badge_html,
    )
}
