//! Full-page document shell.

use crate::sections::html_escape;

const PAGE_STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f5f5; }
.site-header { display: flex; gap: 1rem; align-items: center; padding: 1rem; background: #212529; color: #fff; }
.site-header .logo { color: #fff; font-weight: bold; text-decoration: none; }
.search-form input { width: 24rem; padding: .4rem; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; padding: 1rem; }
.product-card { background: #fff; border-radius: .5rem; overflow: hidden; display: flex; flex-direction: column; }
.product-image { width: 100%; height: 10rem; object-fit: cover; }
.product-body, .product-footer { padding: .75rem; }
.product-price { font-weight: bold; color: #0d6efd; }
.cart-panel { background: #fff; margin: 1rem; padding: 1rem; border-radius: .5rem; }
.cart-item { display: flex; gap: .75rem; align-items: center; }
.cart-item-logo { width: 2rem; }
.cart-item-img { width: 4rem; }
.cart-count.pulse { animation: pulse .5s; }
.text-danger { color: #dc3545; }
.text-center { text-align: center; }
@keyframes pulse { 50% { transform: scale(1.3); } }
"#;

/// Head content for a document.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// A complete HTML document built from rendered sections.
#[derive(Debug, Clone)]
pub struct Page {
    /// Document language tag.
    pub lang: String,
    /// Head content.
    pub head: HeadContent,
    /// Rendered sections in body order.
    pub sections: Vec<String>,
}

impl Page {
    /// Create an empty page.
    pub fn new(lang: impl Into<String>, head: HeadContent) -> Self {
        Self {
            lang: lang.into(),
            head,
            sections: Vec::new(),
        }
    }

    /// Page with the storefront stylesheet.
    pub fn storefront(lang: impl Into<String>, title: impl Into<String>) -> Self {
        let head = HeadContent::new(title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(PAGE_STYLES);
        Self::new(lang, head)
    }

    /// Append a rendered section.
    pub fn push(&mut self, html: impl Into<String>) {
        self.sections.push(html.into());
    }

    /// Render the whole document.
    pub fn render(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", html_escape(&self.lang)));
        html.push_str(&self.head.render());
        html.push_str("</head>\n<body>\n");
        for section in &self.sections {
            html.push_str(section);
            html.push('\n');
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}
