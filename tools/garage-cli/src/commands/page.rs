//! Export the storefront page as HTML.

use std::path::Path;

use anyhow::{Context as _, Result};
use garage_storefront::MemoryInvoiceSink;

use super::{open_storefront, PageArgs};
use crate::context::Context;

/// Run the page command.
pub async fn run(args: PageArgs, ctx: &Context) -> Result<()> {
    let mut storefront = open_storefront(ctx, MemoryInvoiceSink::new()).await?;
    storefront.search(&args.query);

    let html = storefront.render_page()?;
    let path = ctx.resolve_path(Path::new(&args.out));
    std::fs::write(&path, &html)
        .with_context(|| format!("Failed to write page: {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "products": storefront.view().products().len(),
            "bytes": html.len(),
        }));
    } else {
        ctx.output.success(&format!(
            "Wrote {} ({} products)",
            path.display(),
            storefront.view().products().len()
        ));
    }

    Ok(())
}
