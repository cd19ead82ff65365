//! List catalog products.

use anyhow::{bail, Result};
use garage_storefront::{CatalogView, MemoryInvoiceSink};

use super::{open_storefront, BrowseArgs};
use crate::context::Context;
use crate::output::fit;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut storefront = open_storefront(ctx, MemoryInvoiceSink::new()).await?;
    let locale = storefront.config().locale;
    let messages = storefront.messages();

    let products = match storefront.search(&args.query) {
        CatalogView::Loaded(products) => products.clone(),
        CatalogView::Empty => Vec::new(),
        CatalogView::Error(message) => bail!("{}", message),
        CatalogView::Loading => bail!("Catalog not loaded"),
    };
    let shown = &products[..args.limit.unwrap_or(products.len()).min(products.len())];

    if ctx.output.is_json() {
        ctx.output.json(&shown);
        return Ok(());
    }

    if shown.is_empty() {
        ctx.output.info(messages.no_matches);
        return Ok(());
    }

    let widths = [6, 28, 14, 16, 14];
    ctx.output.header(&format!("{} ({})", storefront.config().store_name, products.len()));
    ctx.output.table_row(&["Code", "Vehicle", "Category", "Type", "Price"], &widths);
    for product in shown {
        let code = product.code.to_string();
        let name = fit(&product.display_name(), widths[1]);
        let category = fit(&product.category, widths[2]);
        let type_tag = fit(
            &product
                .clean_type_tag()
                .unwrap_or_else(|| messages.not_specified.to_string()),
            widths[3],
        );
        let price = product.price.format(locale);
        ctx.output
            .table_row(&[&code, &name, &category, &type_tag, &price], &widths);
    }

    Ok(())
}
