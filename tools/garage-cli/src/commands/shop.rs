//! Interactive storefront session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use garage_commerce::checkout::CheckoutStep;
use garage_commerce::CommerceError;
use garage_data::source_for;
use garage_storefront::{CatalogView, FileInvoiceSink, Storefront, StorefrontError};

use super::{open_storefront, ShopArgs};
use crate::context::Context;

const MENU: [&str; 5] = ["Search", "Add to cart", "View cart / checkout", "Reload catalog", "Quit"];

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop command is interactive and does not support --json");
    }

    let sink = FileInvoiceSink::new(ctx.invoice_dir());
    let mut storefront = open_storefront(ctx, sink).await?;
    storefront.search(&args.query);

    loop {
        show_status(&mut storefront, ctx);

        let action = Select::new()
            .with_prompt("What next?")
            .items(&MENU)
            .default(0)
            .interact()?;

        match action {
            0 => search(&mut storefront)?,
            1 => add_to_cart(&mut storefront, ctx)?,
            2 => checkout(&mut storefront, ctx)?,
            3 => reload(&mut storefront, ctx).await?,
            _ => break,
        }

        if let Some(notice) = storefront.take_notice() {
            ctx.output.notice(&notice);
        }
    }

    Ok(())
}

fn show_status(storefront: &mut Storefront, ctx: &Context) {
    let pulse = storefront.badge_pulse();
    // Consume the pulse so it only marks the first status line after a change.
    storefront.render_badge();

    let count = storefront.cart().item_count();
    let shown = storefront.view().products().len();
    let badge = if pulse {
        console::style(count.to_string()).bold().green().to_string()
    } else {
        count.to_string()
    };

    let query = storefront.query();
    let filter = if query.is_empty() {
        String::new()
    } else {
        format!(" matching \"{}\"", query)
    };
    ctx.output.header(&format!(
        "{} · {} vehicles{} · cart: {}",
        storefront.config().store_name,
        shown,
        filter,
        badge
    ));

    match storefront.view() {
        CatalogView::Loading => ctx.output.info(storefront.messages().loading),
        CatalogView::Error(message) => ctx.output.warn(message),
        CatalogView::Empty => ctx.output.info(storefront.messages().no_matches),
        CatalogView::Loaded(_) => {}
    }
}

fn search(storefront: &mut Storefront) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("Search (brand, model or category)")
        .with_initial_text(storefront.query())
        .allow_empty(true)
        .interact_text()?;
    storefront.search(&query);
    Ok(())
}

fn add_to_cart(storefront: &mut Storefront, ctx: &Context) -> Result<()> {
    let products = storefront.view().products().to_vec();
    if products.is_empty() {
        ctx.output.info(storefront.messages().no_matches);
        return Ok(());
    }

    let locale = storefront.config().locale;
    let not_specified = storefront.messages().not_specified;
    let mut items: Vec<String> = products
        .iter()
        .map(|p| {
            format!(
                "{} · {} | {} · {}",
                p.display_name(),
                p.category,
                p.clean_type_tag().unwrap_or_else(|| not_specified.to_string()),
                p.price.format(locale)
            )
        })
        .collect();
    items.push("Cancel".to_string());

    let choice = Select::new()
        .with_prompt(storefront.messages().add_to_cart)
        .items(&items)
        .default(0)
        .max_length(ctx.config.shop.page_size.max(1))
        .interact()?;
    let Some(product) = products.get(choice) else {
        return Ok(());
    };

    storefront.select_product(product.code)?;
    loop {
        let input: String = Input::new()
            .with_prompt(format!("{} ({})", storefront.messages().quantity_prompt, product.display_name()))
            .with_initial_text("1")
            .allow_empty(true)
            .interact_text()?;

        match storefront.confirm_quantity(&input) {
            Ok(added) => {
                ctx.output.debug(&format!(
                    "Added {} x {} (line now {})",
                    added.quantity, added.code, added.line_quantity
                ));
                return Ok(());
            }
            Err(err) => {
                if let Some(notice) = storefront.take_notice() {
                    ctx.output.notice(&notice);
                }
                ctx.output.debug(&format!("Add to cart rejected: {}", err));
                let retry = Confirm::new().with_prompt("Try again?").default(true).interact()?;
                if !retry {
                    storefront.dismiss_prompt();
                    return Ok(());
                }
            }
        }
    }
}

fn print_cart(storefront: &Storefront, ctx: &Context) -> Result<()> {
    let locale = storefront.config().locale;
    let messages = storefront.messages();
    let cart = storefront.cart();

    ctx.output.header(messages.cart_title);
    if cart.is_empty() {
        ctx.output.info(messages.cart_empty);
        return Ok(());
    }

    let summary = match cart.summary() {
        Ok(summary) => summary,
        Err(err) => {
            ctx.output.error(&err.to_string());
            return Ok(());
        }
    };
    for (line, pricing) in cart.lines().iter().zip(&summary.lines) {
        ctx.output.list_item(&format!(
            "{}  {}: {}  = {}",
            line.product.display_name(),
            messages.quantity_label,
            pricing.quantity_label(locale),
            pricing.subtotal.format(locale)
        ));
    }
    ctx.output.kv(messages.total_label, &summary.formatted_total(locale));
    Ok(())
}

fn checkout(storefront: &mut Storefront, ctx: &Context) -> Result<()> {
    storefront.open_cart()?;
    print_cart(storefront, ctx)?;

    if storefront.cart().is_empty() {
        storefront.close_checkout();
        return Ok(());
    }

    let proceed = Confirm::new()
        .with_prompt(storefront.messages().checkout)
        .default(true)
        .interact()?;
    if !proceed {
        storefront.close_checkout();
        return Ok(());
    }

    if let Err(err) = storefront.begin_payment() {
        storefront.close_checkout();
        return match err {
            StorefrontError::Commerce(CommerceError::EmptyCart) => Ok(()),
            other => Err(other.into()),
        };
    }

    while storefront.checkout_step() == CheckoutStep::PaymentView {
        fill_payment_form(storefront, ctx)?;

        match storefront.submit_payment() {
            Ok(receipt) => {
                ctx.output.success(&format!(
                    "{} {}",
                    storefront.messages().invoice_title,
                    receipt.invoice.id
                ));
                ctx.output.kv("file", &receipt.location);
            }
            Err(_) => {
                if let Some(notice) = storefront.take_notice() {
                    ctx.output.notice(&notice);
                }
                let retry = Confirm::new()
                    .with_prompt("Edit payment details?")
                    .default(true)
                    .interact()?;
                if !retry {
                    storefront.close_checkout();
                }
            }
        }
    }

    Ok(())
}

fn fill_payment_form(storefront: &mut Storefront, ctx: &Context) -> Result<()> {
    let messages = storefront.messages();
    ctx.output.header(messages.payment_title);

    let fields: Vec<(&'static str, String)> = storefront
        .payment_form()
        .fields()
        .iter()
        .map(|f| (f.name, f.value.clone()))
        .collect();

    for (name, current) in fields {
        let value: String = Input::new()
            .with_prompt(messages.field_label(name))
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        storefront.set_payment_field(name, value);
    }
    Ok(())
}

async fn reload(storefront: &mut Storefront, ctx: &Context) -> Result<()> {
    let config = storefront.config();
    let source = source_for(&config.catalog_url, config.currency)?;
    let spinner = ctx.output.spinner();

    match storefront.load(source.as_ref(), &spinner).await {
        Ok(count) => ctx.output.success(&format!("{} vehicles", count)),
        Err(err) => ctx.output.debug(&format!("Catalog load failed: {}", err)),
    }
    Ok(())
}
