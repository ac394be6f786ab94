//! Checkout command: build a cart from `--item` arguments, price it, and
//! optionally place the order.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use serde::Serialize;
use storefront_commerce::cart::{CartIntent, CartLine, CartStore, PricingResult};
use storefront_commerce::catalog::{CatalogSource, VariantSelection};
use storefront_commerce::checkout::{
    CheckoutIntent, CheckoutSession, Order, OrderLog, ShippingMethod,
};
use storefront_commerce::ShippingMethodId;

use super::CheckoutArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CheckoutSummary<'a> {
    lines: &'a [CartLine],
    shipping: Option<&'a ShippingMethod>,
    pricing: &'a PricingResult,
}

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut session = build_session(&args, ctx, &catalog)?;
    let pricing = session.pricing()?;

    let summary = CheckoutSummary {
        lines: session.cart().lines(),
        shipping: session.shipping_method(),
        pricing: &pricing,
    };
    if ctx.output.is_json() {
        if !args.place_order {
            ctx.output.json(&summary);
            return Ok(());
        }
    } else {
        print_summary(ctx, &summary)?;
    }

    if !args.place_order {
        ctx.output.info("");
        ctx.output.info("Run again with --place-order to place this order.");
        return Ok(());
    }

    if !args.yes {
        if ctx.output.is_json() {
            bail!("Refusing to place an order without --yes in JSON mode");
        }
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", pricing.total.display()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let mut log = OrderLog::new();
    let order = session.place_order(&mut log)?;

    if ctx.output.is_json() {
        ctx.output.json(order);
    } else {
        print_confirmation(ctx, order);
    }
    Ok(())
}

/// Fill a checkout session from the command arguments and configuration.
fn build_session<C: CatalogSource>(
    args: &CheckoutArgs,
    ctx: &Context,
    catalog: &C,
) -> Result<CheckoutSession> {
    let mut session = CheckoutSession::new(CartStore::new(), ctx.calculator()?);

    if let Some(id) = &ctx.config.checkout.default_shipping {
        session
            .select_shipping(ShippingMethodId::new(id.as_str()))
            .with_context(|| format!("Invalid checkout.default_shipping '{}'", id))?;
    }

    for item in &args.items {
        let product = catalog.require(item.product_id)?;
        if !product.is_available() {
            bail!("{} is out of stock", product.name);
        }
        ctx.output.debug(&format!("Adding {} x {}", item.quantity, product.name));
        session.apply(CartIntent::AddSelection {
            product: product.clone(),
            selection: VariantSelection::default_for(product),
            quantity: item.quantity,
        })?;
    }

    if let Some(id) = &args.shipping {
        session.apply(CheckoutIntent::SelectShipping(ShippingMethodId::new(id.as_str())))?;
    }
    session.apply(CheckoutIntent::SelectPayment(args.payment))?;

    Ok(session)
}

fn print_summary(ctx: &Context, summary: &CheckoutSummary<'_>) -> Result<()> {
    ctx.output.header("Cart");
    let widths = [26, 14, 4, 10, 10];
    ctx.output.table_header(&["ITEM", "OPTIONS", "QTY", "PRICE", "TOTAL"], &widths);
    for line in summary.lines {
        let options = line.variant_label().unwrap_or_default();
        let quantity = line.quantity.to_string();
        let price = line.unit_price.display();
        let total = line.total()?.display();
        ctx.output.table_row(&[&line.name, &options, &quantity, &price, &total], &widths);
    }

    ctx.output.header("Order summary");
    if let Some(method) = summary.shipping {
        ctx.output.kv(
            "shipping method",
            &format!("{} ({})", method.name, method.delivery_time),
        );
    }
    ctx.output.kv("subtotal", &summary.pricing.subtotal.display());
    ctx.output.kv("shipping", &summary.pricing.shipping_fee.display());
    ctx.output.kv("tax", &summary.pricing.tax.display());
    ctx.output.kv("total", &summary.pricing.total.display());
    Ok(())
}

fn print_confirmation(ctx: &Context, order: &Order) {
    ctx.output.info("");
    ctx.output.success(&format!("Order #{} placed", order.order_number));
    ctx.output.kv("order id", order.id.as_str());
    if let Some(placed_at) = chrono::DateTime::from_timestamp(order.placed_at, 0) {
        ctx.output
            .kv("placed at", &placed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string());
    }
    ctx.output.kv("items", &order.item_count().to_string());
    ctx.output.kv(
        "shipping",
        &format!("{} ({})", order.shipping.method_name, order.shipping.delivery_time),
    );
    ctx.output.kv("payment", order.payment_method.display_name());
    ctx.output.kv("total", &order.pricing.total.display());
}
