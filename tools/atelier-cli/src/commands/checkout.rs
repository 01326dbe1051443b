//! Place an order for the session cart.

use std::time::Duration;

use anyhow::{Context as _, Result};
use atelier_commerce::prelude::*;
use chrono::{Local, TimeZone};
use dialoguer::Confirm;

use super::cart::print_summary;
use super::CheckoutArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.session.load_cart()?;

    let payment: PaymentMethod = args.payment.parse()?;
    let shipping = ShippingDetails {
        name: args.name.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        phone: args.phone.unwrap_or_default(),
        address: args.address.unwrap_or_default(),
        city: args.city.unwrap_or_default(),
        pincode: args.pincode.unwrap_or_default(),
    };

    let checkout = Checkout::begin(&cart)
        .context("Nothing to check out; add artworks with `atelier cart add <id>`")?
        .with_shipping(shipping)
        .with_payment(payment);
    checkout
        .shipping
        .validate()
        .context("Shipping details incomplete")?;

    ctx.output.header("Checkout");
    for item in cart.items() {
        ctx.output.list_item(&format!(
            "{} ({})  {}",
            item.artwork.title,
            item.artwork.artist,
            ctx.price(item.artwork.price)
        ));
    }
    print_summary(&checkout.summary, ctx);
    ctx.output.info("");
    ctx.output.kv("Ship to", &checkout.shipping.name);
    ctx.output.kv("Address", &checkout.shipping.one_line());
    ctx.output.kv("Payment", checkout.payment.display_name());

    // Confirmation
    if !args.yes && ctx.output.is_interactive() {
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt("Place order?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Processing Order... Please wait while we confirm your order.");
    tokio::time::sleep(Duration::from_millis(ctx.config.checkout.processing_delay_ms)).await;
    spinner.finish_and_clear();

    let order = checkout.place_order(&mut cart)?;
    ctx.session.save_cart(&cart)?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success("Order Confirmed!");
    ctx.output
        .info("Thank you for supporting handmade art. Your order has been placed successfully.");
    ctx.output.header("Order Details");
    ctx.output.kv("Order ID", order.id.as_str());
    ctx.output
        .kv("Status", &status_badge(order.status.display_name()));
    ctx.output.kv("Estimated Delivery", &order.estimated_delivery);
    ctx.output.kv("Total", &ctx.price(order.total()));
    if let Some(placed) = Local.timestamp_millis_opt(order.placed_at_ms).single() {
        ctx.output
            .kv("Placed", &placed.format("%Y-%m-%d %H:%M").to_string());
    }
    ctx.output.info("");
    ctx.output.info(&format!(
        "A confirmation email has been sent to {} with order details and tracking information.",
        order.shipping.email
    ));
    Ok(())
}
