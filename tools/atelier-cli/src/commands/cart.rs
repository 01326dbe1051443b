//! Shopping cart commands.

use anyhow::Result;
use atelier_commerce::prelude::*;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.session.load_cart()?;

    match args.command.unwrap_or(CartCommand::List) {
        CartCommand::List => list(&cart, ctx),
        CartCommand::Add { id } => {
            add(&mut cart, &id, ctx)?;
            ctx.session.save_cart(&cart)
        }
        CartCommand::Buy { id } => {
            add(&mut cart, &id, ctx)?;
            ctx.session.save_cart(&cart)?;
            list(&cart, ctx)
        }
        CartCommand::Remove { id } => {
            let id = ArtworkId::new(id);
            if cart.dispatch(CartAction::Remove(id.clone())) {
                ctx.output.success(&format!("Removed {} from your cart.", id));
                ctx.session.save_cart(&cart)?;
            } else {
                ctx.output.info(&format!("{} is not in your cart.", id));
            }
            report(&cart, ctx);
            Ok(())
        }
        CartCommand::Clear => {
            cart.dispatch(CartAction::Clear);
            ctx.session.save_cart(&cart)?;
            ctx.output.success("Cart cleared.");
            report(&cart, ctx);
            Ok(())
        }
    }
}

fn add(cart: &mut Cart, id: &str, ctx: &Context) -> Result<()> {
    let artwork = ctx.catalog.get(&ArtworkId::new(id))?;

    if cart.dispatch(CartAction::Add(artwork.clone())) {
        ctx.output
            .success(&format!("{} has been added to your cart.", artwork.title));
    } else {
        ctx.output
            .info(&format!("{} is already in your cart.", artwork.title));
    }
    report(cart, ctx);
    Ok(())
}

/// In JSON mode, every cart command prints the resulting cart.
fn report(cart: &Cart, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.items(),
            "summary": cart.summary(),
        }));
    }
}

fn list(cart: &Cart, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        report(cart, ctx);
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.header("Your Cart is Empty");
        ctx.output.info("Looks like you haven't added any artwork yet.");
        ctx.output.info("Run `atelier browse` to explore art.");
        return Ok(());
    }

    ctx.output.header("Your Cart");
    for item in cart.items() {
        let artwork = &item.artwork;
        ctx.output.list_item(&format!(
            "{}  {} by {}  {}",
            artwork.id,
            artwork.title,
            artwork.artist,
            ctx.price(artwork.price)
        ));
        let details: Vec<&str> = [artwork.size.as_str(), artwork.medium.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if !details.is_empty() {
            ctx.output.kv("Details", &details.join(" • "));
        }
    }

    print_summary(&cart.summary(), ctx);
    ctx.output.info("");
    ctx.output.info("Proceed to checkout: atelier checkout --help");
    Ok(())
}

/// Print the order summary block shared by cart and checkout.
pub(crate) fn print_summary(summary: &CartSummary, ctx: &Context) {
    ctx.output.header("Order Summary");
    ctx.output.kv(
        &format!("Subtotal ({})", summary.item_label()),
        &ctx.price(summary.subtotal),
    );
    ctx.output.kv(
        "Shipping",
        &if summary.free_shipping() {
            "Free".to_string()
        } else {
            ctx.price(summary.shipping)
        },
    );
    ctx.output.kv("Total", &ctx.price(summary.grand_total));
    ctx.output.info("Inclusive of all taxes");
}
