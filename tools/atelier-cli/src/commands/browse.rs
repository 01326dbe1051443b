//! Catalog browsing commands.

use anyhow::Result;
use atelier_commerce::prelude::*;
use serde::Serialize;

use super::{BrowseArgs, ShowArgs};
use crate::context::Context;

const LIST_WIDTHS: [usize; 6] = [4, 28, 18, 10, 10, 8];

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if args.list_brackets {
        return list_brackets(ctx);
    }

    let selection = CatalogFilter::from_parts(&args.category, args.price)?;
    let found = selection.apply(ctx.catalog.artworks());

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    ctx.output.header(&format!("Explore {}", ctx.config.storefront.name));
    ctx.output.kv("Category", &category_label(&selection.category));
    ctx.output.kv("Price", selection.bracket.label());
    ctx.output.info(&format!(
        "{} artwork{} available",
        found.len(),
        if found.len() == 1 { "" } else { "s" }
    ));

    if found.is_empty() {
        ctx.output.info("No artworks found matching your filters.");
        if !selection.is_default() {
            ctx.output.info("Run `atelier browse` without filters to see everything.");
        }
        return Ok(());
    }

    print_artworks(&found, ctx);
    Ok(())
}

/// List featured artworks.
pub async fn featured(ctx: &Context) -> Result<()> {
    let found: Vec<&Artwork> = ctx.catalog.featured().collect();

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    ctx.output.header("Featured Artworks");
    if found.is_empty() {
        ctx.output.info("No featured artworks right now.");
        return Ok(());
    }
    print_artworks(&found, ctx);
    Ok(())
}

#[derive(Serialize)]
struct CategoryRow<'a> {
    #[serde(flatten)]
    info: &'a CategoryInfo,
    count: usize,
}

/// List categories with artwork counts.
pub async fn categories(ctx: &Context) -> Result<()> {
    let rows: Vec<CategoryRow> = ctx
        .catalog
        .categories()
        .iter()
        .map(|info| CategoryRow {
            info,
            count: ctx.catalog.count_in(info.id),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Categories");
    for row in &rows {
        ctx.output.info("");
        ctx.output.list_item(&row.info.name);
        if !row.info.description.is_empty() {
            ctx.output.kv("About", &row.info.description);
        }
        ctx.output.kv(
            "Artworks",
            &format!(
                "{} artwork{} available",
                row.count,
                if row.count == 1 { "" } else { "s" }
            ),
        );
        ctx.output.kv(
            "Browse",
            &format!("atelier browse --category {}", row.info.id),
        );
    }
    Ok(())
}

/// Show one artwork.
pub async fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let artwork = ctx.catalog.get(&ArtworkId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(artwork);
        return Ok(());
    }

    ctx.output.header(&artwork.title);
    ctx.output.kv("Artist", &artwork.artist);
    ctx.output.kv("Category", artwork.category.display_name());
    ctx.output.kv("Price", &ctx.price(artwork.price));
    if !artwork.medium.is_empty() {
        ctx.output.kv("Medium", &artwork.medium);
    }
    if !artwork.size.is_empty() {
        ctx.output.kv("Size", &artwork.size);
    }
    if !artwork.description.is_empty() {
        ctx.output.info("");
        ctx.output.info(&artwork.description);
    }

    let session_cart = ctx.session.load_cart()?;
    ctx.output.info("");
    if session_cart.contains(&artwork.id) {
        ctx.output.info("Already in your cart.");
    } else {
        ctx.output.info(&format!("Add to cart: atelier cart add {}", artwork.id));
    }
    Ok(())
}

fn list_brackets(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let rows: Vec<_> = PriceBracket::ALL
            .iter()
            .map(|b| serde_json::json!({ "index": b.index(), "label": b.label(), "range": b.range() }))
            .collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Price Brackets");
    for bracket in PriceBracket::ALL {
        ctx.output.list_item(&format!("{}  {}", bracket.index(), bracket.label()));
    }
    Ok(())
}

fn category_label(selection: &CategorySelection) -> String {
    match selection {
        CategorySelection::All => "All Categories".to_string(),
        CategorySelection::Only(category) => category.display_name().to_string(),
        CategorySelection::Unknown(name) => name.clone(),
    }
}

fn print_artworks(artworks: &[&Artwork], ctx: &Context) {
    ctx.output.info("");
    ctx.output.table_row(
        &["ID", "TITLE", "ARTIST", "CATEGORY", "PRICE", ""],
        &LIST_WIDTHS,
    );
    for artwork in artworks {
        let price = ctx.price(artwork.price);
        let marker = if artwork.featured { "★" } else { "" };
        ctx.output.table_row(
            &[
                artwork.id.as_str(),
                &artwork.title,
                &artwork.artist,
                artwork.category.as_str(),
                &price,
                marker,
            ],
            &LIST_WIDTHS,
        );
    }
}
