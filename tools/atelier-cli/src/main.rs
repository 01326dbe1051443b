//! Atelier CLI - Terminal storefront for handmade artwork.
//!
//! Commands:
//! - `atelier browse` - List artworks, filtered by category and price
//! - `atelier featured` - List featured artworks
//! - `atelier categories` - List categories with artwork counts
//! - `atelier show` - Show one artwork
//! - `atelier cart` - Add, remove, list, or clear cart items
//! - `atelier checkout` - Place an order for the cart
//! - `atelier sell` - Submit an artwork for review
//! - `atelier submissions` - List submitted artworks
//! - `atelier config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, CartArgs, CheckoutArgs, ConfigArgs, SellArgs, ShowArgs};

/// Atelier - Browse and buy handmade art from the terminal
#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Browse(BrowseArgs),

    /// List featured artworks
    Featured,

    /// List categories
    Categories,

    /// Show artwork details
    Show(ShowArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Place an order for everything in the cart
    Checkout(CheckoutArgs),

    /// Submit your artwork for review
    Sell(SellArgs),

    /// List submitted artworks
    Submissions,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and catalog
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Featured => commands::browse::featured(&ctx).await,
        Commands::Categories => commands::browse::categories(&ctx).await,
        Commands::Show(args) => commands::browse::show(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Sell(args) => commands::sell::run(args, &ctx).await,
        Commands::Submissions => commands::sell::list(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
