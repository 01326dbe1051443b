//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod sell;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to show ("all", "paintings", "sketches", "drawings").
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Price bracket index (0 = all prices; see `--list-brackets`).
    #[arg(short, long, default_value_t = 0)]
    pub price: usize,

    /// List the price brackets and exit.
    #[arg(long)]
    pub list_brackets: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Artwork id.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart and order summary.
    List,
    /// Add an artwork to the cart.
    Add {
        /// Artwork id.
        id: String,
    },
    /// Add an artwork and go straight to the order summary.
    Buy {
        /// Artwork id.
        id: String,
    },
    /// Remove an artwork from the cart.
    Remove {
        /// Artwork id.
        id: String,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Street address.
    #[arg(long)]
    pub address: Option<String>,

    /// City.
    #[arg(long)]
    pub city: Option<String>,

    /// PIN code.
    #[arg(long)]
    pub pincode: Option<String>,

    /// Payment method ("cod" or "online").
    #[arg(long, default_value = "cod")]
    pub payment: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the sell command.
#[derive(Args)]
pub struct SellArgs {
    /// Artwork title.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Asking price.
    #[arg(long, default_value = "")]
    pub price: String,

    /// Artist name.
    #[arg(long, default_value = "")]
    pub artist: String,

    /// Contact email.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Contact phone (10 digits).
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Medium (e.g., "Watercolor").
    #[arg(long, default_value = "")]
    pub medium: String,

    /// Dimensions (e.g., "16 x 20 in").
    #[arg(long, default_value = "")]
    pub dimensions: String,

    /// Description.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Image file (JPEG or PNG, up to 5MB).
    #[arg(long)]
    pub image: Option<PathBuf>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
