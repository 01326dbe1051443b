//! Storefront domain types and logic for the Atelier handmade-art shop.
//!
//! This crate provides the pieces a storefront front end drives:
//!
//! - **Catalog**: Artworks, categories, featured pieces
//! - **Cart**: Session cart with idempotent adds and derived totals
//! - **Search**: Category and price-bracket filtering
//! - **Checkout**: Shipping details, payment method, simulated orders
//! - **Submission**: "Sell your art" form validation
//!
//! # Example
//!
//! ```rust
//! use atelier_commerce::prelude::*;
//!
//! let artwork = Artwork::new("a1", "Monsoon Light", "Meera Rao", Price::new(4000), Category::Paintings);
//!
//! let mut cart = Cart::new();
//! cart.add_to_cart(artwork.clone());
//! cart.add_to_cart(artwork); // already present, ignored
//!
//! assert_eq!(cart.total_items(), 1);
//! assert_eq!(cart.total_price(), Price::new(4000));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod submission;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Price};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Price};

    // Catalog
    pub use crate::catalog::{Artwork, Catalog, Category, CategoryInfo};

    // Cart
    pub use crate::cart::{Cart, CartAction, CartItem, CartSummary};

    // Search
    pub use crate::search::{filter, CatalogFilter, CategorySelection, PriceBracket, PriceRange};

    // Checkout
    pub use crate::checkout::{Checkout, Order, OrderStatus, PaymentMethod, ShippingDetails};

    // Submission
    pub use crate::submission::{ArtworkSubmission, ImageUpload, Submission, SubmissionStatus};
}
