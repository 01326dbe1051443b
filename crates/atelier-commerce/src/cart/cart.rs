//! Cart and cart item types.

use crate::cart::CartSummary;
use crate::catalog::Artwork;
use crate::ids::ArtworkId;
use crate::money::Price;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A shopping cart owned by one browsing session.
///
/// Items keep insertion order and hold at most one entry per artwork id.
/// Adding an artwork that is already present is ignored rather than
/// incrementing its quantity: each piece is one of a kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

/// A mutation of the cart, for callers that route UI events as messages.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Add(Artwork),
    Remove(ArtworkId),
    Clear,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artwork to the end of the cart.
    ///
    /// Returns `false` and leaves the cart untouched if an item with the
    /// same artwork id is already present.
    pub fn add_to_cart(&mut self, artwork: Artwork) -> bool {
        if self.contains(&artwork.id) {
            debug!(artwork_id = %artwork.id, "artwork already in cart");
            return false;
        }

        debug!(artwork_id = %artwork.id, price = artwork.price.amount(), "adding artwork to cart");
        self.items.push(CartItem::new(artwork));
        true
    }

    /// Remove the item for `id`, if present.
    pub fn remove_from_cart(&mut self, id: &ArtworkId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.artwork.id != id);
        let removed = self.items.len() < len_before;
        debug!(artwork_id = %id, removed, "remove from cart");
        removed
    }

    /// Clear all items from the cart.
    pub fn clear_cart(&mut self) {
        debug!(items = self.items.len(), "clearing cart");
        self.items.clear();
    }

    /// Apply a cart action. Returns whether the cart changed.
    pub fn dispatch(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::Add(artwork) => self.add_to_cart(artwork),
            CartAction::Remove(id) => self.remove_from_cart(&id),
            CartAction::Clear => {
                let changed = !self.is_empty();
                self.clear_cart();
                changed
            }
        }
    }

    /// Number of distinct artworks in the cart.
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Sum of the artwork prices in the cart.
    ///
    /// Quantity is not multiplied in; under idempotent adds it is always 1.
    pub fn total_price(&self) -> Price {
        self.items.iter().map(|i| i.artwork.price).sum()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Check if the artwork is in the cart.
    pub fn contains(&self, id: &ArtworkId) -> bool {
        self.items.iter().any(|i| &i.artwork.id == id)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the cart totals for an order summary.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_cart(self)
    }
}

/// An artwork in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The artwork being purchased.
    pub artwork: Artwork,
    /// Quantity marker; always 1 for items added through [`Cart::add_to_cart`].
    pub quantity: u32,
}

impl CartItem {
    pub fn new(artwork: Artwork) -> Self {
        Self {
            artwork,
            quantity: 1,
        }
    }

    pub fn id(&self) -> &ArtworkId {
        &self.artwork.id
    }
}
