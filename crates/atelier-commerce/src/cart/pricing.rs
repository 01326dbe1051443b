//! Cart summary calculations.

use crate::cart::Cart;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Order-summary view of a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Number of distinct artworks.
    pub item_count: usize,
    /// Sum of artwork prices.
    pub subtotal: Price,
    /// Shipping cost. Shipping is free on every order.
    pub shipping: Price,
    /// Final total (subtotal + shipping). Prices are tax-inclusive.
    pub grand_total: Price,
}

impl CartSummary {
    /// Compute the summary for the cart's current contents.
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.total_price();
        let shipping = Price::ZERO;
        Self {
            item_count: cart.total_items(),
            subtotal,
            shipping,
            grand_total: subtotal + shipping,
        }
    }

    /// Check if shipping is free.
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// "1 item" / "3 items".
    pub fn item_label(&self) -> String {
        if self.item_count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", self.item_count)
        }
    }
}
