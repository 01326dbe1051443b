//! Order types.

use crate::cart::{CartItem, CartSummary};
use crate::checkout::{PaymentMethod, ShippingDetails};
use crate::ids::OrderId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Delivery estimate quoted on every confirmation.
pub const ESTIMATED_DELIVERY: &str = "5-7 Business Days";

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed and confirmed.
    #[default]
    Confirmed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "confirmed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Confirmed",
        }
    }
}

/// A placed order, as shown on the confirmation screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order number (e.g., "DAH12345678").
    pub id: OrderId,
    /// Purchased items, in cart order.
    pub items: Vec<CartItem>,
    /// Totals at the time of placement.
    pub summary: CartSummary,
    pub payment: PaymentMethod,
    pub shipping: ShippingDetails,
    pub status: OrderStatus,
    pub estimated_delivery: String,
    /// Unix timestamp of placement, in milliseconds.
    pub placed_at_ms: i64,
}

impl Order {
    /// Amount payable.
    pub fn total(&self) -> Price {
        self.summary.grand_total
    }

    /// Number of artworks in the order.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
