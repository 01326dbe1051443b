//! Checkout module.
//!
//! Contains shipping details, payment methods, the checkout flow and orders.

mod details;
mod flow;
mod order;

pub use details::{PaymentMethod, ShippingDetails};
pub use flow::Checkout;
pub use order::{Order, OrderStatus, ESTIMATED_DELIVERY};
