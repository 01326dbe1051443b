//! Shopping cart module.
//!
//! Contains the session cart, its items, and the derived summary.

mod cart;
mod pricing;

pub use cart::{Cart, CartAction, CartItem};
pub use pricing::CartSummary;
