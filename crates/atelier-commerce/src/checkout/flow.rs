//! Checkout flow.
//!
//! A checkout is opened against a non-empty cart, collects shipping details
//! and a payment method, and on placement turns the cart contents into an
//! [`Order`] and clears the cart.

use crate::cart::{Cart, CartSummary};
use crate::checkout::{Order, OrderStatus, PaymentMethod, ShippingDetails, ESTIMATED_DELIVERY};
use crate::ids::{current_timestamp_ms, OrderId};
use crate::CommerceError;
use tracing::info;

/// An in-progress checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    /// Cart totals when the checkout was opened.
    pub summary: CartSummary,
    pub shipping: ShippingDetails,
    pub payment: PaymentMethod,
}

impl Checkout {
    /// Open a checkout for the cart.
    ///
    /// Fails with [`CommerceError::EmptyCart`] when there is nothing to buy;
    /// the shopper belongs back on the cart page.
    pub fn begin(cart: &Cart) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        Ok(Self {
            summary: cart.summary(),
            shipping: ShippingDetails::default(),
            payment: PaymentMethod::default(),
        })
    }

    pub fn with_shipping(mut self, shipping: ShippingDetails) -> Self {
        self.shipping = shipping;
        self
    }

    pub fn with_payment(mut self, payment: PaymentMethod) -> Self {
        self.payment = payment;
        self
    }

    /// Place the order now. See [`Checkout::place_order_at`].
    pub fn place_order(self, cart: &mut Cart) -> Result<Order, CommerceError> {
        self.place_order_at(cart, current_timestamp_ms())
    }

    /// Place the order as of `timestamp_ms`.
    ///
    /// Validates the shipping details, snapshots the cart's current
    /// contents into the order and empties the cart. The cart is left
    /// untouched on error.
    pub fn place_order_at(
        self,
        cart: &mut Cart,
        timestamp_ms: i64,
    ) -> Result<Order, CommerceError> {
        self.shipping.validate()?;
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let order = Order {
            id: OrderId::from_timestamp_ms(timestamp_ms),
            items: cart.items().to_vec(),
            summary: cart.summary(),
            payment: self.payment,
            shipping: self.shipping,
            status: OrderStatus::Confirmed,
            estimated_delivery: ESTIMATED_DELIVERY.to_string(),
            placed_at_ms: timestamp_ms,
        };
        cart.clear_cart();

        info!(
            order_id = %order.id,
            items = order.item_count(),
            total = order.total().amount(),
            payment = order.payment.as_str(),
            "order placed"
        );
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Artwork, Category};
    use crate::money::Price;

    fn details() -> ShippingDetails {
        ShippingDetails {
            name: "Asha Iyer".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 Marine Drive".to_string(),
            city: "Mumbai".to_string(),
            pincode: "400001".to_string(),
        }
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_to_cart(Artwork::new("a1", "A", "X", Price::new(4000), Category::Paintings));
        cart.add_to_cart(Artwork::new("a2", "B", "Y", Price::new(12000), Category::Sketches));
        cart
    }

    #[test]
    fn test_begin_requires_items() {
        assert!(matches!(
            Checkout::begin(&Cart::new()),
            Err(CommerceError::EmptyCart)
        ));
    }

    #[test]
    fn test_begin_snapshots_summary() {
        let checkout = Checkout::begin(&cart()).unwrap();
        assert_eq!(checkout.summary.grand_total, Price::new(16000));
        assert_eq!(checkout.payment, PaymentMethod::Cod);
    }

    #[test]
    fn test_place_order_clears_cart() {
        let mut cart = cart();
        let order = Checkout::begin(&cart)
            .unwrap()
            .with_shipping(details())
            .with_payment(PaymentMethod::Online)
            .place_order_at(&mut cart, 1_760_612_345_678)
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.id.as_str(), "DAH12345678");
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.total(), Price::new(16000));
        assert_eq!(order.payment, PaymentMethod::Online);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.estimated_delivery, "5-7 Business Days");
        assert_eq!(order.items[0].artwork.id.as_str(), "a1");
    }

    #[test]
    fn test_invalid_details_leave_cart_alone() {
        let mut cart = cart();
        let mut shipping = details();
        shipping.pincode.clear();

        let result = Checkout::begin(&cart)
            .unwrap()
            .with_shipping(shipping)
            .place_order(&mut cart);

        assert!(matches!(result, Err(CommerceError::MissingField("pincode"))));
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_cart_emptied_after_begin() {
        let mut cart = cart();
        let checkout = Checkout::begin(&cart).unwrap().with_shipping(details());
        cart.clear_cart();

        assert!(matches!(
            checkout.place_order(&mut cart),
            Err(CommerceError::EmptyCart)
        ));
    }
}
