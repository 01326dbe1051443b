//! End-to-end storefront scenarios: browse, fill the cart, check out.

use atelier_commerce::prelude::*;

fn a1() -> Artwork {
    Artwork::new("a1", "Monsoon Light", "Meera Rao", Price::new(4000), Category::Paintings)
}

fn a2() -> Artwork {
    Artwork::new("a2", "Ghats at Dawn", "Kabir Sen", Price::new(12000), Category::Sketches)
}

fn ids<'a>(found: &[&'a Artwork]) -> Vec<&'a str> {
    found.iter().map(|a| a.id.as_str()).collect()
}

#[test]
fn filter_scenarios() {
    let artworks = vec![a1(), a2()];

    let found = filter(&artworks, &"paintings".into(), &PriceRange::between(0, 5000));
    assert_eq!(ids(&found), vec!["a1"]);

    let found = filter(&artworks, &"all".into(), &PriceRange::between(10000, 15000));
    assert_eq!(ids(&found), vec!["a2"]);

    let found = filter(&artworks, &"drawings".into(), &PriceRange::any());
    assert!(found.is_empty());

    let found = filter(&artworks, &"all".into(), &PriceRange::any());
    assert_eq!(ids(&found), vec!["a1", "a2"]);
}

#[test]
fn bracket_selection_through_catalog_filter() {
    let catalog = Catalog::new(vec![a1(), a2()], vec![]).unwrap();

    let selection = CatalogFilter::from_parts("all", 3).unwrap();
    assert_eq!(ids(&selection.apply(catalog.artworks())), vec!["a2"]);

    let selection = CatalogFilter::new(Category::Paintings.into(), PriceBracket::Under5000);
    assert_eq!(ids(&selection.apply(catalog.artworks())), vec!["a1"]);
}

#[test]
fn cart_scenario() {
    let mut cart = Cart::new();
    cart.add_to_cart(a1());
    cart.add_to_cart(a2());
    cart.add_to_cart(a1());

    let in_cart: Vec<_> = cart.items().iter().map(|i| i.id().as_str()).collect();
    assert_eq!(in_cart, vec!["a1", "a2"]);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(), Price::new(16000));

    cart.remove_from_cart(&ArtworkId::new("missing"));
    assert_eq!(cart.total_items(), 2);

    cart.clear_cart();
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), Price::ZERO);
}

#[test]
fn total_items_counts_distinct_artworks() {
    let mut cart = Cart::new();
    let sequence = [a1(), a2(), a1(), a2(), a1()];
    for artwork in sequence {
        cart.dispatch(CartAction::Add(artwork));
        let mut distinct: Vec<_> = cart.items().iter().map(|i| i.id().clone()).collect();
        distinct.sort();
        distinct.dedup();
        assert_eq!(cart.total_items(), distinct.len());
    }
}

#[test]
fn browse_add_and_check_out() {
    let catalog = Catalog::new(vec![a1(), a2()], vec![]).unwrap();
    let mut cart = Cart::new();

    for artwork in CatalogFilter::default().apply(catalog.artworks()) {
        cart.add_to_cart(artwork.clone());
    }

    let shipping = ShippingDetails {
        name: "Asha Iyer".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
        address: "12 Marine Drive".to_string(),
        city: "Mumbai".to_string(),
        pincode: "400001".to_string(),
    };

    let order = Checkout::begin(&cart)
        .unwrap()
        .with_shipping(shipping)
        .place_order(&mut cart)
        .unwrap();

    assert!(order.id.as_str().starts_with(ORDER_PREFIX));
    assert_eq!(order.id.as_str().len(), ORDER_PREFIX.len() + 8);
    assert_eq!(order.total(), Price::new(16000));
    assert_eq!(order.payment, PaymentMethod::Cod);
    assert!(cart.is_empty());

    assert!(matches!(Checkout::begin(&cart), Err(CommerceError::EmptyCart)));
}
