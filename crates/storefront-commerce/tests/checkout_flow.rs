//! End-to-end storefront flows across catalog, cart and checkout.

use rust_decimal_macros::dec;
use storefront_commerce::prelude::*;

#[test]
fn browse_select_and_place_order() {
    let catalog = demo_catalog();

    // Browse: clothing under $50, cheapest first.
    let query = CatalogQuery::new()
        .with_category("Clothing")
        .with_price_range(dec!(0), dec!(50));
    let mut results = filter(catalog.products(), &query);
    sort_products(&mut results, SortOption::PriceAsc);
    let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Premium Cotton T-Shirt", "Casual Hoodie"]);

    // Product detail: pick a variant and a quantity.
    let tee = catalog.require(ProductId::new(1)).unwrap().clone();
    let mut selection = VariantSelection::default_for(&tee);
    selection.select_color(&tee, "Navy").unwrap();
    let mut picker = QuantityPicker::default();
    picker.increment();

    let mut session = CheckoutSession::new(CartStore::new(), PricingCalculator::default());
    session
        .apply(CartIntent::AddSelection {
            product: tee.clone(),
            selection,
            quantity: picker.value(),
        })
        .unwrap();
    assert_eq!(
        session.cart().get(tee.id).unwrap().variant_label().as_deref(),
        Some("Navy / M")
    );

    let pricing = session.pricing().unwrap();
    assert_eq!(pricing.subtotal.display(), "$79.98");
    assert_eq!(pricing.tax.display(), "$6.40");
    assert_eq!(pricing.total.display(), "$91.37");

    session
        .apply(CheckoutIntent::SelectShipping(ShippingMethodId::new("express")))
        .unwrap();
    assert_eq!(session.pricing().unwrap().total.amount, dec!(99.3684));

    let mut log = OrderLog::new();
    let order = session.place_order(&mut log).unwrap().clone();
    assert_eq!(order.shipping.method_name, "Express Shipping");
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.pricing.total.amount, dec!(99.3684));
    assert!(session.cart().is_empty());
    assert_eq!(log.len(), 1);
}

#[test]
fn cart_intents_round_trip_through_json() {
    let catalog = demo_catalog();
    let hoodie = catalog.require(ProductId::new(3)).unwrap().clone();

    let intents = vec![
        CheckoutIntent::Cart(CartIntent::Add(hoodie.clone())),
        CheckoutIntent::Cart(CartIntent::SetQuantity {
            product_id: hoodie.id,
            quantity: 3,
        }),
        CheckoutIntent::SelectShipping(ShippingMethodId::new("overnight")),
    ];
    let json = serde_json::to_string(&intents).unwrap();
    let decoded: Vec<CheckoutIntent> = serde_json::from_str(&json).unwrap();

    let mut session = CheckoutSession::new(CartStore::new(), PricingCalculator::default());
    for intent in decoded {
        session.apply(intent).unwrap();
    }
    assert_eq!(session.cart().count(), 3);
    assert_eq!(session.selected_shipping().as_str(), "overnight");
}

#[test]
fn reviews_and_related_products() {
    let catalog = demo_catalog();
    let tee = catalog.require(ProductId::new(1)).unwrap();

    let summary = ReviewSummary::from_reviews(tee.id, catalog.reviews(tee.id));
    assert_eq!(summary.total_reviews, 3);

    let related = related_products(&catalog, tee, 4);
    assert!(related.iter().all(|p| p.category == "Clothing" && p.id != tee.id));
    assert_eq!(related.len(), 3);

    assert_eq!(StarRating::from_rating(tee.rating).render(), "★★★★½");
}
