#[path = "../support/mod.rs"]
mod support;

#[cfg(feature = "emitter")]
mod notifications;

use sourced_cart::{
    CartBadge, CartConfig, CartError, CartOverlay, CartStore, Catalog, LinePolicy, Product,
    ProductError, ProductId,
};
use support::{catalog, init_tracing, pen, product};

#[test]
fn empty_store_has_no_badge_and_zero_subtotal() {
    let store = CartStore::new();
    let state = store.state();

    assert!(state.items().is_empty());
    assert_eq!(store.item_count(), 0);
    assert_eq!(store.subtotal(), 0.0);
    assert_eq!(CartBadge::from_state(&state).count, None);
}

#[test]
fn empty_catalog_keeps_store_usable() {
    let catalog = Catalog::empty();
    let mut store = CartStore::new();

    for product in catalog.iter() {
        store.add_to_cart(product).unwrap();
    }

    assert_eq!(store.item_count(), 0);
    assert_eq!(store.subtotal(), 0.0);
    assert_eq!(CartBadge::from_state(&store.state()).label(), "");
}

#[test]
fn pen_twice_with_merge_policy() {
    init_tracing();
    let catalog = Catalog::from_json_str(
        r#"[{"id": 1, "name": "Pen", "price": 1.50, "rating": 4}]"#,
    )
    .unwrap();
    let pen = product(&catalog, 1);

    let mut store = CartStore::with_policy(LinePolicy::Merge);
    store.add_to_cart(&pen).unwrap();
    store.add_to_cart(&pen).unwrap();

    let items = store.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product, pen);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(store.item_count(), 2);
    assert_eq!(store.subtotal(), 3.0);
}

#[test]
fn pen_twice_with_append_policy() {
    init_tracing();
    let catalog = Catalog::from_json_str(
        r#"[{"id": 1, "name": "Pen", "price": 1.50, "rating": 4}]"#,
    )
    .unwrap();
    let pen = product(&catalog, 1);

    let mut store = CartStore::with_policy(LinePolicy::Append);
    store.add_to_cart(&pen).unwrap();
    store.add_to_cart(&pen).unwrap();

    let items = store.items();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|line| line.quantity == 1 && line.product == pen));
    assert_eq!(store.item_count(), 2);
    assert_eq!(store.line_count(), 2);
    assert_eq!(store.subtotal(), 3.0);
}

#[test]
fn mixed_basket_totals() {
    let catalog = catalog();
    let mut store = CartStore::new();

    store.add_to_cart(&product(&catalog, 1)).unwrap();
    store.add_to_cart(&product(&catalog, 3)).unwrap();
    store.add_to_cart(&product(&catalog, "gift-card")).unwrap();
    store.add_to_cart(&product(&catalog, 1)).unwrap();

    assert_eq!(store.line_count(), 3);
    assert_eq!(store.item_count(), 4);

    let recomputed: f64 = store
        .items()
        .iter()
        .map(|line| line.product.price * f64::from(line.quantity))
        .sum();
    assert_eq!(store.subtotal(), recomputed);

    let overlay = CartOverlay::from_state(&store.state(), store.display());
    let labels: Vec<&str> = overlay.lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Pen × 2", "Backpack × 1", "Gift Card × 1"]);
    assert_eq!(overlay.subtotal, "Subtotal: $37.99");
}

#[test]
fn counts_and_subtotal_never_decrease() {
    let catalog = catalog();
    let mut store = CartStore::new();
    let mut last_count = store.item_count();
    let mut last_subtotal = store.subtotal();

    for id in [1u64, 2, 1, 3, 2, 2] {
        store.add_to_cart(&product(&catalog, id)).unwrap();
        assert!(store.item_count() > last_count);
        assert!(store.subtotal() >= last_subtotal);
        last_count = store.item_count();
        last_subtotal = store.subtotal();
    }
}

#[test]
fn every_add_yields_a_distinct_snapshot() {
    let mut store = CartStore::new();
    let first = store.add_to_cart(&pen()).unwrap();
    let second = store.add_to_cart(&pen()).unwrap();

    assert!(!first.same_as(&second));
    assert_eq!(first.items()[0].quantity, 1);
    assert_eq!(second.items()[0].quantity, 2);
    assert_eq!(second.version(), 2);
}

#[test]
fn cart_keeps_price_copied_at_add_time() {
    let mut store = CartStore::new();
    store.add_to_cart(&pen()).unwrap();

    let mut repriced = pen();
    repriced.price = 100.0;
    store.add_to_cart(&repriced).unwrap();

    assert_eq!(store.items()[0].product.price, 1.5);
    assert_eq!(store.subtotal(), 3.0);
}

#[test]
fn invalid_products_are_rejected() {
    init_tracing();
    let mut store = CartStore::new();
    store.add_to_cart(&pen()).unwrap();
    let before = store.state();

    let blank = Product::new(ProductId::Text(String::new()), "Nothing", 1.0);
    assert_eq!(
        store.add_to_cart(&blank),
        Err(CartError::InvalidProduct(ProductError::EmptyId))
    );

    let infinite = Product::new(9, "Priceless", f64::INFINITY);
    assert!(matches!(
        store.add_to_cart(&infinite),
        Err(CartError::InvalidProduct(ProductError::InvalidPrice(_)))
    ));

    assert!(store.state().same_as(&before));
    assert_eq!(store.item_count(), 1);
    assert_eq!(store.journal().events().len(), 1);
}

#[test]
fn journal_replay_matches_live_state() {
    let catalog = catalog();
    let config = CartConfig::from_json_str(r#"{"cart_id": "checkout-1"}"#).unwrap();
    let mut store = CartStore::with_config(config.clone());

    for id in [2u64, 1, 2, 3] {
        store.add_to_cart(&product(&catalog, id)).unwrap();
    }

    let json = serde_json::to_string(store.journal()).unwrap();
    let journal = serde_json::from_str(&json).unwrap();
    let rebuilt = CartStore::from_journal(journal, config).unwrap();

    assert_eq!(rebuilt.cart_id(), "checkout-1");
    assert_eq!(rebuilt.state(), store.state());
    assert_eq!(rebuilt.subtotal(), store.subtotal());
    assert_eq!(rebuilt.snapshot(), store.snapshot());
}
