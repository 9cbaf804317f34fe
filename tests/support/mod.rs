#![allow(dead_code)]

use sourced_cart::{Catalog, Product, ProductId};

/// The demo shop's bundled feed.
pub const PRODUCTS_JSON: &str = r#"[
    {"id": 1, "name": "Pen", "price": 1.50, "rating": 4},
    {"id": 2, "name": "Notebook", "price": 3.25, "rating": 5},
    {"id": 3, "name": "Backpack", "price": 24.99, "rating": 4.5},
    {"id": "gift-card", "name": "Gift Card", "price": 10, "rating": 0}
]"#;

pub fn catalog() -> Catalog {
    Catalog::from_json_str(PRODUCTS_JSON).unwrap()
}

pub fn product(catalog: &Catalog, id: impl Into<ProductId>) -> Product {
    catalog.get(&id.into()).cloned().unwrap()
}

pub fn pen() -> Product {
    Product::new(1, "Pen", 1.50).with_rating(4.0)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
