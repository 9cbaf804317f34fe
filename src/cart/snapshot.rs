use serde::{Deserialize, Serialize};

use crate::catalog::ProductId;

/// Serializable view of a cart, handed to change listeners.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub id: String,
    pub version: u64,
    pub lines: Vec<CartLineSnapshot>,
    pub item_count: u64,
    pub subtotal: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLineSnapshot {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}
