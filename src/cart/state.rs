use std::sync::Arc;

use super::{selectors, CartLine, LinePolicy};
use crate::catalog::Product;

/// Immutable snapshot of the cart. Cloning is cheap; each add produces a new
/// snapshot and leaves the old one untouched.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    items: Arc<Vec<CartLine>>,
    version: u64,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Number of adds that led to this snapshot.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line_for(&self, product: &Product) -> Option<&CartLine> {
        self.items.iter().find(|line| line.product.id == product.id)
    }

    /// Reducer for the add action. The product is assumed already validated.
    pub fn add_to_cart(&self, product: Product, policy: LinePolicy) -> CartState {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());

        let existing = match policy {
            LinePolicy::Merge => items.iter_mut().find(|line| line.product.id == product.id),
            LinePolicy::Append => None,
        };
        match existing {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => items.push(CartLine::new(product)),
        }

        CartState {
            items: Arc::new(items),
            version: self.version + 1,
        }
    }

    /// True when both handles point at the same snapshot.
    pub fn same_as(&self, other: &CartState) -> bool {
        Arc::ptr_eq(&self.items, &other.items) && self.version == other.version
    }

    pub fn item_count(&self) -> u64 {
        selectors::item_count(self)
    }

    pub fn line_count(&self) -> usize {
        selectors::line_count(self)
    }

    pub fn subtotal(&self) -> f64 {
        selectors::subtotal(self)
    }
}

impl PartialEq for CartState {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.items == other.items
    }
}
