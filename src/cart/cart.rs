use serde::{Deserialize, Serialize};

use super::{CartLineSnapshot, CartSnapshot, CartState, LinePolicy};
use crate::aggregate::hydrate_into;
use crate::catalog::{Product, ProductId};
use crate::error::CartError;
use crate::journal::{EventRecord, Journal};

pub(crate) const PRODUCT_ADDED: &str = "ProductAdded";

/// Journal payload for an add. Product ids are externally tagged here since
/// bitcode cannot decode the untagged JSON form.
#[derive(Serialize, Deserialize)]
enum AddedId {
    Int(u64),
    Text(String),
}

#[derive(Serialize, Deserialize)]
struct ProductAdded {
    id: AddedId,
    name: String,
    price: f64,
    rating: f64,
}

impl From<&Product> for ProductAdded {
    fn from(product: &Product) -> Self {
        let id = match &product.id {
            ProductId::Int(id) => AddedId::Int(*id),
            ProductId::Text(id) => AddedId::Text(id.clone()),
        };
        ProductAdded {
            id,
            name: product.name.clone(),
            price: product.price,
            rating: product.rating,
        }
    }
}

impl From<ProductAdded> for Product {
    fn from(added: ProductAdded) -> Self {
        let id = match added.id {
            AddedId::Int(id) => ProductId::Int(id),
            AddedId::Text(id) => ProductId::Text(id),
        };
        Product {
            id,
            name: added.name,
            price: added.price,
            rating: added.rating,
        }
    }
}

/// The cart aggregate: current state plus the journal it was built from.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    pub journal: Journal,
    policy: LinePolicy,
    state: CartState,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: LinePolicy) -> Self {
        Cart {
            policy,
            ..Cart::default()
        }
    }

    pub fn open(id: impl Into<String>, policy: LinePolicy) -> Self {
        Cart {
            journal: Journal::with_id(id),
            policy,
            state: CartState::new(),
        }
    }

    /// Rebuild a cart by replaying `journal` under `policy`.
    pub fn from_journal(journal: Journal, policy: LinePolicy) -> Result<Self, CartError> {
        hydrate_into(Cart::with_policy(policy), journal)
    }

    pub fn id(&self) -> &str {
        self.journal.id()
    }

    pub fn policy(&self) -> LinePolicy {
        self.policy
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Validate, journal, then reduce. A rejected product leaves both the
    /// journal and the state untouched.
    pub fn add_product(&mut self, product: &Product) -> Result<&CartState, CartError> {
        product.validate()?;
        self.journal.digest(PRODUCT_ADDED, &ProductAdded::from(product))?;
        self.apply_added(product.clone());
        Ok(&self.state)
    }

    fn apply_added(&mut self, product: Product) {
        self.state = self.state.add_to_cart(product, self.policy);
    }

    fn replay(&mut self, event: &EventRecord) -> Result<(), String> {
        match event.event_name.as_str() {
            PRODUCT_ADDED => {
                let added: ProductAdded = event.decode().map_err(|e| e.to_string())?;
                let product: Product = added.into();
                // same check as a live add
                product.validate().map_err(|e| e.to_string())?;
                self.apply_added(product);
            }
            _ => return Err(format!("Unknown event: {}", event.event_name)),
        }
        Ok(())
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            id: self.id().to_string(),
            version: self.state.version(),
            lines: self
                .state
                .items()
                .iter()
                .map(|line| CartLineSnapshot {
                    product_id: line.product.id.clone(),
                    name: line.product.name.clone(),
                    price: line.product.price,
                    quantity: line.quantity,
                })
                .collect(),
            item_count: self.state.item_count(),
            subtotal: self.state.subtotal(),
        }
    }
}

crate::impl_aggregate!(Cart, journal, replay);
