//! Event-sourced shopping cart store.
//!
//! A [`Catalog`] of validated [`Product`]s feeds a [`CartStore`]. Each add is
//! digested into the cart's [`Journal`] and reduced into a fresh, immutable
//! [`CartState`]; item count and subtotal are derived from the lines on demand.
//!
//! ```
//! use sourced_cart::{CartStore, Catalog, ProductId};
//!
//! let catalog = Catalog::from_json_str(
//!     r#"[{"id": 1, "name": "Pen", "price": 1.50, "rating": 4}]"#,
//! ).unwrap();
//! let pen = catalog.get(&ProductId::Int(1)).unwrap();
//!
//! let mut store = CartStore::new();
//! store.add_to_cart(pen).unwrap();
//! store.add_to_cart(pen).unwrap();
//!
//! assert_eq!(store.item_count(), 2);
//! assert_eq!(store.subtotal(), 3.0);
//! assert_eq!(store.items().len(), 1);
//! ```

mod aggregate;
pub mod cart;
pub mod catalog;
pub mod config;
#[cfg(feature = "emitter")]
pub mod emitter;
mod error;
pub mod journal;
mod store;
pub mod view;

pub use aggregate::{hydrate, hydrate_into, Aggregate};
pub use cart::{selectors, Cart, CartLine, CartSnapshot, CartState, LinePolicy};
pub use catalog::{
    Catalog, CatalogError, CatalogSource, JsonFileSource, LoadStatus, Product, ProductError,
    ProductId, ProductList, RawProduct, StaticSource,
};
pub use config::{CartConfig, ConfigError, DisplayConfig};
pub use error::CartError;
pub use journal::{EventRecord, Journal, PayloadError};
pub use store::CartStore;
pub use view::{format_amount, CartBadge, CartOverlay, ProductCard};

#[cfg(feature = "emitter")]
pub use emitter::{ChangeNotifier, CART_UPDATED};
