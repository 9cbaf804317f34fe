//! Product catalog: typed product records validated at the feed boundary.

mod catalog;
mod error;
mod list;
mod product;
mod source;

pub use catalog::Catalog;
pub use error::{CatalogError, ProductError};
pub use list::{LoadStatus, ProductList};
pub use product::{Product, ProductId, RawProduct};
pub use source::{CatalogSource, JsonFileSource, StaticSource};
