mod cart;
mod line;
mod policy;
pub mod selectors;
mod snapshot;
mod state;

pub use cart::Cart;
pub use line::CartLine;
pub use policy::LinePolicy;
pub use snapshot::{CartLineSnapshot, CartSnapshot};
pub use state::CartState;
