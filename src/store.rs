use crate::aggregate::Aggregate;
use crate::cart::{Cart, CartLine, CartSnapshot, CartState, LinePolicy};
use crate::catalog::Product;
use crate::config::{CartConfig, DisplayConfig};
use crate::error::CartError;
use crate::journal::Journal;

#[cfg(feature = "emitter")]
use crate::emitter::ChangeNotifier;

/// Owns one shopper's cart. `add_to_cart` is the only way to change it;
/// readers get immutable [`CartState`] snapshots.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    display: DisplayConfig,
    #[cfg(feature = "emitter")]
    notifier: ChangeNotifier,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Empty store with the default config.
    pub fn new() -> Self {
        CartStore::with_config(CartConfig::default())
    }

    /// Empty store that groups lines by `line_policy`.
    pub fn with_policy(line_policy: LinePolicy) -> Self {
        CartStore::with_config(CartConfig::default().with_line_policy(line_policy))
    }

    /// Empty store named and displayed per `config`.
    pub fn with_config(config: CartConfig) -> Self {
        CartStore {
            cart: Cart::open(config.cart_id, config.line_policy),
            display: config.display,
            #[cfg(feature = "emitter")]
            notifier: ChangeNotifier::new(),
        }
    }

    /// Rebuild a store from a previously recorded journal. The journal's id
    /// is kept; `config.cart_id` is not used.
    pub fn from_journal(journal: Journal, config: CartConfig) -> Result<Self, CartError> {
        let cart = Cart::from_journal(journal, config.line_policy)?;
        Ok(CartStore {
            cart,
            display: config.display,
            #[cfg(feature = "emitter")]
            notifier: ChangeNotifier::new(),
        })
    }

    /// Add one unit of `product` and return the new snapshot.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<CartState, CartError> {
        let added = self.cart.add_product(product).map(CartState::clone);
        let state = match added {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(
                    cart_id = %self.cart.id(),
                    product_id = %product.id,
                    error = %err,
                    "add to cart rejected"
                );
                return Err(err);
            }
        };

        tracing::debug!(
            cart_id = %self.cart.id(),
            product_id = %product.id,
            version = state.version(),
            item_count = state.item_count(),
            subtotal = state.subtotal(),
            "product added to cart"
        );

        #[cfg(feature = "emitter")]
        self.notify();

        Ok(state)
    }

    #[cfg(feature = "emitter")]
    fn notify(&mut self) {
        if self.notifier.listener_count() == 0 {
            return;
        }
        if let Err(err) = self.notifier.enqueue_snapshot(&self.cart.snapshot()) {
            tracing::warn!(error = %err, "failed to encode cart snapshot for listeners");
        }
        self.notifier.emit_queued();
    }

    /// Call `listener` with a fresh snapshot after every successful add.
    ///
    /// Each notification is delivered on its own thread, so snapshots can
    /// arrive out of order. Listeners should ignore a snapshot whose
    /// `version` is lower than one they have already seen.
    #[cfg(feature = "emitter")]
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(CartSnapshot) + Send + Sync + 'static,
    {
        self.notifier.on_cart_updated(listener);
    }

    /// Current snapshot. Cheap: the lines are shared, not copied.
    pub fn state(&self) -> CartState {
        self.cart.state().clone()
    }

    /// Current lines in the order first added.
    pub fn items(&self) -> &[CartLine] {
        self.cart.state().items()
    }

    /// Units in the cart, summed over all lines.
    pub fn item_count(&self) -> u64 {
        self.cart.state().item_count()
    }

    /// Number of lines, which differs from `item_count` once a line holds
    /// more than one unit.
    pub fn line_count(&self) -> usize {
        self.cart.state().line_count()
    }

    /// Unrounded sum of `price * quantity`.
    pub fn subtotal(&self) -> f64 {
        self.cart.state().subtotal()
    }

    /// Serializable view of the cart, as sent to change listeners.
    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    /// Every add this store has accepted, in order.
    pub fn journal(&self) -> &Journal {
        self.cart.journal()
    }

    pub fn line_policy(&self) -> LinePolicy {
        self.cart.policy()
    }

    /// Formatting settings for the view helpers.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn cart_id(&self) -> &str {
        self.cart.id()
    }
}
