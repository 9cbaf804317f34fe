use event_emitter_rs::EventEmitter;

use crate::cart::CartSnapshot;

/// Event name fired after every successful add.
pub const CART_UPDATED: &str = "CartUpdated";

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub event_type: String,
    pub data: String,
}

/// Queues change notifications while the store mutates and delivers them
/// once the new state is in place. Delivery runs on emitter threads.
pub struct ChangeNotifier {
    event_emitter: EventEmitter,
    queued: Vec<Notification>,
    listeners: usize,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("queued", &self.queued)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        ChangeNotifier {
            event_emitter: EventEmitter::new(),
            queued: Vec::new(),
            listeners: 0,
        }
    }

    /// Register a raw listener; it receives the event data as a string.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
        self.listeners += 1;
    }

    /// Register a listener for [`CART_UPDATED`] that receives decoded snapshots.
    pub fn on_cart_updated<F>(&mut self, listener: F)
    where
        F: Fn(CartSnapshot) + Send + Sync + 'static,
    {
        self.on(CART_UPDATED, move |data: String| {
            match serde_json::from_str::<CartSnapshot>(&data) {
                Ok(snapshot) => listener(snapshot),
                Err(err) => tracing::warn!(error = %err, "dropping undecodable cart snapshot"),
            }
        });
    }

    pub fn enqueue(&mut self, event_type: impl Into<String>, data: impl Into<String>) {
        self.queued.push(Notification {
            event_type: event_type.into(),
            data: data.into(),
        });
    }

    pub fn enqueue_snapshot(&mut self, snapshot: &CartSnapshot) -> Result<(), serde_json::Error> {
        let data = serde_json::to_string(snapshot)?;
        self.enqueue(CART_UPDATED, data);
        Ok(())
    }

    pub fn emit_queued(&mut self) {
        let notifications: Vec<_> = self.queued.drain(..).collect();
        for notification in notifications {
            self.event_emitter
                .emit(&notification.event_type, notification.data);
        }
    }

    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
    }
}
