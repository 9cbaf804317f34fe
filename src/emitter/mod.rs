mod notifier;

pub use notifier::{ChangeNotifier, Notification, CART_UPDATED};
