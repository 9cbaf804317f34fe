//! Display-ready data for the cart badge, the cart overlay and product
//! cards. Rounding to the configured precision happens here and only here.

use crate::cart::CartState;
use crate::catalog::Product;
use crate::config::DisplayConfig;

/// Currency symbol followed by `amount` rounded to the configured precision.
pub fn format_amount(amount: f64, display: &DisplayConfig) -> String {
    let mut digits = format!("{:.*}", display.precision, amount);
    // a tiny negative that rounds to zero prints as "-0.00"
    if digits.starts_with('-') && digits[1..].bytes().all(|b| b == b'0' || b == b'.') {
        digits.remove(0);
    }
    format!("{}{}", display.currency_symbol, digits)
}

/// Header badge. `count` is `None` when the cart is empty and nothing should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartBadge {
    pub count: Option<u64>,
}

impl CartBadge {
    pub fn from_state(state: &CartState) -> Self {
        let count = state.item_count();
        CartBadge {
            count: (count > 0).then_some(count),
        }
    }

    pub fn label(&self) -> String {
        self.count.map(|count| count.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub key: String,
    pub label: String,
}

/// Cart overlay: one entry per line plus the formatted subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct CartOverlay {
    pub title: String,
    pub lines: Vec<OverlayLine>,
    pub subtotal: String,
}

impl CartOverlay {
    pub fn from_state(state: &CartState, display: &DisplayConfig) -> Self {
        let lines = state
            .items()
            .iter()
            .enumerate()
            .map(|(position, line)| OverlayLine {
                // append policy may repeat an id, so keys carry the position too
                key: format!("{}-{}", line.product.id, position),
                label: format!("{} × {}", line.product.name, line.quantity),
            })
            .collect();

        CartOverlay {
            title: "Cart Items".to_string(),
            lines,
            subtotal: format!("Subtotal: {}", format_amount(state.subtotal(), display)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub title: String,
    pub price: String,
    pub rating: String,
}

impl ProductCard {
    pub fn from_product(product: &Product, display: &DisplayConfig) -> Self {
        ProductCard {
            title: product.name.clone(),
            price: format!("Price: {}", format_amount(product.price, display)),
            rating: format!("Rating: ⭐ {}", product.rating),
        }
    }
}
