use std::fmt;

use crate::catalog::ProductError;
use crate::journal::PayloadError;

#[derive(Debug, Clone, PartialEq)]
pub enum CartError {
    /// The product was rejected; the cart is unchanged.
    InvalidProduct(ProductError),
    Payload(PayloadError),
    Replay(String),
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartError::InvalidProduct(err) => write!(f, "invalid product: {}", err),
            CartError::Payload(err) => write!(f, "{}", err),
            CartError::Replay(message) => write!(f, "replay error: {}", message),
        }
    }
}

impl std::error::Error for CartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CartError::InvalidProduct(err) => Some(err),
            CartError::Payload(err) => Some(err),
            CartError::Replay(_) => None,
        }
    }
}

impl From<ProductError> for CartError {
    fn from(err: ProductError) -> Self {
        CartError::InvalidProduct(err)
    }
}

impl From<PayloadError> for CartError {
    fn from(err: PayloadError) -> Self {
        CartError::Payload(err)
    }
}
