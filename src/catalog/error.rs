use std::fmt;

use super::ProductId;

/// Why a product record was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductError {
    MissingId,
    EmptyId,
    MissingName,
    MissingPrice,
    InvalidPrice(f64),
}

impl fmt::Display for ProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductError::MissingId => write!(f, "product has no id"),
            ProductError::EmptyId => write!(f, "product id is empty"),
            ProductError::MissingName => write!(f, "product has no name"),
            ProductError::MissingPrice => write!(f, "product has no price"),
            ProductError::InvalidPrice(price) => {
                write!(f, "product price {} is not a finite non-negative number", price)
            }
        }
    }
}

impl std::error::Error for ProductError {}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Io(String),
    Parse(String),
    /// A record whose fields have the wrong JSON types.
    MalformedRecord { index: usize, message: String },
    InvalidProduct { index: usize, source: ProductError },
    DuplicateId(ProductId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(message) => write!(f, "catalog io error: {}", message),
            CatalogError::Parse(message) => write!(f, "catalog parse error: {}", message),
            CatalogError::MalformedRecord { index, message } => {
                write!(f, "malformed product record at index {}: {}", index, message)
            }
            CatalogError::InvalidProduct { index, source } => {
                write!(f, "invalid product at index {}: {}", index, source)
            }
            CatalogError::DuplicateId(id) => write!(f, "duplicate product id {}", id),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::InvalidProduct { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
