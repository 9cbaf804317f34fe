use std::fmt;

use serde::{Deserialize, Serialize};

use super::ProductError;

/// Identifier of a product: the feed uses either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Int(u64),
    Text(String),
}

impl ProductId {
    /// Integer ids are always usable; text ids must contain something besides whitespace.
    pub fn is_usable(&self) -> bool {
        match self {
            ProductId::Int(_) => true,
            ProductId::Text(text) => !text.trim().is_empty(),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Int(id) => write!(f, "{}", id),
            ProductId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId::Int(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId::Text(id)
    }
}

/// A catalog entry. Carts keep their own copy, so later catalog edits never
/// reprice lines that were already added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub rating: f64,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            rating: 0.0,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if !self.id.is_usable() {
            return Err(ProductError::EmptyId);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice(self.price));
        }
        Ok(())
    }
}

/// A product record exactly as it appears in a feed, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl TryFrom<RawProduct> for Product {
    type Error = ProductError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let id = raw.id.ok_or(ProductError::MissingId)?;
        let name = raw.name.ok_or(ProductError::MissingName)?;
        let price = raw.price.ok_or(ProductError::MissingPrice)?;

        let product = Product {
            id,
            name,
            price,
            rating: raw.rating.unwrap_or_default(),
        };
        product.validate()?;
        Ok(product)
    }
}
