use serde::{Deserialize, Serialize};

/// How repeated adds of the same product are recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePolicy {
    /// One line per product id; adding it again bumps the quantity.
    #[default]
    Merge,
    /// Every add appends a fresh line with quantity 1.
    Append,
}
