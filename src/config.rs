//! Store configuration, read from JSON. Every field has a default, so an
//! empty object (or no file at all) yields a working store.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cart::LinePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    /// Display precision above [`MAX_PRECISION`].
    InvalidPrecision(usize),
}

/// Largest number of decimals a config file may ask for.
pub const MAX_PRECISION: usize = 8;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(message) => write!(f, "config io error: {}", message),
            ConfigError::Parse(message) => write!(f, "config parse error: {}", message),
            ConfigError::InvalidPrecision(precision) => write!(
                f,
                "display precision {} exceeds the maximum of {}",
                precision, MAX_PRECISION
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub cart_id: String,
    pub line_policy: LinePolicy,
    pub display: DisplayConfig,
}

impl Default for CartConfig {
    fn default() -> Self {
        CartConfig {
            cart_id: "cart".to_string(),
            line_policy: LinePolicy::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl CartConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CartConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.display.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        CartConfig::from_json_str(&text)
    }

    pub fn with_line_policy(mut self, line_policy: LinePolicy) -> Self {
        self.line_policy = line_policy;
        self
    }
}

/// How amounts are rendered. Affects presentation only, never stored totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub precision: usize,
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency_symbol: "$".to_string(),
            precision: 2,
        }
    }
}
