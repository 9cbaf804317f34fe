use std::path::PathBuf;

use super::{Catalog, CatalogError};

/// Somewhere a catalog can be loaded from.
pub trait CatalogSource {
    /// Short human readable label used in log output.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// JSON feed stored on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_path(&self.path)
    }
}

/// JSON feed bundled with the application, e.g. via `include_str!`.
#[derive(Debug, Clone)]
pub struct StaticSource {
    json: String,
}

impl StaticSource {
    pub fn new(json: impl Into<String>) -> Self {
        StaticSource { json: json.into() }
    }
}

impl CatalogSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_json_str(&self.json)
    }
}
