use super::{Catalog, CatalogError, CatalogSource, Product};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loaded,
    Failed(CatalogError),
}

/// The product list shown to shoppers. Loaded once at startup; a failed
/// load leaves it empty and is not retried.
#[derive(Debug, Clone, Default)]
pub struct ProductList {
    catalog: Catalog,
    status: LoadStatus,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from `source` unless a previous fetch already succeeded.
    pub fn fetch<S: CatalogSource + ?Sized>(&mut self, source: &S) -> &LoadStatus {
        if self.status == LoadStatus::Loaded {
            tracing::debug!(source = %source.describe(), "catalog already loaded, skipping fetch");
            return &self.status;
        }

        match source.load() {
            Ok(catalog) => {
                tracing::info!(
                    source = %source.describe(),
                    products = catalog.len(),
                    "catalog loaded"
                );
                self.catalog = catalog;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                tracing::warn!(
                    source = %source.describe(),
                    error = %err,
                    "catalog fetch failed, product list left empty"
                );
                self.catalog = Catalog::empty();
                self.status = LoadStatus::Failed(err);
            }
        }
        &self.status
    }

    pub fn items(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match &self.status {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }
}
