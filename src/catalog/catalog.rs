use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};

use super::{CatalogError, Product, ProductId, RawProduct};

/// Split a feed document into raw records. A feed is either a plain list of
/// records or an object keyed by product id; anything else is a parse error.
fn document_records(document: Value) -> Result<Vec<RawProduct>, CatalogError> {
    match document {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<RawProduct>(item).map_err(|err| {
                    CatalogError::MalformedRecord {
                        index,
                        message: err.to_string(),
                    }
                })
            })
            .collect(),
        Value::Object(entries) => keyed_records(entries),
        _ => Err(CatalogError::Parse(
            "catalog feed must be a JSON array or object".to_string(),
        )),
    }
}

/// Numeric keys come first in numeric order, then text keys in lexical order.
fn key_order(key: &str) -> (bool, u64, &str) {
    match key.parse::<u64>() {
        Ok(id) => (false, id, ""),
        Err(_) => (true, 0, key),
    }
}

fn keyed_records(entries: Map<String, Value>) -> Result<Vec<RawProduct>, CatalogError> {
    let mut entries: Vec<(String, Value)> = entries.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| key_order(a).cmp(&key_order(b)));

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (key, item))| -> Result<RawProduct, CatalogError> {
            let mut record: RawProduct =
                serde_json::from_value(item).map_err(|err| CatalogError::MalformedRecord {
                    index,
                    message: format!("key {:?}: {}", key, err),
                })?;
            // an explicit id in the record wins over its key
            if record.id.is_none() {
                record.id = Some(match key.parse::<u64>() {
                    Ok(id) => ProductId::Int(id),
                    Err(_) => ProductId::Text(key),
                });
            }
            Ok(record)
        })
        .collect()
}

/// Read-only product list with unique ids, kept in feed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    pub fn empty() -> Self {
        Catalog::default()
    }

    /// Build a catalog from typed products, validating each one and
    /// rejecting repeated ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            product
                .validate()
                .map_err(|source| CatalogError::InvalidProduct {
                    index: position,
                    source,
                })?;
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Catalog { products, index })
    }

    pub fn from_records(records: Vec<RawProduct>) -> Result<Self, CatalogError> {
        let mut products = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let product = Product::try_from(record)
                .map_err(|source| CatalogError::InvalidProduct { index, source })?;
            products.push(product);
        }
        Catalog::from_products(products)
    }

    /// Parse a JSON feed. Each record is decoded on its own, so a wrong-typed
    /// field is reported with the position of its record.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_str(json)?;
        Catalog::from_records(document_records(document)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_reader(reader)?;
        Catalog::from_records(document_records(document)?)
    }

    /// Load a feed file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Catalog::from_reader(BufReader::new(file))
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|position| &self.products[*position])
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains_key(id)
    }

    /// Products in feed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
