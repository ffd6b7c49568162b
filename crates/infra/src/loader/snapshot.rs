//! JSON snapshots of the parsed catalogue.
//!
//! Products are stored as `[{"name": .., "links": {label: url}}]` and review
//! links as `{name: url}`, both pretty-printed.

use std::fs;
use std::path::Path;

use bokfinder_catalogue::{Product, ProductRecord, ReviewLinkTable};

use crate::error::LoadError;

pub fn write_products(path: &Path, products: &[Product]) -> Result<(), LoadError> {
    let data = serde_json::to_string_pretty(products).map_err(|e| LoadError::json(path, e))?;
    fs::write(path, data).map_err(|e| LoadError::write(path, e))
}

pub fn write_reviews(path: &Path, reviews: &ReviewLinkTable) -> Result<(), LoadError> {
    let data = serde_json::to_string_pretty(reviews).map_err(|e| LoadError::json(path, e))?;
    fs::write(path, data).map_err(|e| LoadError::write(path, e))
}

/// Read a product snapshot, dropping entries whose name is empty.
pub fn read_products(path: &Path) -> Result<Vec<Product>, LoadError> {
    let data = fs::read(path).map_err(|e| LoadError::read(path, e))?;
    let records: Vec<ProductRecord> =
        serde_json::from_slice(&data).map_err(|e| LoadError::json(path, e))?;

    let total = records.len();
    let products: Vec<Product> = records
        .into_iter()
        .filter_map(|record| Product::try_from(record).ok())
        .collect();

    if products.len() < total {
        tracing::warn!(
            path = %path.display(),
            dropped = total - products.len(),
            "dropped snapshot entries without a product name"
        );
    }

    Ok(products)
}

pub fn read_reviews(path: &Path) -> Result<ReviewLinkTable, LoadError> {
    let data = fs::read(path).map_err(|e| LoadError::read(path, e))?;
    serde_json::from_slice(&data).map_err(|e| LoadError::json(path, e))
}
