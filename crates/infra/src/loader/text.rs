//! Line-oriented catalogue source files.
//!
//! Products: records are separated by blank lines. Inside a record, a line
//! containing `:` is a `label: url` link (split at the first colon), and any
//! other line is the product name (the last one wins). Records without a name
//! are dropped together with their links.
//!
//! Reviews: one `product name: url` entry per line. Lines without a colon are
//! skipped; a repeated name keeps the last url.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bokfinder_catalogue::{Links, Product, ReviewLinkTable};

use crate::error::LoadError;

const DELIMITER: char = ':';

pub fn load_products(path: &Path) -> Result<Vec<Product>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::read(path, e))?;
    parse_products(BufReader::new(file)).map_err(|e| LoadError::read(path, e))
}

pub fn load_reviews(path: &Path) -> Result<ReviewLinkTable, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::read(path, e))?;
    parse_reviews(BufReader::new(file)).map_err(|e| LoadError::read(path, e))
}

#[derive(Debug, Default)]
struct PendingRecord {
    name: String,
    links: Links,
}

impl PendingRecord {
    /// Take the accumulated record, leaving an empty one behind.
    fn finish(&mut self) -> Option<Product> {
        let record = std::mem::take(self);
        if record.name.is_empty() {
            if !record.links.is_empty() {
                tracing::debug!(links = record.links.len(), "dropping product record without a name");
            }
            return None;
        }
        Product::try_new(record.name, record.links).ok()
    }
}

pub fn parse_products<R: BufRead>(reader: R) -> std::io::Result<Vec<Product>> {
    let mut products = Vec::new();
    let mut pending = PendingRecord::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            products.extend(pending.finish());
            continue;
        }

        match split_entry(line) {
            Some((label, url)) => pending.links.insert(label, url),
            None => pending.name = line.to_string(),
        }
    }
    products.extend(pending.finish());

    Ok(products)
}

pub fn parse_reviews<R: BufRead>(reader: R) -> std::io::Result<ReviewLinkTable> {
    let mut reviews = ReviewLinkTable::new();

    for line in reader.lines() {
        let line = line?;
        if let Some((name, url)) = split_entry(line.trim()) {
            reviews.insert(name, url);
        }
    }

    Ok(reviews)
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    line.split_once(DELIMITER)
        .map(|(key, value)| (key.trim(), value.trim()))
}
