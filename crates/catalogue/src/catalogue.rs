use bokfinder_core::Entity;

use crate::matcher::find_products;
use crate::product::Product;
use crate::review::{ReviewLinkTable, find_review_link};

/// Products plus review links for one serving session.
///
/// Read-only once built. Reloading means building a new `Catalogue` and
/// swapping it in whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    products: Vec<Product>,
    reviews: ReviewLinkTable,
}

impl Catalogue {
    pub fn new(products: Vec<Product>, reviews: ReviewLinkTable) -> Self {
        Self { products, reviews }
    }

    /// Products in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn reviews(&self) -> &ReviewLinkTable {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product with exactly this name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == name)
    }

    pub fn find_products(&self, query: &str) -> Vec<&Product> {
        find_products(&self.products, query)
    }

    pub fn find_review_link(&self, product_name: &str) -> (String, bool) {
        find_review_link(&self.reviews, product_name)
    }
}
