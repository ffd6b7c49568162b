//! Catalogue domain module.
//!
//! Products with their affiliate links, the review-link table, and the
//! keyword matching that answers free-text chat queries. Everything here is
//! deterministic, in-memory domain logic (no IO, no transport).

pub mod catalogue;
pub mod keywords;
pub mod matcher;
pub mod product;
pub mod review;

pub use catalogue::Catalogue;
pub use keywords::{extract_keywords, fold_case};
pub use matcher::{find_products, matches_query};
pub use product::{Links, Product, ProductRecord};
pub use review::{ReviewLinkTable, find_review_link};
