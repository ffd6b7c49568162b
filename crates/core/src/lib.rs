//! `bokfinder-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no transport).

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
