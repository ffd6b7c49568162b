//! Infrastructure layer: catalogue files, JSON snapshots, configuration.

pub mod catalogue_store;
pub mod config;
pub mod error;
pub mod loader;

pub use catalogue_store::CatalogueHandle;
pub use config::{BotConfig, CataloguePaths};
pub use error::LoadError;
pub use loader::load_catalogue;
