//! Catalogue loading: text sources, JSON snapshots, and the startup pipeline.

pub mod snapshot;
pub mod text;

use bokfinder_catalogue::Catalogue;

use crate::config::CataloguePaths;
use crate::error::LoadError;

/// Build a catalogue from the configured files.
///
/// Parses both text sources, writes them out as JSON snapshots, then reads the
/// snapshots back. The snapshots are what the returned catalogue is built
/// from, so a snapshot that fails to decode fails the load.
pub fn load_catalogue(paths: &CataloguePaths) -> Result<Catalogue, LoadError> {
    let products = text::load_products(&paths.products_txt)?;
    let reviews = text::load_reviews(&paths.reviews_txt)?;
    tracing::info!(
        products = products.len(),
        reviews = reviews.len(),
        "parsed catalogue text files"
    );

    snapshot::write_products(&paths.products_json, &products)?;
    snapshot::write_reviews(&paths.reviews_json, &reviews)?;

    let products = snapshot::read_products(&paths.products_json)?;
    let reviews = snapshot::read_reviews(&paths.reviews_json)?;
    tracing::info!(
        products = products.len(),
        reviews = reviews.len(),
        "catalogue loaded from snapshots"
    );

    Ok(Catalogue::new(products, reviews))
}
