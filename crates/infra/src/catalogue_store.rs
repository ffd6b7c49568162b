//! Shared, atomically replaceable catalogue reference.

use std::sync::{Arc, RwLock};

use bokfinder_catalogue::Catalogue;

use crate::config::CataloguePaths;
use crate::error::LoadError;
use crate::loader::load_catalogue;

/// Owner of the current catalogue snapshot.
///
/// Readers clone the inner `Arc` and work on that snapshot for as long as they
/// need it. `replace` swaps the whole reference under the write lock, so a
/// reader sees either the old catalogue or the new one, never a mix.
#[derive(Debug)]
pub struct CatalogueHandle {
    current: RwLock<Arc<Catalogue>>,
}

impl CatalogueHandle {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalogue)),
        }
    }

    /// Current catalogue snapshot.
    pub fn snapshot(&self) -> Arc<Catalogue> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            // The guarded value is a single Arc; a panicking writer cannot leave it half-written.
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Publish a new catalogue, returning the previous one.
    pub fn replace(&self, catalogue: Catalogue) -> Arc<Catalogue> {
        self.publish(Arc::new(catalogue))
    }

    /// Rebuild from disk and publish.
    ///
    /// The new catalogue is fully loaded before the swap. On error the current
    /// catalogue stays in place.
    pub fn reload(&self, paths: &CataloguePaths) -> Result<Arc<Catalogue>, LoadError> {
        let next = Arc::new(load_catalogue(paths)?);
        self.publish(Arc::clone(&next));
        tracing::info!(
            products = next.len(),
            reviews = next.reviews().len(),
            "catalogue reloaded"
        );
        Ok(next)
    }

    fn publish(&self, next: Arc<Catalogue>) -> Arc<Catalogue> {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, next)
    }
}

impl Default for CatalogueHandle {
    fn default() -> Self {
        Self::new(Catalogue::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bokfinder_catalogue::{Links, Product, ReviewLinkTable};
    use std::fs;

    fn catalogue_of(names: &[&str]) -> Catalogue {
        let products = names
            .iter()
            .map(|n| Product::try_new(*n, Links::new()).unwrap())
            .collect();
        Catalogue::new(products, ReviewLinkTable::new())
    }

    #[test]
    fn snapshot_survives_replace() {
        let handle = CatalogueHandle::new(catalogue_of(&["Belajar Python"]));
        let before = handle.snapshot();

        let previous = handle.replace(catalogue_of(&["Hacking 101", "Ilmu Hacking"]));

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.len(), 1);
        assert_eq!(before.find_products("python").len(), 1);
        assert_eq!(handle.snapshot().len(), 2);
        assert!(handle.snapshot().find_products("python").is_empty());
    }

    #[test]
    fn concurrent_readers_see_complete_catalogues() {
        let handle = Arc::new(CatalogueHandle::new(catalogue_of(&["A1", "A2", "A3"])));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        let len = handle.snapshot().len();
                        assert!(len == 3 || len == 5, "partial catalogue of {len} products");
                    }
                })
            })
            .collect();

        for i in 0..100 {
            if i % 2 == 0 {
                handle.replace(catalogue_of(&["B1", "B2", "B3", "B4", "B5"]));
            } else {
                handle.replace(catalogue_of(&["A1", "A2", "A3"]));
            }
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }

    #[test]
    fn failed_reload_keeps_current_catalogue() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CataloguePaths {
            products_txt: dir.path().join("products.txt"),
            reviews_txt: dir.path().join("review_links.txt"),
            products_json: dir.path().join("products.json"),
            reviews_json: dir.path().join("review_links.json"),
        };
        let handle = CatalogueHandle::new(catalogue_of(&["Belajar Python"]));

        assert!(handle.reload(&paths).is_err());
        assert_eq!(handle.snapshot().len(), 1);

        fs::write(&paths.products_txt, "Hacking 101\n\nIlmu Hacking\n").unwrap();
        fs::write(&paths.reviews_txt, "Ilmu Hacking: http://review/1\n").unwrap();

        let reloaded = handle.reload(&paths).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(handle.snapshot().find_review_link("Ilmu Hacking").1);
    }
}
