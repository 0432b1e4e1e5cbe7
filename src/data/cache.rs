//! Session Cache Module
//! Memoizes the cleaned dataset so the source file is read once per session.

use super::loader::{CleaningPolicy, DataLoader, LoaderError};
use super::record::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Owner of the lazily loaded, immutable dataset handle.
pub struct DatasetCache {
    path: PathBuf,
    loader: DataLoader,
    dataset: Option<Arc<Dataset>>,
    load_count: usize,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>, policy: CleaningPolicy) -> Self {
        Self {
            path: path.into(),
            loader: DataLoader::new(policy),
            dataset: None,
            load_count: 0,
        }
    }

    /// Return the cached dataset, loading it on first use.
    ///
    /// A failed load leaves the cache empty so the next call tries again.
    pub fn get(&mut self) -> Result<Arc<Dataset>, LoaderError> {
        if let Some(dataset) = &self.dataset {
            debug!(path = %self.path.display(), "dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        debug!(path = %self.path.display(), "dataset cache miss");
        self.load_count += 1;
        let dataset = Arc::new(self.loader.load_csv(&self.path)?);
        self.dataset = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drop the cached handle; the next `get` reads the file again.
    pub fn reset(&mut self) {
        if self.dataset.take().is_some() {
            info!(path = %self.path.display(), "dataset cache reset");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Number of times the source file has been read.
    pub fn load_count(&self) -> usize {
        self.load_count
    }
}
