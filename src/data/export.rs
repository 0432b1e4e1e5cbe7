//! Brand Export Module
//! Writes the brand-scoped rows back out as CSV.

use super::processor::DataProcessor;
use super::record::Dataset;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `<brand>_cars.csv`, with path separators in the brand replaced by `_`.
pub fn export_file_name(brand: &str) -> String {
    let safe: String = brand
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}_cars.csv", safe)
}

/// Write every row of `brand` to `dir/<brand>_cars.csv`.
///
/// The file has the same columns, in the same order, as the source; prices are
/// written as plain integers. A brand with no rows produces a header-only file.
pub fn export_brand(dataset: &Dataset, brand: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut frame = DataProcessor::frame_for_brand(&dataset.frame, brand)?;

    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(export_file_name(brand));
    let mut file = File::create(&path).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)?;

    info!(brand, rows = frame.height(), path = %path.display(), "brand exported");
    Ok(path)
}
