//! Car listing record and the cleaned dataset.

use super::category::PriceCategory;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const MAKE: &str = "Make";
pub const MODEL: &str = "Model";
pub const DRIVE_TRAIN: &str = "DriveTrain";
pub const MSRP: &str = "MSRP";
pub const INVOICE: &str = "Invoice";

/// Columns that must be present in every input file.
pub const REQUIRED_COLUMNS: [&str; 5] = [MAKE, MODEL, DRIVE_TRAIN, MSRP, INVOICE];

/// One car listing after cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRecord {
    pub make: String,
    pub model: String,
    pub drive_train: String,
    pub msrp: i64,
    pub invoice: i64,
    pub category: PriceCategory,
}

impl CarRecord {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        drive_train: impl Into<String>,
        msrp: i64,
        invoice: i64,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            drive_train: drive_train.into(),
            msrp,
            invoice,
            category: PriceCategory::from_msrp(msrp),
        }
    }
}

/// Cleaned record set for one session.
///
/// `frame` keeps every input column in input order (prices as `Int64`), so
/// exports reproduce the source layout. `records` is the typed projection the
/// classifier and aggregator work on. Neither is mutated after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub frame: DataFrame,
    pub records: Vec<CarRecord>,
    pub source: PathBuf,
    pub dropped_rows: usize,
}

impl Dataset {
    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}
