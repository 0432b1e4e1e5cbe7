//! Data Processor Module
//! Brand selection: distinct makes, record views and frame projections.

use super::record::{CarRecord, MAKE};
use polars::prelude::*;
use std::collections::BTreeSet;

/// Handles brand filtering over the cleaned dataset.
pub struct DataProcessor;

impl DataProcessor {
    /// Records whose make equals `brand` exactly, in input order.
    pub fn filter_by_brand<'a>(records: &'a [CarRecord], brand: &str) -> Vec<&'a CarRecord> {
        records.iter().filter(|r| r.make == brand).collect()
    }

    /// Distinct makes, sorted ascending. These are the selector's choices.
    pub fn brands(records: &[CarRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.make.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Same projection as `filter_by_brand`, on the full frame (all columns).
    pub fn frame_for_brand(df: &DataFrame, brand: &str) -> PolarsResult<DataFrame> {
        df.clone()
            .lazy()
            .filter(col(MAKE).eq(lit(brand)))
            .collect()
    }
}
