//! CSV Data Loader Module
//! Loads the car listings CSV with Polars and cleans the price columns.

use super::record::{CarRecord, Dataset, DRIVE_TRAIN, INVOICE, MAKE, MODEL, MSRP, REQUIRED_COLUMNS};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Columns in which a null disqualifies a row.
pub const NON_NULL_COLUMNS: [&str; 4] = [MAKE, DRIVE_TRAIN, MSRP, INVOICE];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("CSV file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Invalid price in column {column} at row {row}: {value:?}")]
    InvalidPrice {
        column: String,
        row: usize,
        value: String,
    },
    #[error("Column {column} has {count} missing value(s)")]
    MissingValue { column: String, count: usize },
}

/// What to do with rows whose required fields are missing or unparseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningPolicy {
    /// Any bad price or missing required value fails the whole load.
    Strict,
    /// Bad prices become null; rows with a null required field are dropped.
    DropIncomplete,
}

impl Default for CleaningPolicy {
    fn default() -> Self {
        CleaningPolicy::DropIncomplete
    }
}

/// Remove `$` and `,` from a currency string.
fn strip_currency(raw: &str) -> String {
    raw.chars().filter(|c| *c != '$' && *c != ',').collect()
}

/// Parse a currency string such as `"$36,945"` into a non-negative integer.
pub fn parse_price(raw: &str) -> Option<i64> {
    strip_currency(raw)
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|value| *value >= 0)
}

/// Loads and cleans the listings CSV.
pub struct DataLoader {
    policy: CleaningPolicy,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(CleaningPolicy::default())
    }
}

impl DataLoader {
    pub fn new(policy: CleaningPolicy) -> Self {
        Self { policy }
    }

    /// Load a CSV file, clean it and project it into records.
    pub fn load_csv(&self, file_path: &Path) -> Result<Dataset, LoaderError> {
        if !file_path.exists() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }

        let started = Instant::now();
        // Zero inference rows reads every column as text: prices go through the
        // cleaner row by row and pass-through columns are written back unchanged.
        let raw = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;
        let read_rows = raw.height();
        debug!(path = %file_path.display(), rows = read_rows, "csv read");

        let frame = self.clean(raw)?;
        let dropped_rows = read_rows - frame.height();
        if dropped_rows > 0 {
            warn!(dropped = dropped_rows, "dropped incomplete rows");
        }

        let records = Self::records_from_frame(&frame)?;
        info!(
            path = %file_path.display(),
            rows = records.len(),
            dropped = dropped_rows,
            elapsed = ?started.elapsed(),
            "dataset loaded"
        );

        Ok(Dataset {
            frame,
            records,
            source: file_path.to_path_buf(),
            dropped_rows,
        })
    }

    /// Check the schema, convert both price columns to `Int64` and apply the
    /// row policy. Column set and order are left untouched.
    pub fn clean(&self, mut df: DataFrame) -> Result<DataFrame, LoaderError> {
        for name in REQUIRED_COLUMNS {
            if df.column(name).is_err() {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }

        for name in [MSRP, INVOICE] {
            let cleaned = self.clean_price_column(&df, name)?;
            df.with_column(cleaned)?;
        }

        match self.policy {
            CleaningPolicy::Strict => {
                Self::ensure_complete(&df)?;
                Ok(df)
            }
            CleaningPolicy::DropIncomplete => {
                let keep = NON_NULL_COLUMNS
                    .iter()
                    .fold(lit(true), |acc, name| acc.and(col(*name).is_not_null()));
                Ok(df.lazy().filter(keep).collect()?)
            }
        }
    }

    fn clean_price_column(&self, df: &DataFrame, name: &str) -> Result<Column, LoaderError> {
        let text = df.column(name)?.cast(&DataType::String)?;
        let values = text.str()?;

        let mut cleaned: Vec<Option<i64>> = Vec::with_capacity(values.len());
        for (idx, raw) in values.into_iter().enumerate() {
            let Some(raw) = raw else {
                cleaned.push(None);
                continue;
            };
            match parse_price(raw) {
                Some(price) => cleaned.push(Some(price)),
                None => match self.policy {
                    CleaningPolicy::Strict => {
                        return Err(LoaderError::InvalidPrice {
                            column: name.to_string(),
                            row: idx + 1,
                            value: raw.to_string(),
                        });
                    }
                    CleaningPolicy::DropIncomplete => {
                        debug!(column = name, row = idx + 1, value = raw, "unparseable price");
                        cleaned.push(None);
                    }
                },
            }
        }

        Ok(Column::new(name.into(), cleaned))
    }

    fn ensure_complete(df: &DataFrame) -> Result<(), LoaderError> {
        for name in NON_NULL_COLUMNS {
            let count = df.column(name)?.null_count();
            if count > 0 {
                return Err(LoaderError::MissingValue {
                    column: name.to_string(),
                    count,
                });
            }
        }
        Ok(())
    }

    /// Project a cleaned frame into typed records, one per row, in row order.
    pub fn records_from_frame(df: &DataFrame) -> Result<Vec<CarRecord>, LoaderError> {
        Self::ensure_complete(df)?;

        let make_col = df.column(MAKE)?.cast(&DataType::String)?;
        let model_col = df.column(MODEL)?.cast(&DataType::String)?;
        let drive_col = df.column(DRIVE_TRAIN)?.cast(&DataType::String)?;
        let msrp_col = df.column(MSRP)?.cast(&DataType::Int64)?;
        let invoice_col = df.column(INVOICE)?.cast(&DataType::Int64)?;

        let make = make_col.str()?;
        let model = model_col.str()?;
        let drive_train = drive_col.str()?;
        let msrp = msrp_col.i64()?;
        let invoice = invoice_col.i64()?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let (Some(make), Some(drive_train), Some(msrp), Some(invoice)) =
                (make.get(i), drive_train.get(i), msrp.get(i), invoice.get(i))
            else {
                continue;
            };
            records.push(CarRecord::new(
                make,
                model.get(i).unwrap_or_default(),
                drive_train,
                msrp,
                invoice,
            ));
        }

        Ok(records)
    }
}
