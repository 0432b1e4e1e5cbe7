//! Data module - CSV loading, cleaning, brand filtering and export

mod cache;
mod category;
mod export;
mod loader;
mod processor;
mod record;

pub use cache::DatasetCache;
pub use category::PriceCategory;
pub use export::{export_brand, export_file_name, ExportError};
pub use loader::{parse_price, CleaningPolicy, DataLoader, LoaderError};
pub use processor::DataProcessor;
pub use record::{CarRecord, Dataset};
