//! Car Price Visualizer
//!
//! Loads a car listings CSV, buckets each MSRP into a price category and
//! builds the brand-filtered views and averages behind the dashboard charts.

pub mod app;
pub mod charts;
pub mod data;
pub mod settings;
pub mod stats;
