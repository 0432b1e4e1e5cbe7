//! Charts module - Bar chart series for the dashboard

mod bar;

pub use bar::{Bar, BarChart, X_TICK_ROTATION};
