//! Stats module - Grouped aggregates

mod calculator;

pub use calculator::{GroupAverages, GroupKey, GroupMean, StatsCalculator, ValueField};
