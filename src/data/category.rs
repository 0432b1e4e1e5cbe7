//! Price Category Module
//! Buckets an MSRP into one of four budget labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound (inclusive) of the Low Budget bucket.
pub const LOW_BUDGET_MIN: i64 = 10_000;
/// Upper bound (inclusive) of the Low Budget bucket.
pub const LOW_BUDGET_MAX: i64 = 22_000;
/// Upper bound (inclusive) of the Mid Budget bucket.
pub const MID_BUDGET_MAX: i64 = 40_000;
/// Upper bound (inclusive) of the High Budget bucket.
pub const HIGH_BUDGET_MAX: i64 = 60_000;

/// Derived price category of a listing.
///
/// `Luxury` is the catch-all: anything outside the three budget ranges lands
/// there, including prices *below* `LOW_BUDGET_MIN`. Zero and negative prices
/// are therefore `Luxury` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceCategory {
    #[serde(rename = "Low Budget")]
    LowBudget,
    #[serde(rename = "Mid Budget")]
    MidBudget,
    #[serde(rename = "High Budget")]
    HighBudget,
    #[serde(rename = "Luxury")]
    Luxury,
}

impl PriceCategory {
    /// Classify an MSRP. Total over every `i64`.
    pub fn from_msrp(msrp: i64) -> Self {
        if (LOW_BUDGET_MIN..=LOW_BUDGET_MAX).contains(&msrp) {
            PriceCategory::LowBudget
        } else if msrp > LOW_BUDGET_MAX && msrp <= MID_BUDGET_MAX {
            PriceCategory::MidBudget
        } else if msrp > MID_BUDGET_MAX && msrp <= HIGH_BUDGET_MAX {
            PriceCategory::HighBudget
        } else {
            PriceCategory::Luxury
        }
    }

    /// Human-readable label used on chart axes and in exports.
    pub fn label(&self) -> &'static str {
        match self {
            PriceCategory::LowBudget => "Low Budget",
            PriceCategory::MidBudget => "Mid Budget",
            PriceCategory::HighBudget => "High Budget",
            PriceCategory::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
