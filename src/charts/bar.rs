//! Bar Chart Series
//! Renderer-agnostic description of an averages bar chart.

use crate::stats::{GroupAverages, GroupKey, ValueField};
use serde::Serialize;

/// X tick label rotation, in degrees.
pub const X_TICK_ROTATION: f32 = 45.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub count: usize,
}

/// One bar chart: group on the x-axis, mean value on the y-axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_tick_rotation: f32,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn from_averages(
        title: impl Into<String>,
        key: GroupKey,
        field: ValueField,
        averages: &GroupAverages,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: key.label().to_string(),
            y_label: field.label().to_string(),
            x_tick_rotation: X_TICK_ROTATION,
            bars: averages
                .iter()
                .map(|g| Bar {
                    label: g.group.clone(),
                    value: g.mean,
                    count: g.count,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Largest bar value, for axis scaling. `None` when there are no bars.
    pub fn max_value(&self) -> Option<f64> {
        self.bars.iter().map(|b| b.value).reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CarRecord;
    use crate::stats::StatsCalculator;

    #[test]
    fn test_from_averages() {
        let records = vec![
            CarRecord::new("Acura", "MDX", "All", 36_945, 33_337),
            CarRecord::new("Audi", "A8 L", "All", 69_190, 64_740),
            CarRecord::new("Acura", "RSX", "Front", 23_820, 21_761),
        ];
        let avg = StatsCalculator::group_average(&records, GroupKey::DriveTrain, ValueField::Msrp);
        let chart = BarChart::from_averages(
            "Average MSRP by Drive Train",
            GroupKey::DriveTrain,
            ValueField::Msrp,
            &avg,
        );

        assert_eq!(chart.x_label, "Drive Train");
        assert_eq!(chart.y_label, "MSRP");
        assert_eq!(chart.x_tick_rotation, 45.0);
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].label, "All");
        assert_eq!(chart.bars[0].value, 53_067.5);
        assert_eq!(chart.bars[0].count, 2);
        assert_eq!(chart.bars[1].label, "Front");
        assert_eq!(chart.max_value(), Some(53_067.5));
    }

    #[test]
    fn test_empty_chart() {
        let chart = BarChart::from_averages(
            "Average Invoice by Price Category",
            GroupKey::Category,
            ValueField::Invoice,
            &GroupAverages::default(),
        );
        assert!(chart.is_empty());
        assert_eq!(chart.max_value(), None);
    }
}
