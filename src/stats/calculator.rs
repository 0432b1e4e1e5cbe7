//! Statistics Calculator Module
//! Group-wise means over car records, computed as a plain map-reduce.

use crate::data::CarRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Categorical field to group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Category,
    DriveTrain,
    Make,
    Model,
}

impl GroupKey {
    fn value(&self, record: &CarRecord) -> String {
        match self {
            GroupKey::Category => record.category.label().to_string(),
            GroupKey::DriveTrain => record.drive_train.clone(),
            GroupKey::Make => record.make.clone(),
            GroupKey::Model => record.model.clone(),
        }
    }

    /// Axis label for charts.
    pub fn label(&self) -> &'static str {
        match self {
            GroupKey::Category => "Price Category",
            GroupKey::DriveTrain => "Drive Train",
            GroupKey::Make => "Make",
            GroupKey::Model => "Model",
        }
    }
}

/// Numeric field to average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    Msrp,
    Invoice,
}

impl ValueField {
    fn value(&self, record: &CarRecord) -> i64 {
        match self {
            ValueField::Msrp => record.msrp,
            ValueField::Invoice => record.invoice,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValueField::Msrp => "MSRP",
            ValueField::Invoice => "Invoice",
        }
    }
}

/// Mean of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub group: String,
    pub count: usize,
    pub mean: f64,
}

/// Group means in order of each group's first appearance in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupAverages {
    pub groups: Vec<GroupMean>,
}

impl GroupAverages {
    pub fn get(&self, group: &str) -> Option<f64> {
        self.groups.iter().find(|g| g.group == group).map(|g| g.mean)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupMean> {
        self.groups.iter()
    }
}

/// Handles grouped aggregate calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Mean of `field` per distinct value of `key`.
    pub fn group_average<'a, I>(records: I, key: GroupKey, field: ValueField) -> GroupAverages
    where
        I: IntoIterator<Item = &'a CarRecord>,
    {
        Self::group_average_where(records, key, field, |_| true)
    }

    /// Same as `group_average`, restricted to records matching `predicate`.
    pub fn group_average_where<'a, I, P>(
        records: I,
        key: GroupKey,
        field: ValueField,
        predicate: P,
    ) -> GroupAverages
    where
        I: IntoIterator<Item = &'a CarRecord>,
        P: Fn(&CarRecord) -> bool,
    {
        // group -> (sum, count); order tracks first appearance
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        let mut totals: Vec<(f64, usize)> = Vec::new();

        for record in records.into_iter().filter(|r| predicate(*r)) {
            let group = key.value(record);
            let slot = match index.get(&group) {
                Some(&slot) => slot,
                None => {
                    let slot = order.len();
                    index.insert(group.clone(), slot);
                    order.push(group);
                    totals.push((0.0, 0));
                    slot
                }
            };
            let (sum, count) = &mut totals[slot];
            *sum += field.value(record) as f64;
            *count += 1;
        }

        let groups = order
            .into_iter()
            .zip(totals)
            .map(|(group, (sum, count))| GroupMean {
                group,
                count,
                mean: sum / count as f64,
            })
            .collect();

        GroupAverages { groups }
    }
}
