use super::{CountKey, GroupBy};
use crate::taps::TapEvent;
use std::collections::BTreeMap;

/// tap totals per key for one grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapCounts {
    group_by: GroupBy,
    counts: BTreeMap<CountKey, u64>,
}

impl TapCounts {
    /// counts taps under the key chosen by `group_by`. hour counts always
    /// carry all 24 hours.
    pub fn count(taps: &[TapEvent], group_by: GroupBy) -> TapCounts {
        let mut counts = group_by
            .zero_filled_keys()
            .into_iter()
            .map(|k| (k, 0))
            .collect::<BTreeMap<_, _>>();
        for tap in taps {
            *counts.entry(group_by.key(tap)).or_insert(0) += 1;
        }
        Self { group_by, counts }
    }

    pub fn from_counts(group_by: GroupBy, counts: BTreeMap<CountKey, u64>) -> TapCounts {
        Self { group_by, counts }
    }

    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }

    pub fn get(&self, key: &CountKey) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&CountKey, u64)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    pub(crate) fn counts_mut(&mut self) -> &mut BTreeMap<CountKey, u64> {
        &mut self.counts
    }
}
