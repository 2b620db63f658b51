use super::{CountKey, TapCounts};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RankOrder {
    /// highest count first, ties in ascending key order
    Descending,
    /// ascending key order, e.g. hour of day
    Natural,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CountEntry {
    pub key: CountKey,
    pub count: u64,
}

impl CountEntry {
    pub fn new(key: CountKey, count: u64) -> CountEntry {
        Self { key, count }
    }
}

/// orders the counted keys for display. the sort is stable over the key
/// order of [`TapCounts`], so equal counts always come out the same way.
pub fn rank(counts: &TapCounts, order: RankOrder) -> Vec<CountEntry> {
    let mut entries = counts
        .iter()
        .map(|(key, count)| CountEntry::new(key.clone(), count))
        .collect::<Vec<_>>();
    if order == RankOrder::Descending {
        entries.sort_by(|a, b| b.count.cmp(&a.count));
    }
    entries
}
