//! grouping, label normalization and ranking of tap events.
mod count_key;
mod group_by;
mod normalization;
mod ranking;
mod tap_counts;

pub use count_key::CountKey;
pub use group_by::GroupBy;
pub use normalization::{LabelMapping, NormalizationConfig, NormalizationTable};
pub use ranking::{rank, CountEntry, RankOrder};
pub use tap_counts::TapCounts;
