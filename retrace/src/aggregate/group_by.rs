use super::CountKey;
use crate::taps::TapEvent;
use chrono::{Datelike, Timelike};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// the attribute of a tap used as its count key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    Station,
    Hour,
    Month,
}

impl GroupBy {
    pub fn key(&self, tap: &TapEvent) -> CountKey {
        match self {
            GroupBy::Station => CountKey::station(tap.station()),
            GroupBy::Hour => CountKey::Hour(tap.timestamp().hour()),
            GroupBy::Month => CountKey::Month {
                year: tap.timestamp().year(),
                month: tap.timestamp().month(),
            },
        }
    }

    /// keys present in every count even when no tap falls in them
    pub fn zero_filled_keys(&self) -> Vec<CountKey> {
        match self {
            GroupBy::Hour => (0..24).map(CountKey::Hour).collect(),
            GroupBy::Station | GroupBy::Month => vec![],
        }
    }
}
