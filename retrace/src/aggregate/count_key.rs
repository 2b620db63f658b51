use serde::{Serialize, Serializer};
use std::fmt::Display;

/// the bucket a tap is counted under. keys order by variant and then by value,
/// which makes the ascending key order the natural order of a report.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CountKey {
    Station(String),
    Hour(u32),
    Month { year: i32, month: u32 },
}

impl CountKey {
    pub fn station(label: &str) -> CountKey {
        CountKey::Station(label.to_string())
    }

    /// the station label or stop code, if this is a station key
    pub fn as_station(&self) -> Option<&str> {
        match self {
            CountKey::Station(label) => Some(label),
            _ => None,
        }
    }
}

impl Display for CountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountKey::Station(label) => write!(f, "{label}"),
            CountKey::Hour(hour) => write!(f, "{hour}"),
            CountKey::Month { year, month } => write!(f, "{year}-{month}"),
        }
    }
}

impl Serialize for CountKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
