use chrono::NaiveDateTime;
use serde::Serialize;

/// one fare-transaction log row that carried a usable timestamp and station.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TapEvent {
    timestamp: NaiveDateTime,
    station: String,
    product: String,
}

impl TapEvent {
    pub fn new(timestamp: NaiveDateTime, station: String, product: String) -> TapEvent {
        Self {
            timestamp,
            station,
            product,
        }
    }

    /// local date and time of the tap, minute resolution
    pub fn timestamp(&self) -> &NaiveDateTime {
        &self.timestamp
    }

    /// the station label as it appeared in the log: a station name, or a bus
    /// stop code. labels are normalized later, during aggregation.
    pub fn station(&self) -> &str {
        &self.station
    }

    /// fare product label, e.g. "Stored Value" or a pass name
    pub fn product(&self) -> &str {
        &self.product
    }
}
