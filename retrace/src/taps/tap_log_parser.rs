use super::{StationMatchers, TapEvent, TimestampPattern};
use crate::report::ReportError;
use retrace_core::util::CsvRecords;
use serde::Serialize;
use std::fmt::Display;

/// reasons a log record did not become a [`TapEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    FieldCount(usize),
    Timestamp,
    Station,
}

/// tallies of records read from a transaction log.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    pub parsed: usize,
    pub wrong_field_count: usize,
    pub unmatched_timestamp: usize,
    pub unmatched_station: usize,
}

impl ParseSummary {
    pub fn skipped(&self) -> usize {
        self.wrong_field_count + self.unmatched_timestamp + self.unmatched_station
    }

    fn add_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::FieldCount(_) => self.wrong_field_count += 1,
            SkipReason::Timestamp => self.unmatched_timestamp += 1,
            SkipReason::Station => self.unmatched_station += 1,
        }
    }
}

impl Display for ParseSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} taps parsed, {} records skipped (field count: {}, timestamp: {}, station: {})",
            self.parsed,
            self.skipped(),
            self.wrong_field_count,
            self.unmatched_timestamp,
            self.unmatched_station
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct TapLog {
    pub events: Vec<TapEvent>,
    pub summary: ParseSummary,
}

/// parses a Compass card transaction export into tap events. records that
/// are not taps (loads, the header row, refunds) are skipped and tallied.
#[derive(Debug, Clone)]
pub struct TapLogParser {
    timestamps: TimestampPattern,
    stations: StationMatchers,
}

impl TapLogParser {
    pub const FIELD_COUNT: usize = 14;
    const TIMESTAMP_FIELD: usize = 0;
    const DESCRIPTION_FIELD: usize = 1;
    const PRODUCT_FIELD: usize = 2;

    pub fn new(stations: StationMatchers) -> Result<TapLogParser, ReportError> {
        Ok(Self {
            timestamps: TimestampPattern::new()?,
            stations,
        })
    }

    pub fn translink() -> Result<TapLogParser, ReportError> {
        Self::new(StationMatchers::translink()?)
    }

    /// parses raw log bytes, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<TapLog, ReportError> {
        let contents = std::str::from_utf8(bytes)?;
        Ok(self.parse(contents))
    }

    pub fn parse(&self, contents: &str) -> TapLog {
        let mut log = TapLog::default();
        for (idx, record) in CsvRecords::new(contents).enumerate() {
            match self.parse_record(record) {
                Ok(event) => {
                    log.summary.parsed += 1;
                    log.events.push(event);
                }
                Err(reason) => {
                    log::debug!("skipping transaction log record {}: {:?}", idx + 1, reason);
                    log.summary.add_skip(reason);
                }
            }
        }
        log
    }

    /// parses a single record. fields are split on every comma; the export
    /// never quotes a comma inside the columns read here.
    pub fn parse_record(&self, record: &str) -> Result<TapEvent, SkipReason> {
        let record = record.trim_end_matches('\r');
        let fields = record.split(',').collect::<Vec<_>>();
        if fields.len() != Self::FIELD_COUNT {
            return Err(SkipReason::FieldCount(fields.len()));
        }
        let timestamp = self
            .timestamps
            .parse(fields[Self::TIMESTAMP_FIELD])
            .ok_or(SkipReason::Timestamp)?;
        let station = self
            .stations
            .extract(fields[Self::DESCRIPTION_FIELD])
            .ok_or(SkipReason::Station)?;
        Ok(TapEvent::new(
            timestamp,
            station.label,
            fields[Self::PRODUCT_FIELD].to_string(),
        ))
    }
}
