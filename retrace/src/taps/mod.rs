mod station_matcher;
mod tap_event;
mod tap_log_parser;
mod timestamp;

pub use station_matcher::{StationMatch, StationMatcher, StationMatchers, StationShape};
pub use tap_event::TapEvent;
pub use tap_log_parser::{ParseSummary, SkipReason, TapLog, TapLogParser};
pub use timestamp::{month_number, to_24_hour, TimestampPattern};
