use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// resolves a three-letter month abbreviation to its number, 1-based.
pub fn month_number(abbreviation: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == abbreviation)
        .map(|idx| idx as u32 + 1)
}

/// converts a 12-hour clock hour (1-12) to 24-hour time. 12 AM is hour 0 and
/// 12 PM is hour 12.
pub fn to_24_hour(hour_12: u32, is_pm: bool) -> Option<u32> {
    if !(1..=12).contains(&hour_12) {
        return None;
    }
    let hour = hour_12 % 12;
    Some(if is_pm { hour + 12 } else { hour })
}

/// matches the export's timestamp column, e.g. `Mar-12-2024 03:04 AM`.
#[derive(Debug, Clone)]
pub struct TimestampPattern(Regex);

impl TimestampPattern {
    const PATTERN: &'static str = r"^(\w{3})-(\d\d)-(\d{4})\s(\d\d):(\d\d) ([AP])M";

    pub fn new() -> Result<TimestampPattern, regex::Error> {
        Ok(Self(Regex::new(Self::PATTERN)?))
    }

    /// parses a timestamp field. returns None if the field does not match the
    /// pattern or names an impossible date or time.
    pub fn parse(&self, field: &str) -> Option<NaiveDateTime> {
        let caps = self.0.captures(field)?;
        let month = month_number(&caps[1])?;
        let day = caps[2].parse::<u32>().ok()?;
        let year = caps[3].parse::<i32>().ok()?;
        let hour_12 = caps[4].parse::<u32>().ok()?;
        let minute = caps[5].parse::<u32>().ok()?;
        let hour = to_24_hour(hour_12, &caps[6] == "P")?;
        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
    }
}

#[cfg(test)]
mod test {
    use super::{month_number, to_24_hour, TimestampPattern};
    use chrono::{NaiveDate, NaiveDateTime};

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .expect("test invariant failed: invalid datetime")
    }

    #[test]
    fn test_midnight_and_noon() {
        let pattern = TimestampPattern::new().expect("pattern compiles");
        assert_eq!(
            pattern.parse("Jan-05-2024 12:15 AM"),
            Some(datetime(2024, 1, 5, 0, 15))
        );
        assert_eq!(
            pattern.parse("Jan-05-2024 12:15 PM"),
            Some(datetime(2024, 1, 5, 12, 15))
        );
        assert_eq!(
            pattern.parse("Jan-05-2024 01:15 PM"),
            Some(datetime(2024, 1, 5, 13, 15))
        );
        assert_eq!(
            pattern.parse("Mar-12-2024 03:04 AM"),
            Some(datetime(2024, 3, 12, 3, 4))
        );
    }

    #[test]
    fn test_rejects_malformed_fields() {
        let pattern = TimestampPattern::new().expect("pattern compiles");
        assert_eq!(pattern.parse("DateTime"), None);
        assert_eq!(pattern.parse("2024-01-05 12:15"), None);
        assert_eq!(pattern.parse("Foo-05-2024 12:15 PM"), None);
        assert_eq!(pattern.parse("Feb-30-2024 10:00 AM"), None);
        assert_eq!(pattern.parse("Jan-05-2024 13:15 PM"), None);
        assert_eq!(pattern.parse("Jan-05-2024 00:15 AM"), None);
    }

    #[test]
    fn test_month_table() {
        assert_eq!(month_number("Jan"), Some(1));
        assert_eq!(month_number("Dec"), Some(12));
        assert_eq!(month_number("jan"), None);
    }

    #[test]
    fn test_to_24_hour() {
        assert_eq!(to_24_hour(12, false), Some(0));
        assert_eq!(to_24_hour(12, true), Some(12));
        assert_eq!(to_24_hour(11, true), Some(23));
        assert_eq!(to_24_hour(1, false), Some(1));
        assert_eq!(to_24_hour(0, false), None);
    }
}
