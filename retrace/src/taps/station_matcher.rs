use regex::Regex;
use serde::Serialize;

/// the location shapes that identify a fare gate or bus stop, in priority order.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationShape {
    /// SkyTrain station names, e.g. "Commercial-Broadway Stn"
    StnSuffix,
    /// bus stop, the label is the numeric stop code
    BusStop,
    /// West Coast Express and similar, e.g. "Port Coquitlam Station"
    StationSuffix,
    /// SeaBus terminal without a suffix
    NamedStop,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StationMatch {
    pub shape: StationShape,
    pub label: String,
}

/// one anchored location pattern. the first capture group is the label.
#[derive(Debug, Clone)]
pub struct StationMatcher {
    shape: StationShape,
    pattern: Regex,
}

impl StationMatcher {
    pub fn new(shape: StationShape, pattern: &str) -> Result<StationMatcher, regex::Error> {
        Ok(Self {
            shape,
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn shape(&self) -> StationShape {
        self.shape
    }

    pub fn extract(&self, location: &str) -> Option<StationMatch> {
        let label = self.pattern.captures(location)?.get(1)?.as_str();
        Some(StationMatch {
            shape: self.shape,
            label: label.to_string(),
        })
    }
}

/// pulls the station label out of a transaction description such as
/// "Tap in at Bus Stop 60980". A location is the text following an " at ".
/// Locations are tried from the last " at " back to the first, and within a
/// location the matchers are tried in order; the first hit wins.
#[derive(Debug, Clone)]
pub struct StationMatchers {
    separator: Regex,
    matchers: Vec<StationMatcher>,
}

impl StationMatchers {
    const SEPARATOR_PATTERN: &'static str = r"\sat\s+";

    pub fn new(matchers: Vec<StationMatcher>) -> Result<StationMatchers, regex::Error> {
        Ok(Self {
            separator: Regex::new(Self::SEPARATOR_PATTERN)?,
            matchers,
        })
    }

    /// the four location shapes found in Compass card exports.
    pub fn translink() -> Result<StationMatchers, regex::Error> {
        Self::new(vec![
            StationMatcher::new(StationShape::StnSuffix, r"^(.*Stn)")?,
            StationMatcher::new(StationShape::BusStop, r"^Bus Stop\s(\d+)")?,
            StationMatcher::new(StationShape::StationSuffix, r"^(.*Station)")?,
            StationMatcher::new(StationShape::NamedStop, r"^(Lonsdale Quay)")?,
        ])
    }

    pub fn extract(&self, description: &str) -> Option<StationMatch> {
        let starts = self
            .separator
            .find_iter(description)
            .map(|m| m.end())
            .collect::<Vec<_>>();
        starts.into_iter().rev().find_map(|start| {
            let location = &description[start..];
            self.matchers.iter().find_map(|m| m.extract(location))
        })
    }
}

#[cfg(test)]
mod test {
    use super::{StationMatchers, StationShape};

    fn extract(description: &str) -> Option<(StationShape, String)> {
        let matchers = StationMatchers::translink().expect("patterns compile");
        matchers.extract(description).map(|m| (m.shape, m.label))
    }

    #[test]
    fn test_each_shape() {
        assert_eq!(
            extract("Tap in at Commercial-Broadway Stn"),
            Some((StationShape::StnSuffix, String::from("Commercial-Broadway Stn")))
        );
        assert_eq!(
            extract("Tap in at Bus Stop 60980"),
            Some((StationShape::BusStop, String::from("60980")))
        );
        assert_eq!(
            extract("Tap out at Port Coquitlam Station"),
            Some((StationShape::StationSuffix, String::from("Port Coquitlam Station")))
        );
        assert_eq!(
            extract("Tap in at Lonsdale Quay"),
            Some((StationShape::NamedStop, String::from("Lonsdale Quay")))
        );
    }

    #[test]
    fn test_first_shape_wins() {
        assert_eq!(
            extract("Tap in at Waterfront Station Stn"),
            Some((StationShape::StnSuffix, String::from("Waterfront Station Stn")))
        );
    }

    #[test]
    fn test_location_follows_last_at() {
        assert_eq!(
            extract("Transfer at Bus Stop at Joyce-Collingwood Stn"),
            Some((StationShape::StnSuffix, String::from("Joyce-Collingwood Stn")))
        );
    }

    #[test]
    fn test_earlier_at_used_when_last_has_no_station() {
        assert_eq!(
            extract("Tap in at Waterfront Stn at Gate 3"),
            Some((StationShape::StnSuffix, String::from("Waterfront Stn")))
        );
        assert_eq!(
            extract("Tap in at Bus Stop 51234 at Front Door"),
            Some((StationShape::BusStop, String::from("51234")))
        );
    }

    #[test]
    fn test_no_station() {
        assert_eq!(extract("Loaded at Web Order"), None);
        assert_eq!(extract("AutoLoaded"), None);
        assert_eq!(extract("Tap in at Bus Stop"), None);
    }
}
