use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// rapid transit lines drawn as icons next to the stations they serve.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkLine {
    Expo,
    Millennium,
    Canada,
    WestCoastExpress,
    SeaBus,
}

const EXPO: &[NetworkLine] = &[NetworkLine::Expo];
const MILLENNIUM: &[NetworkLine] = &[NetworkLine::Millennium];
const CANADA: &[NetworkLine] = &[NetworkLine::Canada];
const WCE: &[NetworkLine] = &[NetworkLine::WestCoastExpress];
const SEABUS: &[NetworkLine] = &[NetworkLine::SeaBus];
const EXPO_MILLENNIUM: &[NetworkLine] = &[NetworkLine::Expo, NetworkLine::Millennium];
const MILLENNIUM_WCE: &[NetworkLine] = &[NetworkLine::Millennium, NetworkLine::WestCoastExpress];
const WATERFRONT: &[NetworkLine] = &[
    NetworkLine::Expo,
    NetworkLine::Canada,
    NetworkLine::WestCoastExpress,
    NetworkLine::SeaBus,
];

const STATION_LINES: &[(&str, &[NetworkLine])] = &[
    ("Lougheed Stn", EXPO_MILLENNIUM),
    ("Production Way Stn", EXPO_MILLENNIUM),
    ("Braid Stn", EXPO),
    ("Sapperton Stn", EXPO),
    ("Columbia Stn", EXPO),
    ("New Westminster Stn", EXPO),
    ("22nd St Stn", EXPO),
    ("Edmonds Stn", EXPO),
    ("Royal Oak Stn", EXPO),
    ("Metrotown Stn", EXPO),
    ("Patterson Stn", EXPO),
    ("Joyce Stn", EXPO),
    ("29th Av Stn", EXPO),
    ("Nanaimo Stn", EXPO),
    ("Commercial-Broadway Stn", EXPO_MILLENNIUM),
    ("Main Street-Science World Stn", EXPO),
    ("Stadium Stn", EXPO),
    ("Granville Stn", EXPO),
    ("Burrard Stn", EXPO),
    ("Waterfront Stn", WATERFRONT),
    ("King George Stn", EXPO),
    ("Surrey Central Stn", EXPO),
    ("Gateway Stn", EXPO),
    ("Scott Road Stn", EXPO),
    ("Lafarge Lake/Douglas College Stn", MILLENNIUM),
    ("Lincoln Stn", MILLENNIUM),
    ("Coquitlam Central Stn", MILLENNIUM_WCE),
    ("Inlet Centre Stn", MILLENNIUM),
    ("Moody Centre Stn", MILLENNIUM_WCE),
    ("Burquitlam Stn", MILLENNIUM),
    ("Lake City Way Stn", MILLENNIUM),
    ("Sperling Stn", MILLENNIUM),
    ("Holdom Stn", MILLENNIUM),
    ("Brentwood Stn", MILLENNIUM),
    ("Gilmore Stn", MILLENNIUM),
    ("Rupert Stn", MILLENNIUM),
    ("Renfrew Stn", MILLENNIUM),
    ("VCC-Clark Stn", MILLENNIUM),
    ("Brighouse Stn", CANADA),
    ("Aberdeen Stn", CANADA),
    ("Lansdowne Stn", CANADA),
    ("Capstan Stn", CANADA),
    ("Bridgeport Stn", CANADA),
    ("Marine Drive Stn", CANADA),
    ("Langara-49th Stn", CANADA),
    ("Oakridge-41st Stn", CANADA),
    ("King Edward Stn", CANADA),
    ("Broadway-City Hall Stn", CANADA),
    ("Olympic Village Stn", CANADA),
    ("Yaletown-Roundhouse Stn", CANADA),
    ("Vancouver City Centre Stn", CANADA),
    ("YVR-Airport Stn", CANADA),
    ("Sea Island Ctr Stn", CANADA),
    ("Templeton Stn", CANADA),
    ("Lonsdale Quay", SEABUS),
    ("Port Coquitlam Stn", WCE),
    ("Pitt Meadows Stn", WCE),
    ("Maple Meadows Stn", WCE),
    ("Port Haney Stn", WCE),
    ("Mission City Stn", WCE),
];

impl NetworkLine {
    pub const ALL: [NetworkLine; 5] = [
        NetworkLine::Expo,
        NetworkLine::Millennium,
        NetworkLine::Canada,
        NetworkLine::WestCoastExpress,
        NetworkLine::SeaBus,
    ];

    /// short key, also the icon file stem
    pub fn key(&self) -> &'static str {
        match self {
            NetworkLine::Expo => "expo",
            NetworkLine::Millennium => "mil",
            NetworkLine::Canada => "canada",
            NetworkLine::WestCoastExpress => "wce",
            NetworkLine::SeaBus => "seabus",
        }
    }

    pub fn icon_filename(&self) -> String {
        format!("{}.png", self.key())
    }

    /// lines serving a station display name, in drawing order
    pub fn for_station(station_name: &str) -> Option<&'static [NetworkLine]> {
        STATION_LINES
            .iter()
            .find(|(name, _)| *name == station_name)
            .map(|(_, lines)| *lines)
    }
}

impl Display for NetworkLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
