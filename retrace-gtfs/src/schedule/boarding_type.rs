use serde::{Deserialize, Serialize};

use crate::schedule::CatalogError;

/// the GTFS pickup_type / drop_off_type value of a stop time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BoardingType {
    /// "0", or an empty field
    #[default]
    Regular,
    /// "1": riders cannot board (pickup) or alight (drop off) here
    NotAvailable,
    /// "2"
    PhoneAgency,
    /// "3"
    CoordinateWithDriver,
}

impl BoardingType {
    pub fn parse(
        value: &str,
        table: &'static str,
        field: &'static str,
        line: usize,
    ) -> Result<BoardingType, CatalogError> {
        match value.trim() {
            "" | "0" => Ok(Self::Regular),
            "1" => Ok(Self::NotAvailable),
            "2" => Ok(Self::PhoneAgency),
            "3" => Ok(Self::CoordinateWithDriver),
            other => Err(CatalogError::InvalidFieldError {
                table,
                line,
                field,
                value: other.to_string(),
            }),
        }
    }

    pub fn is_available(&self) -> bool {
        *self != Self::NotAvailable
    }
}
