use kdam::tqdm;
use serde::{Deserialize, Serialize};

use crate::schedule::{
    table_ops::{table_rows, FieldCount},
    BoardingType, CatalogError,
};

/// a row of `stop_times.txt`. rows are kept in file order and are neither
/// deduplicated nor indexed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopTime {
    /// the 1-based record number this row was read from
    pub line: usize,
    /// foreign key into the trips table
    pub trip_id: String,
    pub arrival_time: String,
    pub departure_time: String,
    /// foreign key into the stops table (internal id, not the stop code)
    pub stop_id: String,
    pub stop_sequence: u32,
    pub pickup_type: BoardingType,
    pub drop_off_type: BoardingType,
    pub shape_dist_traveled: Option<f64>,
}

impl StopTime {
    pub const TABLE: &'static str = "stop_times";
    pub const FILENAME: &'static str = "stop_times.txt";
    pub const FIELD_COUNT: usize = 9;

    /// true when riders may alight here but not board.
    pub fn is_dropoff_only(&self) -> bool {
        !self.pickup_type.is_available() && self.drop_off_type.is_available()
    }

    /// reads the body of a stop_times table.
    ///
    /// consumed columns: trip id(0), arrival(1), departure(2), stop id(3),
    /// sequence(4), pickup(6), dropoff(7), distance(8).
    pub fn read_table(contents: &str) -> Result<Vec<StopTime>, CatalogError> {
        let rows = table_rows(Self::TABLE, contents, FieldCount::Exactly(Self::FIELD_COUNT))?;
        tqdm!(rows.into_iter(), desc = String::from("reading stop_times"))
            .map(|row| {
                let f = &row.fields;
                let line = row.line;
                let stop_sequence = f[4].trim().parse::<u32>().map_err(|_| {
                    CatalogError::InvalidFieldError {
                        table: Self::TABLE,
                        line,
                        field: "stop_sequence",
                        value: f[4].to_string(),
                    }
                })?;
                let shape_dist_traveled = match f[8].trim() {
                    "" => None,
                    d => Some(d.parse::<f64>().map_err(|_| CatalogError::InvalidFieldError {
                        table: Self::TABLE,
                        line,
                        field: "shape_dist_traveled",
                        value: d.to_string(),
                    })?),
                };
                Ok(StopTime {
                    line,
                    trip_id: f[0].to_string(),
                    arrival_time: f[1].to_string(),
                    departure_time: f[2].to_string(),
                    stop_id: f[3].to_string(),
                    stop_sequence,
                    pickup_type: BoardingType::parse(f[6], Self::TABLE, "pickup_type", line)?,
                    drop_off_type: BoardingType::parse(f[7], Self::TABLE, "drop_off_type", line)?,
                    shape_dist_traveled,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()
    }
}
