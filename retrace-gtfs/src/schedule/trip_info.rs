use serde::{Deserialize, Serialize};

use crate::schedule::{
    table_ops::{table_rows, FieldCount},
    CatalogError,
};

/// a row of `trips.txt`, keyed elsewhere by trip id.
///
/// the headsign column is deliberately dropped: agencies fill it inconsistently,
/// and any display label for a trip comes from its stop times instead.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TripInfo {
    pub route_id: String,
    pub service_id: String,
    pub block_id: String,
    pub shape_id: String,
    pub direction: String,
    pub wheelchair_accessible: String,
    pub bikes_allowed: String,
}

impl TripInfo {
    pub const TABLE: &'static str = "trips";
    pub const FILENAME: &'static str = "trips.txt";
    pub const FIELD_COUNT: usize = 10;

    /// reads the body of a trips table into (trip id, trip) pairs.
    ///
    /// consumed columns: route id(0), service id(1), trip id(2), direction(5),
    /// block id(6), shape id(7), wheelchair(8), bike(9).
    pub fn read_table(contents: &str) -> Result<Vec<(String, TripInfo)>, CatalogError> {
        let rows = table_rows(Self::TABLE, contents, FieldCount::Exactly(Self::FIELD_COUNT))?;
        let trips = rows
            .into_iter()
            .map(|row| {
                let f = &row.fields;
                let trip = TripInfo {
                    route_id: f[0].to_string(),
                    service_id: f[1].to_string(),
                    direction: f[5].to_string(),
                    block_id: f[6].to_string(),
                    shape_id: f[7].to_string(),
                    wheelchair_accessible: f[8].to_string(),
                    bikes_allowed: f[9].to_string(),
                };
                (f[2].to_string(), trip)
            })
            .collect();
        Ok(trips)
    }
}

#[cfg(test)]
mod test {
    use super::TripInfo;

    #[test]
    fn test_read_trips_drops_headsign() {
        let contents = "route_id,service_id,trip_id,trip_headsign,trip_short_name,direction_id,block_id,shape_id,wheelchair_accessible,bikes_allowed\n\
                        6611,1,14094529,99 UBC B-Line,,0,366044,292384,1,1\n";
        let trips = TripInfo::read_table(contents).expect("valid trips table");
        let (id, trip) = &trips[0];
        assert_eq!(id, "14094529");
        assert_eq!(trip.route_id, "6611");
        assert_eq!(trip.service_id, "1");
        assert_eq!(trip.direction, "0");
        assert_eq!(trip.block_id, "366044");
        assert_eq!(trip.shape_id, "292384");
        assert_eq!(trip.wheelchair_accessible, "1");
        assert_eq!(trip.bikes_allowed, "1");
    }
}
