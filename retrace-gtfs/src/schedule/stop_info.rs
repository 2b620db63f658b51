use serde::{Deserialize, Serialize};

use crate::schedule::{
    table_ops::{table_rows, FieldCount},
    CatalogError,
};

/// a row of `stops.txt`, keyed elsewhere by the internal stop id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StopInfo {
    /// human-facing short identifier printed at the stop and used in fare logs
    pub code: String,
    pub name: String,
}

impl StopInfo {
    pub const TABLE: &'static str = "stops";
    pub const FILENAME: &'static str = "stops.txt";
    pub const MIN_FIELD_COUNT: usize = 3;

    /// reads the body of a stops table into (stop id, stop) pairs.
    ///
    /// consumed columns: id(0), code(1), name(2). any further columns are ignored.
    pub fn read_table(contents: &str) -> Result<Vec<(String, StopInfo)>, CatalogError> {
        let rows = table_rows(
            Self::TABLE,
            contents,
            FieldCount::AtLeast(Self::MIN_FIELD_COUNT),
        )?;
        let stops = rows
            .into_iter()
            .map(|row| {
                let f = &row.fields;
                let stop = StopInfo {
                    code: f[1].to_string(),
                    name: f[2].to_string(),
                };
                (f[0].to_string(), stop)
            })
            .collect();
        Ok(stops)
    }
}
