use serde::{Deserialize, Serialize};

use crate::schedule::{
    table_ops::{table_rows, FieldCount},
    CatalogError,
};

/// a row of `routes.txt`. the route id is the key of the routes table and is not
/// repeated here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    /// public-facing route number (`route_short_name`), used for route badges
    pub number: String,
    /// `route_long_name`
    pub name: String,
    /// GTFS `route_type` code
    pub route_type: String,
    /// hex colour without a leading `#`
    pub colour: String,
    pub text_colour: String,
}

impl RouteInfo {
    pub const TABLE: &'static str = "routes";
    pub const FILENAME: &'static str = "routes.txt";
    pub const FIELD_COUNT: usize = 9;

    /// reads the body of a routes table into (route id, route) pairs.
    ///
    /// consumed columns: id(0), number(2), name(3), type(5), colour(7), text colour(8).
    pub fn read_table(contents: &str) -> Result<Vec<(String, RouteInfo)>, CatalogError> {
        let rows = table_rows(Self::TABLE, contents, FieldCount::Exactly(Self::FIELD_COUNT))?;
        let routes = rows
            .into_iter()
            .map(|row| {
                let f = &row.fields;
                let route = RouteInfo {
                    number: f[2].to_string(),
                    name: f[3].to_string(),
                    route_type: f[5].to_string(),
                    colour: f[7].to_string(),
                    text_colour: f[8].to_string(),
                };
                (f[0].to_string(), route)
            })
            .collect();
        Ok(routes)
    }
}
