use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::schedule::{CatalogError, RouteInfo, StopInfo, StopTime, TripInfo};

/// maps a stop code to the route numbers serving it, sorted ascending and
/// without duplicates.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StopRoutesIndex(BTreeMap<String, Vec<String>>);

impl StopRoutesIndex {
    /// builds the index by walking every stop time through trip → route and
    /// stop id → stop code.
    ///
    /// every foreign key is resolved, including those of dropoff-only stop times
    /// that are left out of the index, so a corrupt table always fails here.
    pub fn build(
        routes: &HashMap<String, RouteInfo>,
        trips: &HashMap<String, TripInfo>,
        stops: &HashMap<String, StopInfo>,
        stop_times: &[StopTime],
        include_dropoff_only: bool,
    ) -> Result<StopRoutesIndex, CatalogError> {
        let mut serving: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for stop_time in stop_times.iter() {
            let stop = stops
                .get(&stop_time.stop_id)
                .ok_or_else(|| CatalogError::UnknownStopError {
                    line: stop_time.line,
                    stop_id: stop_time.stop_id.clone(),
                })?;
            let trip = trips
                .get(&stop_time.trip_id)
                .ok_or_else(|| CatalogError::UnknownTripError {
                    line: stop_time.line,
                    trip_id: stop_time.trip_id.clone(),
                })?;
            let route =
                routes
                    .get(&trip.route_id)
                    .ok_or_else(|| CatalogError::UnknownRouteError {
                        trip_id: stop_time.trip_id.clone(),
                        route_id: trip.route_id.clone(),
                    })?;

            if include_dropoff_only || !stop_time.is_dropoff_only() {
                serving
                    .entry(stop.code.clone())
                    .or_default()
                    .insert(route.number.clone());
            }
        }
        let index = serving
            .into_iter()
            .map(|(code, numbers)| (code, numbers.into_iter().collect()))
            .collect();
        Ok(StopRoutesIndex(index))
    }

    /// route numbers serving this stop code, if any.
    pub fn get(&self, stop_code: &str) -> Option<&[String]> {
        self.0.get(stop_code).map(|v| v.as_slice())
    }

    pub fn contains(&self, stop_code: &str) -> bool {
        self.0.contains_key(stop_code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}
