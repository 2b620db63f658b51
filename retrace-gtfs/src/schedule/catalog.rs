use std::{collections::HashMap, fmt::Display, path::Path};

use crate::schedule::{
    CatalogConfig, CatalogError, RouteInfo, StopInfo, StopRoutesIndex, StopTime, TripInfo,
};

/// the static schedule of one transit system: four linked GTFS tables plus the
/// derived stop code → serving routes index.
///
/// a catalog is built once and never mutated afterward, so it can be shared
/// (typically behind an `Arc`) by any number of concurrent report requests.
#[derive(Debug, Clone, Default)]
pub struct ScheduleCatalog {
    routes: HashMap<String, RouteInfo>,
    trips: HashMap<String, TripInfo>,
    stops: HashMap<String, StopInfo>,
    stop_code_names: HashMap<String, String>,
    stop_times: Vec<StopTime>,
    stop_routes: StopRoutesIndex,
}

impl ScheduleCatalog {
    /// a catalog with no schedule data. reports built against it label stops by
    /// their raw codes and draw no route badges.
    pub fn empty() -> ScheduleCatalog {
        Self::default()
    }

    /// assembles a catalog from parsed tables, validating every foreign key.
    pub fn try_new(
        routes: HashMap<String, RouteInfo>,
        trips: HashMap<String, TripInfo>,
        stops: HashMap<String, StopInfo>,
        stop_times: Vec<StopTime>,
        config: &CatalogConfig,
    ) -> Result<ScheduleCatalog, CatalogError> {
        let stop_routes = StopRoutesIndex::build(
            &routes,
            &trips,
            &stops,
            &stop_times,
            config.include_dropoff_only,
        )?;
        let stop_code_names = stops
            .values()
            .map(|stop| (stop.code.clone(), stop.name.clone()))
            .collect();
        Ok(Self {
            routes,
            trips,
            stops,
            stop_code_names,
            stop_times,
            stop_routes,
        })
    }

    /// parses the text of the four schedule tables. each table's first record
    /// is a header and is discarded.
    pub fn from_tables(
        routes: &str,
        trips: &str,
        stops: &str,
        stop_times: &str,
        config: &CatalogConfig,
    ) -> Result<ScheduleCatalog, CatalogError> {
        let routes: HashMap<_, _> = RouteInfo::read_table(routes)?.into_iter().collect();
        log::info!("read {} rows from {}", routes.len(), RouteInfo::TABLE);
        let trips: HashMap<_, _> = TripInfo::read_table(trips)?.into_iter().collect();
        log::info!("read {} rows from {}", trips.len(), TripInfo::TABLE);
        let stops: HashMap<_, _> = StopInfo::read_table(stops)?.into_iter().collect();
        log::info!("read {} rows from {}", stops.len(), StopInfo::TABLE);
        let stop_times = StopTime::read_table(stop_times)?;
        log::info!("read {} rows from {}", stop_times.len(), StopTime::TABLE);
        Self::try_new(routes, trips, stops, stop_times, config)
    }

    /// reads `routes.txt`, `trips.txt`, `stops.txt` and `stop_times.txt` from a
    /// GTFS directory.
    pub fn try_from_directory(
        directory: &Path,
        config: &CatalogConfig,
    ) -> Result<ScheduleCatalog, CatalogError> {
        log::info!("reading gtfs data: {}", directory.display());
        let routes = read_table_file(directory, RouteInfo::FILENAME)?;
        let trips = read_table_file(directory, TripInfo::FILENAME)?;
        let stops = read_table_file(directory, StopInfo::FILENAME)?;
        let stop_times = read_table_file(directory, StopTime::FILENAME)?;
        let catalog = Self::from_tables(&routes, &trips, &stops, &stop_times, config)?;
        log::info!(
            "finished reading gtfs data in {}: {catalog}",
            directory.display()
        );
        Ok(catalog)
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
            && self.trips.is_empty()
            && self.stops.is_empty()
            && self.stop_times.is_empty()
    }

    pub fn routes(&self) -> &HashMap<String, RouteInfo> {
        &self.routes
    }

    pub fn trips(&self) -> &HashMap<String, TripInfo> {
        &self.trips
    }

    /// stops by internal stop id
    pub fn stops(&self) -> &HashMap<String, StopInfo> {
        &self.stops
    }

    /// stop names by stop code, the key used by fare logs
    pub fn stop_code_names(&self) -> &HashMap<String, String> {
        &self.stop_code_names
    }

    pub fn stop_times(&self) -> &[StopTime] {
        &self.stop_times
    }

    /// the stop code → routes index built with this catalog's configuration
    pub fn stop_routes(&self) -> &StopRoutesIndex {
        &self.stop_routes
    }

    /// builds a stop code → routes index with a different dropoff-only policy
    /// than the one this catalog was configured with.
    pub fn build_stop_routes(
        &self,
        include_dropoff_only: bool,
    ) -> Result<StopRoutesIndex, CatalogError> {
        StopRoutesIndex::build(
            &self.routes,
            &self.trips,
            &self.stops,
            &self.stop_times,
            include_dropoff_only,
        )
    }
}

impl Display for ScheduleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} routes, {} trips, {} stops, {} stop times, {} indexed stop codes",
            self.routes.len(),
            self.trips.len(),
            self.stops.len(),
            self.stop_times.len(),
            self.stop_routes.len()
        )
    }
}

fn read_table_file(directory: &Path, filename: &str) -> Result<String, CatalogError> {
    let path = directory.join(filename);
    log::debug!("reading {}", path.display());
    std::fs::read_to_string(&path).map_err(|source| CatalogError::FileReadError { path, source })
}

#[cfg(test)]
mod test {
    use super::ScheduleCatalog;
    use crate::schedule::{CatalogConfig, CatalogError};
    use std::fs;

    const ROUTES: &str = "route_id,agency_id,route_short_name,route_long_name,route_desc,route_type,route_url,route_color,route_text_color\n\
        r99,CMBC,99,Commercial-Broadway/UBC,,3,,F46524,FFFFFF\n\
        rN8,CMBC,N8,Downtown/Fraser Night Bus,,3,,000C42,FFFFFF\n";
    const TRIPS: &str = "route_id,service_id,trip_id,trip_headsign,trip_short_name,direction_id,block_id,shape_id,wheelchair_accessible,bikes_allowed\n\
        r99,1,t1,99 UBC,,0,b1,sh1,1,1\n\
        rN8,1,t2,N8 Downtown,,1,b2,sh2,1,1\n";
    const STOPS: &str = "stop_id,stop_code,stop_name,stop_desc,stop_lat,stop_lon\n\
        s1,50001,Commercial-Broadway Stn Bay 1,,49.26,-123.07\n\
        s2,50002,UBC Exchange Bay 7,,49.26,-123.24\n";
    const STOP_TIMES: &str = "trip_id,arrival_time,departure_time,stop_id,stop_sequence,stop_headsign,pickup_type,drop_off_type,shape_dist_traveled\n\
        t1,05:00:00,05:00:00,s1,1,,0,1,\n\
        t1,05:30:00,05:30:00,s2,2,,1,0,11.2\n\
        t2,01:00:00,01:00:00,s1,1,,1,0,\n";

    #[test]
    fn test_from_tables() {
        let catalog =
            ScheduleCatalog::from_tables(ROUTES, TRIPS, STOPS, STOP_TIMES, &CatalogConfig::default())
                .expect("fixture tables are consistent");
        assert_eq!(catalog.routes().len(), 2);
        assert_eq!(catalog.trips().len(), 2);
        assert_eq!(catalog.stops().len(), 2);
        assert_eq!(catalog.stop_times().len(), 3);
        assert_eq!(
            catalog.stop_code_names().get("50002").map(String::as_str),
            Some("UBC Exchange Bay 7")
        );
        assert_eq!(catalog.stop_routes().get("50001"), Some(&[String::from("99")][..]));
        assert!(!catalog.stop_routes().contains("50002"));
    }

    #[test]
    fn test_configured_dropoff_only_policy() {
        let config = CatalogConfig {
            include_dropoff_only: true,
        };
        let catalog = ScheduleCatalog::from_tables(ROUTES, TRIPS, STOPS, STOP_TIMES, &config)
            .expect("fixture tables are consistent");
        let expected = vec![String::from("99"), String::from("N8")];
        assert_eq!(catalog.stop_routes().get("50001"), Some(expected.as_slice()));
        assert_eq!(catalog.stop_routes().get("50002"), Some(&[String::from("99")][..]));

        let strict = catalog
            .build_stop_routes(false)
            .expect("fixture tables are consistent");
        assert_eq!(strict.get("50001"), Some(&[String::from("99")][..]));
    }

    #[test]
    fn test_integrity_fault_aborts_construction() {
        let stop_times = format!("{STOP_TIMES}t9,02:00:00,02:00:00,s1,1,,0,0,\n");
        let result =
            ScheduleCatalog::from_tables(ROUTES, TRIPS, STOPS, &stop_times, &CatalogConfig::default());
        assert!(matches!(
            result,
            Err(CatalogError::UnknownTripError { line: 5, .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ScheduleCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.stop_routes().is_empty());
        assert!(catalog.stop_code_names().is_empty());
    }

    #[test]
    fn test_try_from_directory() {
        let dir = tempfile::tempdir().expect("could not create temp dir");
        fs::write(dir.path().join("routes.txt"), ROUTES).expect("write routes");
        fs::write(dir.path().join("trips.txt"), TRIPS).expect("write trips");
        fs::write(dir.path().join("stops.txt"), STOPS).expect("write stops");
        fs::write(dir.path().join("stop_times.txt"), STOP_TIMES).expect("write stop_times");
        let catalog = ScheduleCatalog::try_from_directory(dir.path(), &CatalogConfig::default())
            .expect("directory holds a consistent schedule");
        assert_eq!(catalog.stop_times().len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().expect("could not create temp dir");
        let result = ScheduleCatalog::try_from_directory(dir.path(), &CatalogConfig::default());
        assert!(matches!(result, Err(CatalogError::FileReadError { .. })));
    }
}
