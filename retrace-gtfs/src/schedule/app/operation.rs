use std::path::Path;

use clap::Subcommand;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::schedule::{CatalogConfig, CatalogError, ScheduleCatalog};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum GtfsOperation {
    /// load a schedule directory and report the size of each table
    Summary {
        /// directory containing routes.txt, trips.txt, stops.txt and stop_times.txt
        #[arg(long)]
        schedule_directory: String,
    },
    /// print each stop code with the route numbers that serve it
    StopRoutes {
        #[arg(long)]
        schedule_directory: String,
        /// also count stop times where riders can only alight
        #[arg(long, default_value_t = false)]
        include_dropoff_only: bool,
        /// print only this stop code
        #[arg(long)]
        stop_code: Option<String>,
    },
}

impl GtfsOperation {
    pub fn run(&self) -> Result<(), CatalogError> {
        match self {
            GtfsOperation::Summary { schedule_directory } => {
                let catalog = ScheduleCatalog::try_from_directory(
                    Path::new(schedule_directory),
                    &CatalogConfig::default(),
                )?;
                println!("{schedule_directory}: {catalog}");
                Ok(())
            }
            GtfsOperation::StopRoutes {
                schedule_directory,
                include_dropoff_only,
                stop_code,
            } => {
                let config = CatalogConfig {
                    include_dropoff_only: *include_dropoff_only,
                };
                let catalog =
                    ScheduleCatalog::try_from_directory(Path::new(schedule_directory), &config)?;
                let names = catalog.stop_code_names();
                match stop_code {
                    Some(code) => {
                        let routes = catalog.stop_routes().get(code).ok_or_else(|| {
                            CatalogError::ConfigurationError(format!(
                                "stop code '{code}' is not served by any route"
                            ))
                        })?;
                        let name = names.get(code).map(String::as_str).unwrap_or_default();
                        println!("{code},\"{name}\",{}", routes.iter().join(" "));
                    }
                    None => {
                        println!("stop_code,stop_name,routes");
                        for (code, routes) in catalog.stop_routes().iter() {
                            let name = names.get(code).map(String::as_str).unwrap_or_default();
                            println!("{code},\"{name}\",{}", routes.iter().join(" "));
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
