pub mod app;
mod boarding_type;
mod catalog;
mod catalog_config;
mod catalog_error;
mod route_info;
mod stop_info;
mod stop_routes;
mod stop_time;
mod table_ops;
mod trip_info;

pub use boarding_type::BoardingType;
pub use catalog::ScheduleCatalog;
pub use catalog_config::CatalogConfig;
pub use catalog_error::CatalogError;
pub use route_info::RouteInfo;
pub use stop_info::StopInfo;
pub use stop_routes::StopRoutesIndex;
pub use stop_time::StopTime;
pub use trip_info::TripInfo;
