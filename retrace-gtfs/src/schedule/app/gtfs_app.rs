use super::GtfsOperation;
use clap::Parser;

/// command line tool for inspecting a GTFS schedule directory the way the tap
/// reports see it
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct GtfsApp {
    #[command(subcommand)]
    pub op: GtfsOperation,
}
