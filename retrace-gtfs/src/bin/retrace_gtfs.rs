//! inspects a GTFS schedule directory: table sizes, and the stop code → route
//! numbers index used to badge tap reports.
use clap::Parser;
use retrace_gtfs::schedule::app::GtfsApp;

fn main() {
    env_logger::init();
    let args = GtfsApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("retrace-gtfs failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
