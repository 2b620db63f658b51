//! renders stop, month and hour reports from a Compass card transaction
//! history export.
use clap::Parser;
use retrace::{app::RetraceApp, config::RetraceConfig};

fn main() {
    env_logger::init();
    let args = RetraceApp::parse();
    let result = RetraceConfig::load(args.configuration_file.as_ref())
        .and_then(|config| args.op.run(&config));
    if let Err(e) = result {
        log::error!("retrace failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
