use super::RetraceOperation;
use clap::Parser;

/// renders bar chart reports from a Compass card transaction history export
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RetraceApp {
    #[command(subcommand)]
    pub op: RetraceOperation,
    /// TOML or JSON settings file. RETRACE_* environment variables override
    /// its values, e.g. RETRACE_FONT_FILE
    #[arg(long, global = true)]
    pub configuration_file: Option<String>,
}
