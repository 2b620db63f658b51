use crate::aggregate::CountEntry;
use crate::config::RetraceConfig;
use crate::report::{render_text_table, ReportError, ReportKind, ReportOptions};
use crate::service::ReportService;
use clap::{Subcommand, ValueEnum};
use itertools::Itertools;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum RetraceOperation {
    /// most used stations and bus stops, as a PNG bar chart
    Stops {
        /// transaction history CSV exported from a Compass card account
        #[arg(long)]
        log_file: String,
        #[arg(long, default_value_t = String::from("out.png"))]
        output: String,
        /// number of stops to draw
        #[arg(long, default_value_t = 14)]
        rows: usize,
        /// image width in pixels
        #[arg(long, default_value_t = 1000)]
        width: u32,
    },
    /// taps per calendar month, as a PNG bar chart
    Months {
        #[arg(long)]
        log_file: String,
        #[arg(long, default_value_t = String::from("out.png"))]
        output: String,
        #[arg(long, default_value_t = 800)]
        width: u32,
    },
    /// taps per hour of day, as a PNG bar chart
    Hours {
        #[arg(long)]
        log_file: String,
        #[arg(long, default_value_t = String::from("out.png"))]
        output: String,
        #[arg(long, default_value_t = 800)]
        width: u32,
    },
    /// print ranked counts to stdout
    Counts {
        #[arg(long)]
        log_file: String,
        #[arg(long, value_enum, default_value_t = ReportKind::Stops)]
        kind: ReportKind,
        #[arg(long, value_enum, default_value_t = CountFormat::Text)]
        format: CountFormat,
        /// label column width of the text table
        #[arg(long, default_value_t = 30)]
        label_width: usize,
    },
    /// render a stop report for each of several logs in parallel
    Batch {
        #[arg(long, num_args = 1.., required = true)]
        log_files: Vec<String>,
        /// reports are written here as <log file stem>.png
        #[arg(long)]
        output_directory: String,
        #[arg(long, default_value_t = 14)]
        rows: usize,
        #[arg(long, default_value_t = 1000)]
        width: u32,
        /// worker threads, defaults to one per core
        #[arg(long)]
        parallelism: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CountFormat {
    Text,
    Json,
    Csv,
}

/// one ranked count as written by `counts --format json|csv`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountRow {
    pub rank: usize,
    pub key: String,
    pub label: String,
    pub count: u64,
}

impl RetraceOperation {
    pub fn run(&self, config: &RetraceConfig) -> Result<(), ReportError> {
        let service = ReportService::try_from_config(config)?;
        match self {
            RetraceOperation::Stops {
                log_file,
                output,
                rows,
                width,
            } => {
                let options = ReportOptions {
                    rows: *rows,
                    width: *width,
                    ..ReportKind::Stops.default_options(*rows)
                };
                write_report(&service, log_file, output, ReportKind::Stops, &options)
            }
            RetraceOperation::Months {
                log_file,
                output,
                width,
            } => {
                // every month in the log gets a row
                let options = ReportOptions {
                    width: *width,
                    ..ReportKind::Months.default_options(usize::MAX)
                };
                write_report(&service, log_file, output, ReportKind::Months, &options)
            }
            RetraceOperation::Hours {
                log_file,
                output,
                width,
            } => {
                let options = ReportOptions {
                    width: *width,
                    ..ReportKind::Hours.default_options(24)
                };
                write_report(&service, log_file, output, ReportKind::Hours, &options)
            }
            RetraceOperation::Counts {
                log_file,
                kind,
                format,
                label_width,
            } => {
                let bytes = read_log(log_file)?;
                let (log, _, entries) = service.ranked_counts(&bytes, *kind)?;
                log::info!("{log_file}: {}", log.summary);
                let no_labels = HashMap::new();
                let labels = service.labels(*kind).unwrap_or(&no_labels);
                print_counts(&entries, labels, *format, *label_width)
            }
            RetraceOperation::Batch {
                log_files,
                output_directory,
                rows,
                width,
                parallelism,
            } => {
                let options = ReportOptions {
                    rows: *rows,
                    width: *width,
                    ..ReportKind::Stops.default_options(*rows)
                };
                run_batch(
                    &service,
                    log_files,
                    Path::new(output_directory),
                    &options,
                    *parallelism,
                )
            }
        }
    }
}

fn read_log(log_file: &str) -> Result<Vec<u8>, ReportError> {
    std::fs::read(log_file).map_err(|source| ReportError::LogReadError {
        path: log_file.to_string(),
        source,
    })
}

fn write_report(
    service: &ReportService,
    log_file: &str,
    output: &str,
    kind: ReportKind,
    options: &ReportOptions,
) -> Result<(), ReportError> {
    let bytes = read_log(log_file)?;
    let png = service.render_png(&bytes, kind, Some(options))?;
    std::fs::write(output, png)?;
    log::info!("wrote {kind:?} report for {log_file} to {output}");
    Ok(())
}

fn count_rows(entries: &[CountEntry], labels: &HashMap<String, String>) -> Vec<CountRow> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let key = entry.key.to_string();
            let label = labels.get(&key).cloned().unwrap_or_else(|| key.clone());
            CountRow {
                rank: idx + 1,
                key,
                label,
                count: entry.count,
            }
        })
        .collect()
}

fn print_counts(
    entries: &[CountEntry],
    labels: &HashMap<String, String>,
    format: CountFormat,
    label_width: usize,
) -> Result<(), ReportError> {
    match format {
        CountFormat::Text => {
            println!("{}", render_text_table(entries, labels, label_width));
        }
        CountFormat::Json => {
            let rows = count_rows(entries, labels);
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        CountFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for row in count_rows(entries, labels) {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// output path for a log file: `<output_directory>/<log file stem>.png`
fn batch_output_path(output_directory: &Path, log_file: &str) -> PathBuf {
    let stem = Path::new(log_file)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from("report"));
    output_directory.join(format!("{stem}.png"))
}

fn run_batch(
    service: &ReportService,
    log_files: &[String],
    output_directory: &Path,
    options: &ReportOptions,
    parallelism: Option<usize>,
) -> Result<(), ReportError> {
    std::fs::create_dir_all(output_directory)?;
    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(n) = parallelism {
        pool = pool.num_threads(n);
    }
    let pool = pool
        .build()
        .map_err(|e| ReportError::BatchError(format!("failure building worker pool: {e}")))?;
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("stop reports")
            .total(log_files.len())
            .build()
            .map_err(ReportError::BatchError)?,
    ));

    let results = pool.install(|| {
        log_files
            .par_iter()
            .map(|log_file| {
                let output = batch_output_path(output_directory, log_file);
                let result = read_log(log_file)
                    .and_then(|bytes| service.stop_report(&bytes, Some(options)))
                    .and_then(|png| std::fs::write(&output, png).map_err(ReportError::from));
                if let Ok(mut bar) = bar.lock() {
                    let _ = bar.update(1);
                }
                (log_file, result)
            })
            .collect::<Vec<_>>()
    });
    eprintln!();

    let failures = results
        .into_iter()
        .filter_map(|(log_file, result)| match result {
            Ok(()) => None,
            Err(e) => {
                log::error!("{log_file}: {e}");
                Some(log_file)
            }
        })
        .collect::<Vec<_>>();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(ReportError::BatchError(format!(
            "{} of {} reports failed: {}",
            failures.len(),
            log_files.len(),
            failures.iter().join(", ")
        )))
    }
}
