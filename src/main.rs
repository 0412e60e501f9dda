//! CLI entry point for the dispatch reporter.
//!
//! Provides subcommands for generating the per-tier pay report from a raw
//! scan export, and for inspecting an export's shape before committing to a
//! run.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dispatch_reporter::{
    engine,
    fetch::load_source,
    output::{self, ReportSummary},
    parser::parse_table,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "dispatch_reporter")]
#[command(about = "A tool to aggregate raw delivery scans into driver pay reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the per-tier pay report from a scan export
    Report {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Directory to write the report CSVs into
        #[arg(short, long, default_value = "reports")]
        output_dir: PathBuf,
    },
    /// Check an export's shape without writing a report
    Inspect {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Number of data rows to preview
        #[arg(short, long, default_value_t = 5)]
        rows: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/dispatch_reporter.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("dispatch_reporter.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { source, output_dir } => {
            let bytes = load_source(&source).await?;
            let table = parse_table(&bytes)?;
            let report = engine::process(&table)?;

            let files = output::write_report(&output_dir, &report)?;
            let summary = ReportSummary::new(&report, files);
            output::print_pretty(&summary);
            output::print_json(&summary)?;
        }
        Commands::Inspect { source, rows } => {
            inspect(&source, rows).await?;
        }
    }

    Ok(())
}

/// Logs an export's dimensions, its schema verdict, and the first rows.
#[tracing::instrument]
async fn inspect(source: &str, rows: usize) -> Result<()> {
    let bytes = load_source(source).await?;
    let table = parse_table(&bytes)?;

    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "export parsed"
    );

    let missing = engine::schema::missing_columns(&table);
    if missing.is_empty() {
        info!("all required columns present");
    } else {
        warn!(missing = ?missing, "required columns missing");
    }

    for record in table.records().iter().take(rows) {
        let fields: Vec<&str> = record.iter().collect();
        info!(row = %fields.join(","), "preview");
    }

    Ok(())
}
