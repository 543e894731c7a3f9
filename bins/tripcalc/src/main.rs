//! tripcalc - trip distance, fuel and cost calculator
//!
//! Reads a travel sheet export, computes distance, duration, fuel volume and
//! cost for every row, and writes the results back next to the source columns.

use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tripcalc_core::config::Config;
use tripcalc_core::{Error, ErrorCode};

mod commands;
mod input;

/// Trip distance, fuel and cost calculator
#[derive(Parser)]
#[command(name = "tripcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a configuration file
    #[arg(short, long, global = true, env = "TRIPCALC_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every row of a travel sheet
    Run {
        /// Travel sheet (CSV with a header row, or a JSON array of rows)
        input: PathBuf,

        /// Price table (CSV; gasoline in column A, diesel in column B of the first row)
        #[arg(short, long, conflicts_with_all = ["gasoline", "diesel"])]
        prices: Option<PathBuf>,

        /// Gasoline price per liter, as typed in the sheet
        #[arg(long)]
        gasoline: Option<String>,

        /// Diesel price per liter, as typed in the sheet
        #[arg(long)]
        diesel: Option<String>,

        /// Write results to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show what is read from one row before running the whole sheet
    Diagnose {
        /// Travel sheet (CSV with a header row, or a JSON array of rows)
        input: PathBuf,

        /// Sheet row number (the first data row is 2)
        #[arg(short, long, default_value_t = 2)]
        row: usize,
    },

    /// Show the active vehicle profiles
    Vehicles,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    let log_level = config
        .as_ref()
        .map(|c| c.schema.general.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    init_logging(cli.verbose, &log_level);
    let format = cli.format;

    let result = config.map_err(anyhow::Error::from).and_then(|config| {
        debug!(source = ?config.path, "Configuration loaded");
        match cli.command {
            Commands::Run {
                input,
                prices,
                gasoline,
                diesel,
                output,
            } => commands::run::run(
                &commands::run::RunArgs {
                    input,
                    prices,
                    gasoline,
                    diesel,
                    output,
                },
                format,
                &config,
            ),
            Commands::Diagnose { input, row } => commands::diagnose::run(&input, row, format),
            Commands::Vehicles => commands::vehicles::run(&config, format),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            let error = match e.downcast::<Error>() {
                Ok(error) => error,
                Err(other) => Error::new(ErrorCode::Internal, format!("{:#}", other)),
            };
            report_error(&error, format);
            ExitCode::from(error.exit_code() as u8)
        }
    }
}

/// JSON mode reports failures as a serialized error report on stderr.
fn report_error(error: &Error, format: OutputFormat) {
    if format == OutputFormat::Json {
        match serde_json::to_string_pretty(&error.to_report()) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("{}", error),
        }
    } else {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }
}

/// Logs go to stderr so CSV and JSON on stdout stay clean.
///
/// `--verbose` forces debug; otherwise `RUST_LOG` wins over the configured level.
fn init_logging(verbose: bool, level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
