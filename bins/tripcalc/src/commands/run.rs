//! Run command - compute every row of a travel sheet

use crate::input;
use crate::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tripcalc_cli::output::{format_count, format_currency, format_elapsed, format_quantity, Status};
use tripcalc_cli::progress;
use tripcalc_core::config::Config;
use tripcalc_core::error::exit_codes;
use tripcalc_core::{Error, Result as CoreResult};
use tripcalc_engine::{run_batch, BatchSummary, Fleet, FuelPrices, OutputRow, SourceTable, FIRST_DATA_ROW};

/// Arguments of the run command
pub struct RunArgs {
    pub input: PathBuf,
    pub prices: Option<PathBuf>,
    pub gasoline: Option<String>,
    pub diesel: Option<String>,
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    row: usize,
    #[serde(flatten)]
    output: &'a OutputRow,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    prices: &'a FuelPrices,
    summary: &'a BatchSummary,
    rows: Vec<JsonRow<'a>>,
}

/// Computes the sheet and writes the results.
///
/// Returns [`exit_codes::ROW_ERRORS`] when any row was tagged as an error.
pub fn run(args: &RunArgs, format: OutputFormat, config: &Config) -> Result<i32> {
    let prices = input::resolve_prices(
        args.prices.as_deref(),
        args.gasoline.as_deref(),
        args.diesel.as_deref(),
        &config.schema.prices,
    )?;
    let table = input::load_table(&args.input)?;

    if table.is_empty() {
        Status::warning(&format!("No data rows in {}; nothing written", args.input.display()));
        return Ok(exit_codes::SUCCESS);
    }

    let fleet = Fleet::from(&config.schema.vehicles);
    let start = Instant::now();
    let pb = progress::spinner(&format!("Computing {}...", format_count(table.len(), "trip", "trips")));

    let outputs = run_batch(&table.input_rows(), &prices, &fleet);
    let summary = BatchSummary::from_outputs(&outputs);
    let elapsed = start.elapsed();

    if summary.errors() == 0 {
        progress::finish_success(&pb, &format!("{} computed", format_count(summary.ok, "row", "rows")));
    } else {
        progress::finish_warning(
            &pb,
            &format!("{} computed, {} tagged", summary.ok, format_count(summary.errors(), "row", "rows")),
        );
    }

    info!(
        rows = summary.rows,
        ok = summary.ok,
        coordinate_errors = summary.coordinate_errors,
        calculation_errors = summary.calculation_errors,
        elapsed_ms = elapsed.as_millis() as u64,
        "Batch finished"
    );

    match format {
        OutputFormat::Csv => write_to(args.output.as_deref(), |w| write_csv(&table, &outputs, w))?,
        OutputFormat::Json => write_to(args.output.as_deref(), |w| write_json(&prices, &summary, &outputs, w))?,
        OutputFormat::Text => {
            if let Some(path) = &args.output {
                write_to(Some(path.as_path()), |w| write_csv(&table, &outputs, w))?;
            }
            print_table(&outputs);
            print_summary(&summary, elapsed);
            if let Some(path) = &args.output {
                Status::success(&format!("Results written to {}", path.display()));
            }
        }
    }

    if summary.errors() > 0 {
        Ok(exit_codes::ROW_ERRORS)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Runs `write` against the output file, or stdout when there is none.
fn write_to(path: Option<&Path>, write: impl FnOnce(&mut dyn Write) -> CoreResult<()>) -> CoreResult<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::io(format!("Cannot create {}: {}", path.display(), e)).with_source(e)
            })?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write(&mut lock)?;
            lock.flush()?;
        }
    }
    Ok(())
}

fn write_csv(table: &SourceTable, outputs: &[OutputRow], writer: &mut dyn Write) -> CoreResult<()> {
    table
        .write_csv(writer, outputs)
        .map_err(|e| Error::io(format!("Cannot write results: {}", e)).with_source(e))
}

fn write_json(
    prices: &FuelPrices,
    summary: &BatchSummary,
    outputs: &[OutputRow],
    writer: &mut dyn Write,
) -> CoreResult<()> {
    let report = JsonReport {
        prices,
        summary,
        rows: outputs
            .iter()
            .enumerate()
            .map(|(index, output)| JsonRow {
                row: index + FIRST_DATA_ROW,
                output,
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *writer, &report)
        .map_err(|e| Error::io(format!("Cannot write results: {}", e)).with_source(e))?;
    writeln!(writer)?;
    Ok(())
}

fn print_table(outputs: &[OutputRow]) {
    println!(
        "{}",
        format!(
            "{:>5}  {:>12}  {:>14}  {:>10}  {:>12}",
            "Row", "Distance", "Duration", "Fuel", "Cost"
        )
        .bold()
    );

    for (index, output) in outputs.iter().enumerate() {
        let row = index + FIRST_DATA_ROW;
        match output {
            OutputRow::Ok {
                distance_km,
                duration,
                liters,
                cost,
            } => println!(
                "{:>5}  {:>12}  {:>14}  {:>10}  {:>12}",
                row,
                format_quantity(*distance_km, "km"),
                duration,
                format_quantity(*liters, "l"),
                format_currency(*cost)
            ),
            OutputRow::Error { tag } => {
                println!("{:>5}  {}", row, format!("{:>12}", tag.as_str()).red())
            }
        }
    }
}

fn print_summary(summary: &BatchSummary, elapsed: std::time::Duration) {
    Status::header("Summary");
    println!("  Trips:     {}", format_count(summary.ok, "row", "rows"));
    println!("  Distance:  {}", format_quantity(summary.total_distance_km, "km"));
    println!("  Fuel:      {}", format_quantity(summary.total_liters, "l"));
    println!("  Cost:      {}", format_currency(summary.total_cost));
    println!();

    if summary.errors() == 0 {
        Status::success(&format!(
            "{} computed in {}",
            format_count(summary.rows, "row", "rows"),
            format_elapsed(elapsed)
        ));
    } else {
        Status::warning(&format!(
            "{} tagged: {} Error Coord, {} Error Calc",
            format_count(summary.errors(), "row", "rows"),
            summary.coordinate_errors,
            summary.calculation_errors
        ));
    }
}
