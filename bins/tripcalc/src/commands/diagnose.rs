//! Diagnose command - check one row before running the whole sheet

use crate::input;
use crate::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use tripcalc_cli::output::{format_quantity, Status};
use tripcalc_core::error::exit_codes;
use tripcalc_core::Error;
use tripcalc_engine::diagnose::EndpointReading;
use tripcalc_engine::{diagnose_row, FIRST_DATA_ROW};

/// Reports what the batch would read from sheet row `row`.
///
/// Returns [`exit_codes::ROW_ERRORS`] when the row would be tagged "Error Coord".
pub fn run(path: &Path, row: usize, format: OutputFormat) -> Result<i32> {
    let table = input::load_table(path)?;
    let rows = table.input_rows();

    let input_row = row
        .checked_sub(FIRST_DATA_ROW)
        .and_then(|index| rows.get(index))
        .ok_or_else(|| Error::row_out_of_range(row, rows.len()))?;

    let report = diagnose_row(row, input_row);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        Status::header(&format!("Row {}", report.row));
        print_endpoint("Origin (A)", &report.origin);
        print_endpoint("Destination (B)", &report.destination);
        println!();

        match report.distance_km {
            Some(distance) => {
                Status::success(&format!("Distance: {} one way", format_quantity(distance, "km")));
                println!(
                    "  Vehicle: {}, round trip: {}",
                    report.vehicle,
                    if report.round_trip { "yes" } else { "no" }
                );
                println!();
                println!("If this looks right, run the whole sheet with `tripcalc run`.");
            }
            None => {
                Status::error("Coordinates could not be read; this row would be tagged Error Coord");
                println!("  Expected text like \"-23.123, -65.123\". Are the cells empty or oddly formatted?");
            }
        }
    }

    if report.coordinates_ok() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::ROW_ERRORS)
    }
}

fn print_endpoint(label: &str, reading: &EndpointReading) {
    println!("  {:<16} \"{}\"", label, reading.raw);
    match (&reading.coordinate, &reading.error) {
        (Some(coordinate), _) => println!("  {:<16} {} {}", "", "✓".green(), coordinate),
        (None, Some(error)) => {
            let code = reading.error_code.map(|c| format!("[E{}] ", c)).unwrap_or_default();
            println!("  {:<16} {} {}{}", "", "✗".red(), code.dimmed(), error)
        }
        (None, None) => {}
    }
}
