//! Vehicles command - show the active profile table

use crate::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use tripcalc_cli::output::Status;
use tripcalc_core::config::Config;
use tripcalc_core::error::exit_codes;
use tripcalc_engine::{Fleet, VehicleKind};

pub fn run(config: &Config, format: OutputFormat) -> Result<i32> {
    let fleet = Fleet::from(&config.schema.vehicles);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&fleet)?);
        return Ok(exit_codes::SUCCESS);
    }

    Status::header("Vehicle profiles");
    println!(
        "{}",
        format!("{:<12} {:>10} {:>14}  {}", "Vehicle", "Speed", "Consumption", "Fuel").bold()
    );
    for kind in VehicleKind::ALL {
        let profile = fleet.profile(kind);
        println!(
            "{:<12} {:>10} {:>14}  {}",
            kind.name(),
            format!("{} km/h", profile.speed_kmh),
            format!("{} l/100km", profile.liters_per_100km),
            profile.fuel
        );
    }

    println!();
    match &config.path {
        Some(path) => println!("{} {}", "Loaded from".dimmed(), path.display()),
        None => println!("{}", "Built-in profiles (no configuration file found)".dimmed()),
    }

    Ok(exit_codes::SUCCESS)
}
