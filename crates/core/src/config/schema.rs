//! Configuration schema definitions
//!
//! Every section has defaults, so an empty file (or no file) yields the
//! standard fleet and no preset prices.

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Vehicle profiles
    #[serde(default)]
    pub vehicles: VehiclesConfig,

    /// Fallback fuel prices
    #[serde(default)]
    pub prices: PricesConfig,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Fuel a vehicle burns, which decides the price that applies to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    /// Gasoline, also spelled "nafta"
    #[serde(alias = "nafta")]
    Gasoline,
    /// Diesel
    Diesel,
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FuelType::Gasoline => write!(f, "gasoline"),
            FuelType::Diesel => write!(f, "diesel"),
        }
    }
}

/// Speed and consumption constants for one vehicle type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Average speed in km/h
    pub speed_kmh: f64,
    /// Consumption in liters per 100 km
    pub liters_per_100km: f64,
    /// Fuel burned, which decides the price paid
    pub fuel: FuelType,
}

impl ProfileConfig {
    /// Create a profile
    pub const fn new(speed_kmh: f64, liters_per_100km: f64, fuel: FuelType) -> Self {
        Self {
            speed_kmh,
            liters_per_100km,
            fuel,
        }
    }
}

/// Profile table, one entry per vehicle type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehiclesConfig {
    /// Motorcycle profile
    #[serde(default = "default_motorcycle")]
    pub motorcycle: ProfileConfig,

    /// Car profile
    #[serde(default = "default_car")]
    pub car: ProfileConfig,

    /// Pickup profile
    #[serde(default = "default_pickup")]
    pub pickup: ProfileConfig,
}

impl Default for VehiclesConfig {
    fn default() -> Self {
        Self {
            motorcycle: default_motorcycle(),
            car: default_car(),
            pickup: default_pickup(),
        }
    }
}

fn default_motorcycle() -> ProfileConfig {
    ProfileConfig::new(60.0, 5.0, FuelType::Gasoline)
}

fn default_car() -> ProfileConfig {
    ProfileConfig::new(80.0, 10.0, FuelType::Gasoline)
}

fn default_pickup() -> ProfileConfig {
    ProfileConfig::new(70.0, 12.0, FuelType::Diesel)
}

/// Raw price texts used when the command line provides none.
///
/// Kept as text so they go through the same cleanup as a price cell.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PricesConfig {
    /// Gasoline price text
    #[serde(default)]
    pub gasoline: Option<String>,

    /// Diesel price text
    #[serde(default)]
    pub diesel: Option<String>,
}
