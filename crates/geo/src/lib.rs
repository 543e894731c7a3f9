//! Geospatial utilities for tripcalc.
//!
//! This crate provides:
//! - Haversine distance calculations
//! - Coordinate extraction from free-form cell text
//!
//! # Example
//!
//! ```
//! use tripcalc_geo::{extract_coordinate, haversine_distance};
//!
//! let origin = extract_coordinate("-23.00,-65.00").unwrap();
//! let destination = extract_coordinate("lat -23,00 lon -66,00").unwrap();
//!
//! let distance_km = haversine_distance(&origin, &destination);
//! assert!((distance_km - 102.36).abs() < 0.01);
//! ```

mod error;
pub mod extract;
mod haversine;

pub use error::{GeoError, GeoErrorCode, Result};
pub use extract::{extract_coordinate, parse_coordinate};
pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};

/// A geographic coordinate with latitude and longitude.
///
/// Values are not range checked; extraction only guarantees they are finite.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
