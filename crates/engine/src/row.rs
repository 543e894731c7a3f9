//! Row processing: one input row in, one output row out.

use crate::cell::CellValue;
use crate::price::FuelPrices;
use crate::vehicle::{Fleet, VehicleKind};
use serde::Serialize;
use thiserror::Error;
use tripcalc_geo::{haversine_distance, parse_coordinate, GeoError};

/// Number of columns a source row is read from.
///
/// Layout: origin, destination, round trip, motorcycle, (unused), pickup.
pub const INPUT_COLUMNS: usize = 6;

/// Number of result columns written per row.
pub const OUTPUT_COLUMNS: usize = 4;

/// One trip to compute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputRow {
    pub origin: CellValue,
    pub destination: CellValue,
    pub round_trip: bool,
    pub is_motorcycle: bool,
    pub is_pickup: bool,
}

impl InputRow {
    /// Builds a row from source cells. Missing trailing cells count as empty;
    /// the fifth column is skipped.
    pub fn from_cells(cells: &[CellValue]) -> Self {
        let cell = |index: usize| cells.get(index).cloned().unwrap_or_default();
        let flag = |index: usize| cells.get(index).is_some_and(CellValue::as_flag);

        Self {
            origin: cell(0),
            destination: cell(1),
            round_trip: flag(2),
            is_motorcycle: flag(3),
            is_pickup: flag(5),
        }
    }
}

/// Which end of the trip failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Origin,
    Destination,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Why a row could not be computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("cannot read {endpoint} coordinates: {source}")]
    CoordinateExtraction {
        endpoint: Endpoint,
        #[source]
        source: GeoError,
    },

    #[error("calculation produced a non-finite {0}")]
    Computation(&'static str),
}

impl RowError {
    /// The tag written in place of the results.
    pub fn tag(&self) -> ErrorTag {
        match self {
            RowError::CoordinateExtraction { .. } => ErrorTag::Coordinates,
            RowError::Computation(_) => ErrorTag::Calculation,
        }
    }
}

/// Sentinel written in the first result column of a failed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorTag {
    #[serde(rename = "Error Coord")]
    Coordinates,
    #[serde(rename = "Error Calc")]
    Calculation,
}

impl ErrorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorTag::Coordinates => "Error Coord",
            ErrorTag::Calculation => "Error Calc",
        }
    }
}

impl std::fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results for a row that computed cleanly, already rounded for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripMetrics {
    pub vehicle: VehicleKind,
    pub distance_km: f64,
    pub duration_hours: f64,
    pub duration_label: String,
    pub liters: f64,
    pub cost: i64,
}

/// The four result columns for one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutputRow {
    Ok {
        distance_km: f64,
        duration: String,
        liters: f64,
        cost: i64,
    },
    Error {
        tag: ErrorTag,
    },
}

impl OutputRow {
    pub fn is_ok(&self) -> bool {
        matches!(self, OutputRow::Ok { .. })
    }

    pub fn error_tag(&self) -> Option<ErrorTag> {
        match self {
            OutputRow::Error { tag } => Some(*tag),
            OutputRow::Ok { .. } => None,
        }
    }

    /// Column values as written to the sheet. Error rows keep the width:
    /// tag, empty label, 0, 0.
    pub fn to_record(&self) -> [String; OUTPUT_COLUMNS] {
        match self {
            OutputRow::Ok {
                distance_km,
                duration,
                liters,
                cost,
            } => [
                distance_km.to_string(),
                duration.clone(),
                liters.to_string(),
                cost.to_string(),
            ],
            OutputRow::Error { tag } => [
                tag.as_str().to_string(),
                String::new(),
                "0".to_string(),
                "0".to_string(),
            ],
        }
    }
}

impl From<&Result<TripMetrics, RowError>> for OutputRow {
    fn from(result: &Result<TripMetrics, RowError>) -> Self {
        match result {
            Ok(metrics) => OutputRow::Ok {
                distance_km: metrics.distance_km,
                duration: metrics.duration_label.clone(),
                liters: metrics.liters,
                cost: metrics.cost,
            },
            Err(err) => OutputRow::Error { tag: err.tag() },
        }
    }
}

impl From<Result<TripMetrics, RowError>> for OutputRow {
    fn from(result: Result<TripMetrics, RowError>) -> Self {
        OutputRow::from(&result)
    }
}

/// Computes one row.
///
/// Coordinates are checked first; a row with an unreadable origin or
/// destination never reaches the distance or vehicle steps.
pub fn process_row(row: &InputRow, prices: &FuelPrices, fleet: &Fleet) -> Result<TripMetrics, RowError> {
    let origin = parse_coordinate(&row.origin.as_text()).map_err(|source| RowError::CoordinateExtraction {
        endpoint: Endpoint::Origin,
        source,
    })?;
    let destination =
        parse_coordinate(&row.destination.as_text()).map_err(|source| RowError::CoordinateExtraction {
            endpoint: Endpoint::Destination,
            source,
        })?;

    let mut distance = haversine_distance(&origin, &destination);
    if row.round_trip {
        distance *= 2.0;
    }
    let distance = finite(distance, "distance")?;

    let resolved = fleet.resolve(row.is_motorcycle, row.is_pickup, prices);
    let profile = resolved.profile;

    let duration_hours = finite(distance / profile.speed_kmh, "duration")?;
    let liters = finite((distance / 100.0) * profile.liters_per_100km, "fuel volume")?;
    let cost = whole_units(finite(liters * resolved.price_per_liter, "cost")?)?;

    Ok(TripMetrics {
        vehicle: resolved.kind,
        distance_km: round2(distance),
        duration_hours,
        duration_label: format_duration(duration_hours),
        liters: round2(liters),
        cost,
    })
}

#[inline]
fn finite(value: f64, what: &'static str) -> Result<f64, RowError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RowError::Computation(what))
    }
}

/// Rounds a cost to the nearest whole unit. A cost that does not fit in
/// `i64` is a calculation error, not a clamped value.
#[inline]
fn whole_units(cost: f64) -> Result<i64, RowError> {
    // i64::MAX as f64 is 2^63, one past the largest representable value
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let rounded = cost.round();
    if rounded >= -LIMIT && rounded < LIMIT {
        Ok(rounded as i64)
    } else {
        Err(RowError::Computation("cost"))
    }
}

/// Rounds to two decimal places.
///
/// Rounds half away from zero on the f64 product `value * 100`, so values
/// whose binary form sits just below a half may differ from decimal rounding.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats fractional hours as `"H hs M mins"`.
///
/// Minutes are the rounded remainder, so 1.999 h reads `"1 hs 60 mins"`.
pub fn format_duration(hours: f64) -> String {
    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).round();
    format!("{} hs {} mins", whole as i64, minutes as i64)
}
