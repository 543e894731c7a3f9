//! Single-row diagnostic.
//!
//! Shows what the engine reads from one row before running a whole batch:
//! the raw cells, the extracted coordinates (or why extraction failed) and the
//! straight-line distance between them.

use crate::row::InputRow;
use crate::vehicle::VehicleKind;
use serde::Serialize;
use tripcalc_geo::{haversine_distance, parse_coordinate, Coordinate};

/// What was read from one end of the trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointReading {
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Numeric code of the extraction failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,
}

impl EndpointReading {
    fn read(raw: String) -> Self {
        match parse_coordinate(&raw) {
            Ok(coordinate) => Self {
                raw,
                coordinate: Some(coordinate),
                error: None,
                error_code: None,
            },
            Err(err) => Self {
                raw,
                coordinate: None,
                error: Some(err.to_string()),
                error_code: Some(err.code() as u32),
            },
        }
    }
}

/// Diagnostic report for one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowDiagnosis {
    /// Sheet row number
    pub row: usize,
    pub origin: EndpointReading,
    pub destination: EndpointReading,
    /// One-way distance, present when both coordinates were read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub round_trip: bool,
    pub vehicle: VehicleKind,
}

impl RowDiagnosis {
    /// True when the row would compute instead of being tagged "Error Coord".
    pub fn coordinates_ok(&self) -> bool {
        self.distance_km.is_some()
    }
}

/// Reads one row the way the batch would and reports each step.
pub fn diagnose_row(sheet_row: usize, row: &InputRow) -> RowDiagnosis {
    let origin = EndpointReading::read(row.origin.as_text().into_owned());
    let destination = EndpointReading::read(row.destination.as_text().into_owned());

    let distance_km = match (&origin.coordinate, &destination.coordinate) {
        (Some(from), Some(to)) => Some(haversine_distance(from, to)),
        _ => None,
    };

    RowDiagnosis {
        row: sheet_row,
        origin,
        destination,
        distance_km,
        round_trip: row.round_trip,
        vehicle: VehicleKind::select(row.is_motorcycle, row.is_pickup),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_row() {
        let row = InputRow {
            origin: "-23.00,-65.00".into(),
            destination: "-23.00,-66.00".into(),
            is_pickup: true,
            ..InputRow::default()
        };
        let report = diagnose_row(2, &row);

        assert!(report.coordinates_ok());
        assert_eq!(report.origin.coordinate, Some(Coordinate::new(-23.0, -65.0)));
        assert!(report.origin.error.is_none());
        assert!(report.origin.error_code.is_none());
        assert!((report.distance_km.unwrap() - 102.355).abs() < 0.01);
        assert_eq!(report.vehicle, VehicleKind::Pickup);
    }

    #[test]
    fn test_unreadable_row_explains_why() {
        let row = InputRow {
            origin: "".into(),
            destination: "-23.5".into(),
            ..InputRow::default()
        };
        let report = diagnose_row(2, &row);

        assert!(!report.coordinates_ok());
        assert_eq!(report.origin.error.as_deref(), Some("Empty coordinate value"));
        assert_eq!(
            report.destination.error.as_deref(),
            Some("Expected two numbers (latitude, longitude), found 1")
        );
        assert_eq!(report.origin.error_code, Some(10001));
        assert_eq!(report.destination.error_code, Some(10002));
        assert!(report.distance_km.is_none());
    }

    #[test]
    fn test_json_omits_missing_parts() {
        let report = diagnose_row(3, &InputRow::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["row"], 3);
        assert!(json.get("distance_km").is_none());
        assert!(json["origin"].get("coordinate").is_none());
        assert_eq!(json["vehicle"], "car");
    }
}
