//! Batch processing with optional parallelism.
//!
//! Every input row yields exactly one output row, in input order. A failed row
//! becomes an error-tagged output row and the batch carries on.

use crate::price::FuelPrices;
use crate::row::{process_row, ErrorTag, InputRow, OutputRow, RowError, TripMetrics};
use crate::vehicle::Fleet;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Sheet row number of the first data row (row 1 is the header).
pub const FIRST_DATA_ROW: usize = 2;

/// Computes every row, keeping the full per-row result.
pub fn process_batch(rows: &[InputRow], prices: &FuelPrices, fleet: &Fleet) -> Vec<Result<TripMetrics, RowError>> {
    info!(
        rows = rows.len(),
        gasoline = prices.gasoline,
        diesel = prices.diesel,
        "Processing batch"
    );

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        rows.par_iter()
            .enumerate()
            .map(|(index, row)| process_logged(index, row, prices, fleet))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        rows.iter()
            .enumerate()
            .map(|(index, row)| process_logged(index, row, prices, fleet))
            .collect()
    }
}

/// Computes every row and returns the output rows to write back.
///
/// # Example
/// ```
/// use tripcalc_engine::{run_batch, FuelPrices, Fleet, InputRow};
///
/// let rows = vec![
///     InputRow {
///         origin: "-23.00,-65.00".into(),
///         destination: "-23.00,-66.00".into(),
///         ..InputRow::default()
///     },
///     InputRow::default(),
/// ];
///
/// let outputs = run_batch(&rows, &FuelPrices::new(1000.0, 1500.0), &Fleet::standard());
/// assert_eq!(outputs.len(), 2);
/// assert!(outputs[0].is_ok());
/// assert_eq!(outputs[1].to_record()[0], "Error Coord");
/// ```
pub fn run_batch(rows: &[InputRow], prices: &FuelPrices, fleet: &Fleet) -> Vec<OutputRow> {
    process_batch(rows, prices, fleet).into_iter().map(OutputRow::from).collect()
}

fn process_logged(
    index: usize,
    row: &InputRow,
    prices: &FuelPrices,
    fleet: &Fleet,
) -> Result<TripMetrics, RowError> {
    let sheet_row = index + FIRST_DATA_ROW;
    let result = process_row(row, prices, fleet);

    match &result {
        Ok(metrics) => debug!(
            row = sheet_row,
            vehicle = %metrics.vehicle,
            distance_km = metrics.distance_km,
            cost = metrics.cost,
            "Row computed"
        ),
        Err(err) => warn!(row = sheet_row, tag = %err.tag(), "Row failed: {}", err),
    }

    result
}

/// Totals over a finished batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub ok: usize,
    pub coordinate_errors: usize,
    pub calculation_errors: usize,
    pub total_distance_km: f64,
    pub total_liters: f64,
    pub total_cost: i64,
}

impl BatchSummary {
    pub fn from_outputs(outputs: &[OutputRow]) -> Self {
        let mut summary = Self {
            rows: outputs.len(),
            ..Self::default()
        };

        for output in outputs {
            match output {
                OutputRow::Ok {
                    distance_km,
                    liters,
                    cost,
                    ..
                } => {
                    summary.ok += 1;
                    summary.total_distance_km += distance_km;
                    summary.total_liters += liters;
                    summary.total_cost = summary.total_cost.saturating_add(*cost);
                }
                OutputRow::Error {
                    tag: ErrorTag::Coordinates,
                } => summary.coordinate_errors += 1,
                OutputRow::Error {
                    tag: ErrorTag::Calculation,
                } => summary.calculation_errors += 1,
            }
        }

        summary
    }

    pub fn errors(&self) -> usize {
        self.coordinate_errors + self.calculation_errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    fn trip(origin: &str, destination: &str) -> InputRow {
        InputRow {
            origin: origin.into(),
            destination: destination.into(),
            ..InputRow::default()
        }
    }

    #[test]
    fn test_empty_batch() {
        let outputs = run_batch(&[], &FuelPrices::default(), &Fleet::standard());
        assert!(outputs.is_empty());
        assert_eq!(BatchSummary::from_outputs(&outputs), BatchSummary::default());
    }

    #[test]
    fn test_bad_row_does_not_stop_batch() {
        let rows = vec![
            trip("", "-23.00,-66.00"),
            trip("-23.00,-65.00", "-23.00,-66.00"),
            trip("-23.00,-65.00", "sin datos"),
            trip("-24.78,-65.42", "-24.19,-65.30"),
        ];
        let outputs = run_batch(&rows, &FuelPrices::new(1000.0, 1500.0), &Fleet::standard());

        assert_eq!(outputs.len(), 4);
        assert_eq!(outputs[0].error_tag(), Some(ErrorTag::Coordinates));
        assert!(outputs[1].is_ok());
        assert_eq!(outputs[2].error_tag(), Some(ErrorTag::Coordinates));
        assert!(outputs[3].is_ok());
        assert_eq!(outputs[1].to_record()[3], "10236");
    }

    #[test]
    fn test_order_is_preserved() {
        // Distinct distances so the order is visible in the output
        let rows: Vec<InputRow> = (1..=50)
            .map(|i| trip("0, 0", &format!("0, {}", i)))
            .collect();
        let outputs = run_batch(&rows, &FuelPrices::default(), &Fleet::standard());

        assert_eq!(outputs.len(), rows.len());
        let distances: Vec<f64> = outputs
            .iter()
            .map(|o| match o {
                OutputRow::Ok { distance_km, .. } => *distance_km,
                OutputRow::Error { .. } => panic!("unexpected error row"),
            })
            .collect();
        assert!(distances.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_summary_counts_tags() {
        let rows = vec![
            trip("-23.00,-65.00", "-23.00,-66.00"),
            InputRow {
                round_trip: true,
                ..trip("-23.00,-65.00", "-23.00,-66.00")
            },
            trip("x", "y"),
        ];
        let mut outputs = run_batch(&rows, &FuelPrices::new(1000.0, 0.0), &Fleet::standard());
        outputs.push(OutputRow::Error {
            tag: ErrorTag::Calculation,
        });

        let summary = BatchSummary::from_outputs(&outputs);
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.ok, 2);
        assert_eq!(summary.coordinate_errors, 1);
        assert_eq!(summary.calculation_errors, 1);
        assert_eq!(summary.errors(), 2);
        assert_eq!(summary.total_cost, 10236 + 20471);
        assert!((summary.total_distance_km - (102.36 + 204.71)).abs() < 1e-9);
    }

    #[test]
    fn test_huge_price_tags_rows_instead_of_clamping() {
        let price = crate::price::clean_price_text(&format!("1{}", "0".repeat(30)));
        let rows = vec![
            trip("-23.00,-65.00", "-23.00,-66.00"),
            trip("-23.00,-65.00", "-23.00,-66.00"),
        ];
        let outputs = run_batch(&rows, &FuelPrices::new(price, 0.0), &Fleet::standard());

        assert!(outputs.iter().all(|o| o.error_tag() == Some(ErrorTag::Calculation)));
        let summary = BatchSummary::from_outputs(&outputs);
        assert_eq!(summary.calculation_errors, 2);
        assert_eq!(summary.total_cost, 0);
    }

    #[test]
    fn test_total_cost_saturates() {
        let big = OutputRow::Ok {
            distance_km: 1.0,
            duration: "0 hs 1 mins".into(),
            liters: 0.1,
            cost: i64::MAX,
        };
        let summary = BatchSummary::from_outputs(&[big.clone(), big]);
        assert_eq!(summary.ok, 2);
        assert_eq!(summary.total_cost, i64::MAX);
    }

    #[test]
    fn test_flags_from_cells_drive_vehicle() {
        let cells = vec![
            CellValue::from("-23.00,-65.00"),
            CellValue::from("-23.00,-66.00"),
            CellValue::Empty,
            CellValue::from("verdadero"),
            CellValue::Empty,
            CellValue::Bool(true),
        ];
        let results = process_batch(
            &[InputRow::from_cells(&cells)],
            &FuelPrices::new(1000.0, 1500.0),
            &Fleet::standard(),
        );

        let metrics = results[0].as_ref().unwrap();
        assert_eq!(metrics.vehicle, crate::vehicle::VehicleKind::Motorcycle);
        assert_eq!(metrics.cost, 5118);
    }
}
