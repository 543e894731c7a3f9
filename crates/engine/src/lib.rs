//! Trip calculations for rows of a travel sheet.
//!
//! This crate provides:
//! - Cell values and checkbox coercion ([`cell`])
//! - Fuel price cleanup ([`price`])
//! - Vehicle profiles and selection ([`vehicle`])
//! - The row processor and batch runner ([`row`], [`batch`])
//! - A single-row diagnostic ([`diagnose`])
//! - CSV and JSON table I/O ([`table`])
//!
//! # Example
//!
//! ```
//! use tripcalc_engine::{process_row, FuelPrices, Fleet, InputRow};
//!
//! let row = InputRow {
//!     origin: "-23.00,-65.00".into(),
//!     destination: "-23.00,-66.00".into(),
//!     ..InputRow::default()
//! };
//!
//! let metrics = process_row(&row, &FuelPrices::new(1000.0, 1500.0), &Fleet::standard()).unwrap();
//! assert_eq!(metrics.distance_km, 102.36);
//! assert_eq!(metrics.duration_label, "1 hs 17 mins");
//! assert_eq!(metrics.cost, 10236);
//! ```

pub mod batch;
pub mod cell;
pub mod diagnose;
pub mod price;
pub mod row;
pub mod table;
pub mod vehicle;

pub use batch::{process_batch, run_batch, BatchSummary, FIRST_DATA_ROW};
pub use cell::CellValue;
pub use diagnose::{diagnose_row, RowDiagnosis};
pub use price::{clean_price, clean_price_text, FuelPrices};
pub use row::{format_duration, process_row, ErrorTag, InputRow, OutputRow, RowError, TripMetrics};
pub use table::{read_price_cells, SourceTable, TableError};
pub use vehicle::{Fleet, VehicleKind, VehicleProfile};
