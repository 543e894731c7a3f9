//! Tabular input and output.
//!
//! The engine itself works on [`InputRow`]s. This module reads them from CSV
//! exports or JSON arrays and writes results back as CSV, with the four result
//! columns appended after the source columns.

use crate::cell::CellValue;
use crate::row::{InputRow, OutputRow, INPUT_COLUMNS};
use std::io::{Read, Write};
use thiserror::Error;

/// Headers for the result columns.
pub const RESULT_HEADERS: [&str; 4] = ["distance_km", "duration", "liters", "cost"];

/// Headers used when the source has none (JSON input).
pub const DEFAULT_HEADERS: [&str; INPUT_COLUMNS] =
    ["origin", "destination", "round_trip", "motorcycle", "notes", "pickup"];

/// Errors reading or writing a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("price table has no data row")]
    MissingPriceRow,
}

/// Source rows as read from the host, with their raw text kept for echoing.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
    pub cells: Vec<Vec<CellValue>>,
}

impl SourceTable {
    /// Reads a CSV export. The first line is the header; rows may be ragged.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_string).collect();

        let mut records = Vec::new();
        let mut cells = Vec::new();
        for record in rdr.records() {
            let record = record?;
            cells.push(record.iter().map(CellValue::infer).collect());
            records.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self {
            headers,
            records,
            cells,
        })
    }

    /// Reads a JSON array of rows, each an array of scalars (no header row).
    pub fn from_json_str(text: &str) -> Result<Self, TableError> {
        let cells: Vec<Vec<CellValue>> = serde_json::from_str(text)?;
        let records = cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.as_text().into_owned()).collect())
            .collect();

        Ok(Self {
            headers: DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect(),
            records,
            cells,
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows in engine form, in source order.
    pub fn input_rows(&self) -> Vec<InputRow> {
        self.cells.iter().map(|cells| InputRow::from_cells(cells)).collect()
    }

    /// Width of the source part of the output: at least the six input columns.
    fn width(&self) -> usize {
        self.records
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
            .max(INPUT_COLUMNS)
    }

    /// Writes source columns followed by the result columns.
    ///
    /// `outputs` must hold one entry per source row.
    pub fn write_csv<W: Write>(&self, writer: W, outputs: &[OutputRow]) -> Result<(), TableError> {
        debug_assert_eq!(outputs.len(), self.records.len());
        let width = self.width();
        let mut wtr = csv::WriterBuilder::new().from_writer(writer);

        let mut header = padded(&self.headers, width);
        header.extend(RESULT_HEADERS.iter().map(|h| h.to_string()));
        wtr.write_record(&header)?;

        for (record, output) in self.records.iter().zip(outputs) {
            let mut line = padded(record, width);
            line.extend(output.to_record());
            wtr.write_record(&line)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

fn padded(values: &[String], width: usize) -> Vec<String> {
    let mut out = values.to_vec();
    out.resize(width, String::new());
    out
}

/// Reads the gasoline and diesel price cells from a price table export.
///
/// The first data row holds gasoline in column A and diesel in column B.
pub fn read_price_cells<R: Read>(reader: R) -> Result<(CellValue, CellValue), TableError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let record = rdr.records().next().ok_or(TableError::MissingPriceRow)??;
    let cell = |index: usize| record.get(index).map(CellValue::infer).unwrap_or_default();

    Ok((cell(0), cell(1)))
}
