//! Loading the travel sheet and the fuel prices

use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, warn};
use tripcalc_core::config::PricesConfig;
use tripcalc_core::{Error, Result};
use tripcalc_engine::{clean_price_text, read_price_cells, FuelPrices, SourceTable, TableError};

/// Reads a travel sheet. `.json` files are JSON arrays of rows; anything else is CSV.
pub fn load_table(path: &Path) -> Result<SourceTable> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let table = if is_json {
        SourceTable::from_json_str(&fs::read_to_string(path)?)
    } else {
        SourceTable::from_csv_reader(File::open(path)?)
    }
    .map_err(|e| Error::invalid_table(path, &e).with_source(e))?;

    debug!(path = %path.display(), rows = table.len(), "Loaded travel sheet");
    Ok(table)
}

/// Picks the fuel prices for a batch.
///
/// A price table wins. Otherwise each price comes from the command line, then
/// the configuration; a price given nowhere is 0.
pub fn resolve_prices(
    table: Option<&Path>,
    gasoline: Option<&str>,
    diesel: Option<&str>,
    config: &PricesConfig,
) -> Result<FuelPrices> {
    let prices = match table {
        Some(path) => load_price_table(path)?,
        None => {
            let gasoline = gasoline.or(config.gasoline.as_deref());
            let diesel = diesel.or(config.diesel.as_deref());
            if gasoline.is_none() {
                warn!("No gasoline price given; gasoline trips will cost 0");
            }
            if diesel.is_none() {
                warn!("No diesel price given; diesel trips will cost 0");
            }
            FuelPrices::new(
                gasoline.map(clean_price_text).unwrap_or(0.0),
                diesel.map(clean_price_text).unwrap_or(0.0),
            )
        }
    };

    debug!(gasoline = prices.gasoline, diesel = prices.diesel, "Fuel prices");
    Ok(prices)
}

fn load_price_table(path: &Path) -> Result<FuelPrices> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let (gasoline, diesel) = read_price_cells(File::open(path)?).map_err(|e| match e {
        TableError::MissingPriceRow => Error::input(format!("Price table {} has no data row", path.display()))
            .with_suggestion("Put the gasoline price in A2 and the diesel price in B2"),
        other => Error::invalid_table(path, &other).with_source(other),
    })?;

    Ok(FuelPrices::from_cells(&gasoline, &diesel))
}
