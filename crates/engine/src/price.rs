//! Fuel price cleanup.
//!
//! Price cells are typed by hand (`$ 1.250`, `1250,50`, `1250`). Cleanup keeps
//! only digits, `.` and `,`, turns the first `,` into `.`, then reads the
//! longest leading decimal number. Anything unreadable is 0.
//!
//! Thousands separators are not understood: `1.234,56` becomes `1.234.56`,
//! which reads as `1.234`.

use crate::cell::CellValue;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tripcalc_core::config::FuelType;

static NOT_PRICE_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.,]").unwrap());
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)").unwrap());

/// The two prices that apply to a batch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FuelPrices {
    pub gasoline: f64,
    pub diesel: f64,
}

impl FuelPrices {
    pub fn new(gasoline: f64, diesel: f64) -> Self {
        Self { gasoline, diesel }
    }

    /// Cleans both price cells once, for a whole batch.
    pub fn from_cells(gasoline: &CellValue, diesel: &CellValue) -> Self {
        Self {
            gasoline: clean_price(gasoline),
            diesel: clean_price(diesel),
        }
    }

    /// Price per liter for a fuel.
    #[inline]
    pub fn price_for(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Diesel => self.diesel,
            FuelType::Gasoline => self.gasoline,
        }
    }
}

/// Cleans a price cell into a number, 0 when nothing can be read.
pub fn clean_price(cell: &CellValue) -> f64 {
    clean_price_text(&cell.as_text())
}

/// Cleans raw price text into a number, 0 when nothing can be read.
pub fn clean_price_text(raw: &str) -> f64 {
    let kept = NOT_PRICE_CHAR.replace_all(raw, "");
    let normalized = kept.replacen(',', ".", 1);

    LEADING_NUMBER
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(clean_price_text("1000"), 1000.0);
        assert_eq!(clean_price_text("1250.5"), 1250.5);
        assert_eq!(clean_price(&CellValue::Number(980.0)), 980.0);
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(clean_price_text("1250,50"), 1250.5);
        assert_eq!(clean_price_text("$ 1250,50 ARS"), 1250.5);
    }

    #[test]
    fn test_currency_and_spaces_stripped() {
        assert_eq!(clean_price_text("$ 1000"), 1000.0);
        assert_eq!(clean_price_text(" 1 000 "), 1000.0);
    }

    #[test]
    fn test_thousands_separator_is_not_understood() {
        // "$ 1.234,56" -> "1.234,56" -> "1.234.56" -> leading "1.234"
        assert_eq!(clean_price_text("$ 1.234,56"), 1.234);
        assert_eq!(clean_price_text("1,234,56"), 1.234);
    }

    #[test]
    fn test_minus_sign_stripped() {
        assert_eq!(clean_price_text("-500"), 500.0);
    }

    #[test]
    fn test_unreadable_defaults_to_zero() {
        assert_eq!(clean_price_text(""), 0.0);
        assert_eq!(clean_price_text("sin precio"), 0.0);
        assert_eq!(clean_price_text("."), 0.0);
        assert_eq!(clean_price(&CellValue::Empty), 0.0);
        assert_eq!(clean_price(&CellValue::Bool(true)), 0.0);
    }

    #[test]
    fn test_leading_separator() {
        assert_eq!(clean_price_text(",5"), 0.5);
    }

    #[test]
    fn test_from_cells_and_lookup() {
        let prices = FuelPrices::from_cells(&CellValue::from("$ 1.100"), &CellValue::from("1350,75"));
        assert_eq!(prices.gasoline, 1.1);
        assert_eq!(prices.diesel, 1350.75);
        assert_eq!(prices.price_for(FuelType::Gasoline), 1.1);
        assert_eq!(prices.price_for(FuelType::Diesel), 1350.75);
    }
}
