//! Coordinate extraction from free-form text.
//!
//! Cells hold coordinates in whatever shape people paste them:
//! - `-23.456, -65.789`
//! - `lat -23,456 lon -65,789`
//! - `"-23.456" "-65.789"` (quoted, copied from a map)
//!
//! The first two signed decimal tokens are taken as latitude and longitude.
//! Either `.` or `,` may be the decimal separator.

use crate::{Coordinate, GeoError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Signed decimal number with an optional `.` or `,` separator.
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?[0-9]+[.,]?[0-9]*").unwrap());

/// Extracts a coordinate from free text, or `None` if the text has no usable pair.
///
/// # Example
/// ```
/// use tripcalc_geo::extract_coordinate;
///
/// let a = extract_coordinate("-23.456, -65.789").unwrap();
/// let b = extract_coordinate("lat -23,456 lon -65,789").unwrap();
/// assert_eq!(a, b);
///
/// assert!(extract_coordinate("").is_none());
/// assert!(extract_coordinate("-23.456").is_none());
/// ```
pub fn extract_coordinate(text: &str) -> Option<Coordinate> {
    parse_coordinate(text).ok()
}

/// Extracts a coordinate from free text, reporting why extraction failed.
///
/// Tokens after the second one are ignored.
pub fn parse_coordinate(text: &str) -> Result<Coordinate> {
    if text.trim().is_empty() {
        return Err(GeoError::Empty);
    }

    let tokens: Vec<&str> = NUMBER.find_iter(text).take(2).map(|m| m.as_str()).collect();
    let &[lat, lon] = tokens.as_slice() else {
        return Err(GeoError::TooFewNumbers { found: tokens.len() });
    };

    Ok(Coordinate::new(parse_token(lat)?, parse_token(lon)?))
}

/// Parses one matched token, normalizing the decimal separator.
fn parse_token(token: &str) -> Result<f64> {
    let normalized = token.replacen(',', ".", 1);
    // "12," and "12." match the pattern; the bare separator carries no digits
    let normalized = normalized.strip_suffix('.').unwrap_or(&normalized);

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GeoError::NonFinite(token.to_string())),
    }
}
