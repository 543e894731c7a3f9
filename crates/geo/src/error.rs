//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur while reading a coordinate out of free text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// The value was empty or whitespace only
    #[error("Empty coordinate value")]
    Empty,

    /// Fewer than two numbers were found in the text
    #[error("Expected two numbers (latitude, longitude), found {found}")]
    TooFewNumbers {
        /// How many numeric tokens were present
        found: usize,
    },

    /// A numeric token did not parse to a finite value
    #[error("Not a finite number: {0}")]
    NonFinite(String),
}

/// Error code for integration with tripcalc-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Empty value
    Empty = 10001,
    /// Not enough numeric tokens
    TooFewNumbers = 10002,
    /// Overflowing or otherwise non-finite number
    NonFinite = 10003,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::Empty => GeoErrorCode::Empty,
            GeoError::TooFewNumbers { .. } => GeoErrorCode::TooFewNumbers,
            GeoError::NonFinite(_) => GeoErrorCode::NonFinite,
        }
    }
}
