//! Coded errors for tripcalc
//!
//! Every fatal error carries an [`ErrorCode`] whose thousands digit names its
//! category, so the CLI can turn any error into an exit code and a report
//! without matching on messages. Row-level failures are not errors here; the
//! engine turns those into tagged output rows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Error codes, grouped by category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // 1xxx general
    /// Unexpected failure
    Internal = 1001,

    // 2xxx files
    /// File read or write failed
    IoError = 2000,
    /// File does not exist
    FileNotFound = 2001,
    /// File access was refused
    PermissionDenied = 2002,

    // 3xxx configuration
    /// General configuration error
    ConfigError = 3000,
    /// Configuration file does not exist
    ConfigNotFound = 3001,
    /// Configuration file is not valid TOML
    ConfigParseError = 3002,
    /// Configuration values are out of range
    ConfigValidationError = 3003,

    // 4xxx input tables
    /// General input error
    InputError = 4000,
    /// Table could not be parsed
    InvalidTable = 4001,
    /// Row number outside the sheet
    RowOutOfRange = 4002,
}

impl ErrorCode {
    /// Numeric value of the code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Category name, from the thousands digit
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Configuration",
            4 => "Input",
            _ => "Unknown",
        }
    }

    /// Process exit code for errors of this category
    pub fn exit_code(&self) -> i32 {
        match self.code() / 1000 {
            2 => exit_codes::IO_ERROR,
            3 => exit_codes::CONFIG_ERROR,
            4 => exit_codes::INPUT_ERROR,
            _ => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// A fatal error: code, message, and optional context, hint and cause
#[derive(Error, Debug)]
pub struct Error {
    /// What went wrong, as a code
    pub code: ErrorCode,
    /// What went wrong, in words
    pub message: String,
    /// What was being done at the time
    pub context: Option<String>,
    /// How the user can fix it
    pub suggestion: Option<String>,
    /// Underlying cause
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(context) = &self.context {
            write!(f, "\n  while: {}", context)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  hint: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Attach what was being done when the error happened
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            ..self
        }
    }

    /// Attach a recovery suggestion
    pub fn with_suggestion(self, suggestion: impl Into<String>) -> Self {
        Self {
            suggestion: Some(suggestion.into()),
            ..self
        }
    }

    /// Attach the underlying cause
    pub fn with_source(self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..self
        }
    }

    /// Process exit code the CLI should use for this error
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Serializable form, for JSON output and logs
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }

    /// Create a file read/write error
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    /// Create a missing-file error
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Check the path; exports from the sheet are usually .csv files")
    }

    /// Create a general configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Create a missing-configuration error
    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a .tripcalc.toml file or use --config to specify a path")
    }

    /// Create an invalid-configuration error
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigValidationError, message)
    }

    /// Create a general input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InputError, message)
    }

    /// Create an unreadable-table error
    pub fn invalid_table(path: impl AsRef<Path>, reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidTable,
            format!("Cannot read table {}: {}", path.as_ref().display(), reason),
        )
        .with_suggestion("Expected a CSV file with a header row, or a JSON array of rows")
    }

    /// Create an error for a row number outside the sheet
    pub fn row_out_of_range(row: usize, available: usize) -> Self {
        Self::new(
            ErrorCode::RowOutOfRange,
            format!("Row {} does not exist ({} data rows available)", row, available),
        )
        .with_suggestion("Rows are numbered from 2, the first row after the header")
    }
}

/// Serializable error report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error code
    pub code: ErrorCode,
    /// Display form of the code, e.g. `E4002`
    pub id: String,
    /// Category name
    pub category: String,
    /// Human-readable message
    pub message: String,
    /// What was being done at the time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Recovery suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Underlying cause, as text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl From<&Error> for ErrorReport {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code,
            id: err.code.to_string(),
            category: err.code.category().to_string(),
            message: err.message.clone(),
            context: err.context.clone(),
            suggestion: err.suggestion.clone(),
            cause: err.source.as_ref().map(ToString::to_string),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Command finished without problems
    pub const SUCCESS: i32 = 0;
    /// Unexpected failure
    pub const FAILURE: i32 = 1;
    /// Batch completed but some rows were tagged as errors
    pub const ROW_ERRORS: i32 = 2;
    /// Configuration could not be loaded or is invalid
    pub const CONFIG_ERROR: i32 = 3;
    /// Input table or row could not be used
    pub const INPUT_ERROR: i32 = 4;
    /// File could not be read or written
    pub const IO_ERROR: i32 = 5;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::InputError, format!("JSON parse error: {}", err)).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err)).with_source(err)
    }
}

/// Adds context or a hint to any result whose error converts into [`Error`]
pub trait ResultExt<T> {
    /// Attach what was being done when the error happened
    fn context(self, context: impl Into<String>) -> Result<T>;
    /// Attach a recovery suggestion
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_suggestion(suggestion))
    }
}
