//! Terminal helpers for the tripcalc command line
//!
//! Provides shared CLI functionality:
//! - Status messages and number formatting
//! - Progress spinners

#![warn(missing_docs)]

pub mod output;
pub mod progress;
