//! Core utilities for tripcalc
//!
//! This crate provides shared functionality used by the engine and the CLI:
//!
//! - **Error handling**: Coded errors with context and recovery suggestions
//! - **Configuration**: TOML-based configuration of the vehicle profiles and
//!   default fuel prices, with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use tripcalc_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("car speed: {} km/h", config.schema.vehicles.car.speed_kmh);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};
