//! Command implementations

pub mod diagnose;
pub mod run;
pub mod vehicles;
