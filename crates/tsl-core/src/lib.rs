//! Time-series label preparation core library.
//!
//! Converts univariate time-series CSV files between label representations
//! for anomaly-labeling workflows:
//! - Raw dataset to canonical label format, with optional downsampling,
//!   rescaling and window aggregation
//! - Annotation-tool JSON export to canonical label format
//! - Row-aligned label copy between existing files
//!
//! The binary entry point is in `main.rs`; everything here returns
//! [`error::Result`] so the converters can be driven as a library and the
//! caller owns exit-code mapping.

pub mod convert;
pub mod duration;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod model;
pub mod regions;
