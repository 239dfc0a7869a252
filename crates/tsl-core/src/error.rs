//! Error types for the conversion toolkit.
//!
//! Every failure is detected before the output file is created and
//! propagates as a [`Result`] to the binary boundary, which owns the
//! exit-code mapping. Nothing in the library terminates the process.

use crate::model::Region;
use thiserror::Error;
use tsl_math::{AggregationError, DownsampleError};

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input CSV shape and parsing errors.
    Input,
    /// Series transform errors (downsample, aggregate, duration).
    Transform,
    /// Label source errors (annotation export, label copy).
    Label,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Transform => write!(f, "transform"),
            ErrorCategory::Label => write!(f, "label"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for the conversion toolkit.
#[derive(Error, Debug)]
pub enum Error {
    // Transform errors
    #[error("downsample failed: {0}")]
    Downsample(#[from] DownsampleError),

    #[error("window aggregation failed: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("invalid duration string: {0:?} (expected digits plus one of s/m/h/d)")]
    InvalidDuration(String),

    // Label source errors
    #[error("label set {id} not found in annotation export")]
    LabelSetNotFound { id: i64 },

    #[error(
        "regions [{}, {}] and [{}, {}] overlap",
        .first.start, .first.end, .second.start, .second.end
    )]
    OverlapConflict { first: Region, second: Region },

    #[error("structural mismatch between data and label files: {0}")]
    StructuralMismatch(String),

    // Input errors
    #[error("input format error: {0}")]
    InputFormat(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Downsample(_) | Error::Aggregation(_) | Error::InvalidDuration(_) => {
                ErrorCategory::Transform
            }
            Error::LabelSetNotFound { .. }
            | Error::OverlapConflict { .. }
            | Error::StructuralMismatch(_) => ErrorCategory::Label,
            Error::InputFormat(_) => ErrorCategory::Input,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Downsample(_) => "Downsampling Failed",
            Error::Aggregation(_) => "Window Aggregation Failed",
            Error::InvalidDuration(_) => "Invalid Duration",
            Error::LabelSetNotFound { .. } => "Label Set Not Found",
            Error::OverlapConflict { .. } => "Overlapping Regions",
            Error::StructuralMismatch(_) => "Structural Mismatch",
            Error::InputFormat(_) => "Input Format Error",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Parse Error",
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Downsample(_) => {
                "Pick a --threshold strictly between 2 and the number of data rows."
            }
            Error::Aggregation(_) => {
                "Use a longer --mean duration or provide more data points per window."
            }
            Error::InvalidDuration(_) => {
                "Write durations as an integer plus a unit, e.g. '30s', '5m', '1h' or '2d'."
            }
            Error::LabelSetNotFound { .. } => {
                "Check --labelid against the 'id' fields in the annotation export."
            }
            Error::OverlapConflict { .. } => {
                "Fix the annotation so no region endpoint falls inside another region."
            }
            Error::StructuralMismatch(_) => {
                "Data and source files must have the same row count and matching headers."
            }
            Error::InputFormat(_) => {
                "Check the CSV header: the first column is the timestamp and --column must name an existing column."
            }
            Error::Io(_) => "Check that input paths exist and the output directory is writable.",
            Error::Json(_) => "Validate the annotation export, e.g. 'cat <file> | jq .'.",
        }
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}
