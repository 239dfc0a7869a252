//! Shared data types for conversion jobs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use tsl_math::Point;

/// A point plus its binary anomaly label, matching the canonical output
/// schema `timestamp,value,is_anomaly`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub timestamp: i64,
    pub value: f64,
    pub is_anomaly: u8,
}

impl LabeledPoint {
    pub fn new(point: Point, is_anomaly: u8) -> Self {
        LabeledPoint {
            timestamp: point.timestamp,
            value: point.value,
            is_anomaly,
        }
    }
}

/// An annotated anomalous interval in the same timestamp space as points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub start: i64,
    pub end: i64,
}

/// One element of the annotation-tool JSON export: a set of regions keyed
/// by the annotation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    pub id: i64,
    pub label: Vec<Region>,
}

/// Optional transforms applied by the Raw-to-Label converter, always in the
/// fixed order downsample, scale, window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineConfig {
    /// LTTB downsample target point count.
    pub threshold: Option<usize>,
    /// Scalar multiplier for every value.
    pub scale: Option<f64>,
    /// Window duration string, e.g. `30s`, `5m`, `1h`, `2d`.
    pub window: Option<String>,
}

/// One conversion invocation. The variant carries exactly the inputs its
/// converter needs, so an impossible flag combination cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionJob {
    /// Raw dataset to label format; every output row gets `is_anomaly = 0`.
    RawToLabel {
        data: PathBuf,
        output: PathBuf,
        column: String,
        pipeline: PipelineConfig,
    },
    /// Annotation-tool JSON export to label format.
    AnnotationToLabel {
        data: PathBuf,
        labels: PathBuf,
        output: PathBuf,
        column: String,
        label_id: i64,
    },
    /// Copy per-row labels from an existing label file onto a data file.
    CopyLabel {
        data: PathBuf,
        source: PathBuf,
        output: PathBuf,
    },
}
