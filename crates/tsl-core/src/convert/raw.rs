//! Raw dataset to canonical label format.

use crate::duration::parse_duration;
use crate::error::Result;
use crate::io::{self, LabelWriter};
use crate::model::{LabeledPoint, PipelineConfig};
use std::path::Path;
use tsl_math::{aggregate, downsample, scale};

/// Convert a raw dataset export into the canonical label format.
///
/// The optional transforms run in the fixed order downsample, scale,
/// window; every output row gets `is_anomaly = 0` so the file can seed a
/// manual labeling pass. All transforms complete before the output file is
/// created.
pub fn raw_to_label(
    data: &Path,
    output: &Path,
    column: &str,
    pipeline: &PipelineConfig,
) -> Result<usize> {
    let mut points = io::read_series(data, column)?;
    tracing::debug!(rows = points.len(), "read input series");

    if let Some(threshold) = pipeline.threshold {
        points = downsample(&points, threshold)?;
        tracing::debug!(threshold, rows = points.len(), "downsampled series");
    }
    if let Some(k) = pipeline.scale {
        points = scale(&points, k);
        tracing::debug!(scale = k, "rescaled series");
    }
    if let Some(window) = &pipeline.window {
        let window_seconds = parse_duration(window)?;
        points = aggregate(&points, window_seconds)?;
        tracing::debug!(window_seconds, rows = points.len(), "aggregated series");
    }

    let mut writer = LabelWriter::create(output)?;
    for point in &points {
        writer.write_labeled(&LabeledPoint::new(*point, 0))?;
    }
    writer.finish()?;
    Ok(points.len())
}
