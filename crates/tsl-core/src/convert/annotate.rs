//! Annotation-tool JSON export to canonical label format.

use crate::error::{Error, Result};
use crate::io::{self, LabelWriter};
use crate::model::{LabelSet, LabeledPoint};
use crate::regions::{in_any_region, validate_no_overlap};
use std::path::Path;

/// Convert an annotation-tool export into the canonical label format.
///
/// The export is a top-level JSON array of label sets; the set whose `id`
/// matches `label_id` supplies the regions. Regions are validated for
/// overlap before any output is written; a point is anomalous when its
/// timestamp falls inside the closed interval of any region.
pub fn annotation_to_label(
    data: &Path,
    labels: &Path,
    output: &Path,
    column: &str,
    label_id: i64,
) -> Result<usize> {
    let points = io::read_series(data, column)?;

    let text = std::fs::read_to_string(labels)?;
    let sets: Vec<LabelSet> = serde_json::from_str(&text)?;
    let set = sets
        .into_iter()
        .find(|s| s.id == label_id)
        .ok_or(Error::LabelSetNotFound { id: label_id })?;
    validate_no_overlap(&set.label)?;
    tracing::debug!(label_id, regions = set.label.len(), "selected label set");

    let mut writer = LabelWriter::create(output)?;
    for point in &points {
        let is_anomaly = u8::from(in_any_region(point.timestamp, &set.label));
        writer.write_labeled(&LabeledPoint::new(*point, is_anomaly))?;
    }
    writer.finish()?;
    Ok(points.len())
}
