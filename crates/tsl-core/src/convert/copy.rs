//! Row-aligned label copy between existing files.

use crate::error::{Error, Result};
use crate::io::{self, LabelWriter};
use std::path::Path;

/// Copy the third column of `source` onto the first two columns of `data`,
/// row-aligned, into `output`.
///
/// The two files must have identical row counts (at least a header plus one
/// row), identical header field counts, and identical values in their first
/// three header fields. Field text is copied verbatim; nothing is parsed or
/// reformatted.
pub fn copy_labels(data: &Path, source: &Path, output: &Path) -> Result<usize> {
    let data_lines = io::read_lines(data)?;
    let source_lines = io::read_lines(source)?;

    check_structure(&data_lines, &source_lines)?;

    let mut writer = LabelWriter::create(output)?;
    for (data_line, source_line) in data_lines.iter().zip(&source_lines).skip(1) {
        let mut fields = data_line.split(',');
        let timestamp = fields.next().unwrap_or_default().trim();
        let value = fields.next().unwrap_or_default().trim();
        let is_anomaly = source_line.split(',').nth(2).unwrap_or_default().trim();
        writer.write_raw(timestamp, value, is_anomaly)?;
    }
    writer.finish()?;
    Ok(data_lines.len() - 1)
}

/// Structural equality checks between the data and label-source files.
fn check_structure(data_lines: &[String], source_lines: &[String]) -> Result<()> {
    if data_lines.len() != source_lines.len() {
        return Err(Error::StructuralMismatch(format!(
            "data has {} rows, source has {}",
            data_lines.len(),
            source_lines.len()
        )));
    }
    if data_lines.len() < 2 {
        return Err(Error::StructuralMismatch(
            "files must contain a header and at least one row".to_string(),
        ));
    }

    let data_header: Vec<&str> = data_lines[0].split(',').map(str::trim).collect();
    let source_header: Vec<&str> = source_lines[0].split(',').map(str::trim).collect();
    if data_header.len() != source_header.len() {
        return Err(Error::StructuralMismatch(format!(
            "data header has {} fields, source header has {}",
            data_header.len(),
            source_header.len()
        )));
    }
    if data_header.len() < 3 {
        return Err(Error::StructuralMismatch(format!(
            "headers have {} fields, expected at least 3",
            data_header.len()
        )));
    }
    for i in 0..3 {
        let (d, s) = (data_header[i], source_header[i]);
        if d != s {
            return Err(Error::StructuralMismatch(format!(
                "header field {i} differs: data {d:?}, source {s:?}"
            )));
        }
    }
    Ok(())
}
