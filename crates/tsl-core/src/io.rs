//! CSV boundary: reader for the input contract and streaming writer for
//! the canonical `timestamp,value,is_anomaly` schema.

use crate::error::{Error, Result};
use crate::model::{LabeledPoint, Point};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header of the canonical label schema.
pub const LABEL_HEADER: &str = "timestamp,value,is_anomaly";

/// Read an input CSV into points.
///
/// The first row is a header. Field 0 of every data row is the integer
/// timestamp; `column` names the value column to extract. A missing column
/// or an unparsable field fails with [`Error::InputFormat`].
pub fn read_series(path: &Path, column: &str) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| Error::InputFormat(format!("{} is empty", path.display())))?;
    let column_index = header
        .split(',')
        .position(|field| field.trim() == column)
        .ok_or_else(|| Error::InputFormat(format!("column {column:?} not found in input file")))?;

    let mut points = Vec::new();
    for (row, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() <= column_index {
            return Err(Error::InputFormat(format!(
                "row {} has {} fields, expected at least {}",
                row + 2,
                fields.len(),
                column_index + 1
            )));
        }
        let timestamp: i64 = fields[0].trim().parse().map_err(|_| {
            Error::InputFormat(format!("row {}: bad timestamp {:?}", row + 2, fields[0]))
        })?;
        let value: f64 = fields[column_index].trim().parse().map_err(|_| {
            Error::InputFormat(format!(
                "row {}: bad value {:?} in column {column:?}",
                row + 2,
                fields[column_index]
            ))
        })?;
        points.push(Point::new(timestamp, value));
    }
    Ok(points)
}

/// Read a file as raw lines, preserving field text verbatim.
///
/// Used by the label-copy converter, which never reinterprets values.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Streaming writer for the canonical label schema.
///
/// The header is written on creation; rows are appended one at a time.
/// Callers run all validation before constructing the writer, so a failed
/// run never leaves a partial output file behind.
pub struct LabelWriter {
    inner: BufWriter<File>,
}

impl LabelWriter {
    /// Create the output file and write the canonical header.
    pub fn create(path: &Path) -> Result<Self> {
        let mut inner = BufWriter::new(File::create(path)?);
        writeln!(inner, "{LABEL_HEADER}")?;
        Ok(LabelWriter { inner })
    }

    /// Write one labeled point. Values go through `f64` Display, which is
    /// round-trip exact (no rounding).
    pub fn write_labeled(&mut self, point: &LabeledPoint) -> Result<()> {
        writeln!(
            self.inner,
            "{},{},{}",
            point.timestamp, point.value, point.is_anomaly
        )?;
        Ok(())
    }

    /// Write one row of verbatim fields (label-copy mode).
    pub fn write_raw(&mut self, timestamp: &str, value: &str, is_anomaly: &str) -> Result<()> {
        writeln!(self.inner, "{timestamp},{value},{is_anomaly}")?;
        Ok(())
    }

    /// Flush buffered rows to disk.
    pub fn finish(mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
