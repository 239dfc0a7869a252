//! Fixed-duration window aggregation (mean per window).

use crate::series::point::Point;
use thiserror::Error;

/// Aggregation failures. No partial output is ever produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("series is empty")]
    Empty,

    #[error("window of {window_seconds}s cannot produce any bucket")]
    BadWindow { window_seconds: i64 },

    #[error("series of {len} points is too short for {windows} windows")]
    TooFewPoints { len: usize, windows: usize },
}

/// Number of windows covering the series span, at least one.
///
/// `points` must be non-empty.
pub fn window_count(points: &[Point], window_seconds: i64) -> usize {
    let first = points[0].timestamp;
    let last = points[points.len() - 1].timestamp;
    let span = (last - first) as f64;
    ((span / window_seconds as f64).ceil() as usize).max(1)
}

/// Re-bucket `points` into windows of `window_seconds` and emit one mean
/// value per chunk, timestamped at the chunk's middle index.
///
/// Chunking is by element count (`len / window_count`, floor), not by exact
/// duration, so the trailing chunk may be shorter than the others when the
/// length is not an exact multiple. The short remainder is averaged like any
/// full chunk rather than dropped; dropping it would silently change the
/// output row count that downstream label files are aligned against.
pub fn aggregate(points: &[Point], window_seconds: i64) -> Result<Vec<Point>, AggregationError> {
    if points.is_empty() {
        return Err(AggregationError::Empty);
    }
    if window_seconds <= 0 {
        return Err(AggregationError::BadWindow { window_seconds });
    }

    let windows = window_count(points, window_seconds);
    let chunk_len = points.len() / windows;
    if chunk_len == 0 {
        return Err(AggregationError::TooFewPoints {
            len: points.len(),
            windows,
        });
    }

    let mut out = Vec::with_capacity(points.len().div_ceil(chunk_len));
    for chunk in points.chunks(chunk_len) {
        let mean = chunk.iter().map(|p| p.value).sum::<f64>() / chunk.len() as f64;
        let middle = chunk.len() / 2;
        out.push(Point::new(chunk[middle].timestamp, mean));
    }
    Ok(out)
}
