//! Largest-Triangle-Three-Buckets downsampling.
//!
//! Reduces an ordered series to a target point count while keeping the
//! visually dominant shape: the interior is split into equal-width buckets
//! and each bucket contributes the point spanning the largest triangle
//! against the previously selected anchor and the next bucket's average.
//! First and last points are always kept, so the output is an ordered
//! subsequence of the input with length exactly `threshold`.

use crate::series::point::Point;
use thiserror::Error;

/// Downsampling failures. No partial output is ever produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DownsampleError {
    #[error("series is empty")]
    Empty,

    #[error("threshold {threshold} out of range for series of length {len} (need 2 < threshold < len)")]
    BadThreshold { threshold: usize, len: usize },
}

/// Interior bucket bounds for bucket `i`, as a half-open index range.
///
/// Index 0 and index `len - 1` are reserved for the fixed endpoints, so
/// bucket 0 starts at index 1. The upper bound is clamped to `len` because
/// the averaging range of the final bucket can run past the series end.
pub fn bucket_bounds(i: usize, every: f64, len: usize) -> (usize, usize) {
    let start = (i as f64 * every).floor() as usize + 1;
    let end = (((i + 1) as f64 * every).floor() as usize + 1).min(len);
    (start, end)
}

/// Downsample `points` to exactly `threshold` points.
///
/// Requires `2 < threshold < points.len()`; anything else fails with
/// [`DownsampleError`]. Deterministic single pass: ties on triangle area
/// resolve to the first candidate because the comparison is a strict `>`.
pub fn downsample(points: &[Point], threshold: usize) -> Result<Vec<Point>, DownsampleError> {
    if points.is_empty() {
        return Err(DownsampleError::Empty);
    }
    if threshold <= 2 || threshold >= points.len() {
        return Err(DownsampleError::BadThreshold {
            threshold,
            len: points.len(),
        });
    }

    // Bucket width over the interior, leaving room for the fixed endpoints.
    let every = (points.len() - 2) as f64 / (threshold - 2) as f64;

    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);

    // Index of the anchor point, initially the first original point.
    let mut a = 0usize;

    for i in 0..threshold - 2 {
        // Average point of the next bucket (the triangle's third vertex).
        let (avg_start, avg_end) = bucket_bounds(i + 1, every, points.len());
        let avg_len = (avg_end - avg_start) as f64;
        let mut avg_x = 0.0;
        let mut avg_y = 0.0;
        for p in &points[avg_start..avg_end] {
            avg_x += p.timestamp as f64;
            avg_y += p.value;
        }
        avg_x /= avg_len;
        avg_y /= avg_len;

        let ax = points[a].timestamp as f64;
        let ay = points[a].value;

        let (range_start, range_end) = bucket_bounds(i, every, points.len());
        let mut max_area = -1.0;
        let mut next_a = a;
        for idx in range_start..range_end {
            let p = points[idx];
            // Shoelace half-cross-product of (anchor, candidate, next-bucket average).
            let area = ((ax - avg_x) * (p.value - ay) - (ax - p.timestamp as f64) * (avg_y - ay))
                .abs()
                * 0.5;
            if area > max_area {
                max_area = area;
                next_a = idx;
            }
        }

        sampled.push(points[next_a]);
        a = next_a;
    }

    sampled.push(points[points.len() - 1]);
    Ok(sampled)
}
