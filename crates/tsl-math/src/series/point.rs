//! The sample type shared by every series transform.

use serde::{Deserialize, Serialize};

/// One sample of a univariate series: an integer timestamp paired with a value.
///
/// Sequences of points are assumed strictly ascending by timestamp. The
/// transforms in this crate rely on that ordering but never verify it;
/// keeping the input sorted is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub timestamp: i64,
    pub value: f64,
}

impl Point {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Point { timestamp, value }
    }
}

impl From<(i64, f64)> for Point {
    fn from((timestamp, value): (i64, f64)) -> Self {
        Point { timestamp, value }
    }
}
