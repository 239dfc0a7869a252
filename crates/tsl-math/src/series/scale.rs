//! Scalar rescaling of series values.

use crate::series::point::Point;

/// Multiply every value by `k`, leaving timestamps untouched.
pub fn scale(points: &[Point], k: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.timestamp, p.value * k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_values_only() {
        let points = vec![Point::new(0, 1.5), Point::new(10, -2.0)];
        let out = scale(&points, 2.0);
        assert_eq!(out, vec![Point::new(0, 3.0), Point::new(10, -4.0)]);
    }

    #[test]
    fn round_trip_within_tolerance() {
        let points = vec![Point::new(0, 0.1), Point::new(1, 7.3), Point::new(2, -5.9)];
        let out = scale(&scale(&points, 3.7), 1.0 / 3.7);
        for (a, b) in points.iter().zip(&out) {
            assert_eq!(a.timestamp, b.timestamp);
            assert!((a.value - b.value).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(scale(&[], 4.0).is_empty());
    }
}
