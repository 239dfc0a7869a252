//! Region overlap validation and membership tests.

use crate::error::{Error, Result};
use crate::model::Region;

/// True when one of `b`'s endpoints falls strictly inside `a`'s open
/// interval.
///
/// The predicate is deliberately asymmetric: it never tests whether `a`'s
/// endpoints fall inside `b`, so regions that merely share a boundary and
/// regions with identical bounds do not count as overlapping. Downstream
/// consumers rely on this permissive behavior for boundary-touching
/// regions, so keep the exact comparison shape.
pub fn has_overlap(a: Region, b: Region) -> bool {
    (a.start < b.start && b.start < a.end) || (a.start < b.end && b.end < a.end)
}

/// Check all ordered pairs of `regions` and fail on the first conflict.
///
/// Pairs whose regions compare equal by value are skipped, so duplicated
/// regions never conflict with each other.
pub fn validate_no_overlap(regions: &[Region]) -> Result<()> {
    for &a in regions {
        for &b in regions {
            if a != b && has_overlap(a, b) {
                return Err(Error::OverlapConflict { first: a, second: b });
            }
        }
    }
    Ok(())
}

/// True when `timestamp` falls inside the closed interval of any region.
pub fn in_any_region(timestamp: i64, regions: &[Region]) -> bool {
    regions
        .iter()
        .any(|r| r.start <= timestamp && timestamp <= r.end)
}
