//! Compact duration-string parsing.

use crate::error::{Error, Result};

/// Parse a compact duration string into seconds.
///
/// Grammar: one or more ASCII digits followed by exactly one unit character,
/// `s` (seconds), `m` (minutes), `h` (hours) or `d` (days). Anything else,
/// including a missing unit or a signed/fractional prefix, fails with
/// [`Error::InvalidDuration`].
pub fn parse_duration(s: &str) -> Result<i64> {
    let invalid = || Error::InvalidDuration(s.to_string());

    let (&unit, digits) = s.as_bytes().split_last().ok_or_else(invalid)?;
    let multiplier: i64 = match unit {
        b's' => 1,
        b'm' => 60,
        b'h' => 3600,
        b'd' => 86400,
        _ => return Err(invalid()),
    };

    if digits.is_empty() || !digits.iter().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // The prefix is all ASCII digits, so the slice below is valid UTF-8.
    let value: i64 = s[..s.len() - 1].parse().map_err(|_| invalid())?;

    Ok(value * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_multipliers() {
        assert_eq!(parse_duration("1s").unwrap(), 1);
        assert_eq!(parse_duration("2m").unwrap(), 120);
        assert_eq!(parse_duration("1h").unwrap(), 3600);
        assert_eq!(parse_duration("2d").unwrap(), 172800);
        assert_eq!(parse_duration("90s").unwrap(), 90);
    }

    #[test]
    fn unknown_unit_rejected() {
        assert!(matches!(parse_duration("10x"), Err(Error::InvalidDuration(_))));
        assert!(matches!(parse_duration("10"), Err(Error::InvalidDuration(_))));
    }

    #[test]
    fn non_numeric_prefix_rejected() {
        assert!(matches!(parse_duration("h"), Err(Error::InvalidDuration(_))));
        assert!(matches!(parse_duration("-5m"), Err(Error::InvalidDuration(_))));
        assert!(matches!(parse_duration("1.5h"), Err(Error::InvalidDuration(_))));
        assert!(matches!(parse_duration(" 5m"), Err(Error::InvalidDuration(_))));
        assert!(matches!(parse_duration(""), Err(Error::InvalidDuration(_))));
    }
}
