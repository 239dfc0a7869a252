//! Exit codes for the tsl-core CLI.
//!
//! Exit codes communicate the run outcome without requiring output parsing:
//! `0` for a completed conversion, `1` for every validation or conversion
//! failure. Malformed invocations are reported by clap with its own usage
//! error exit code before a conversion starts.

/// Exit codes for conversion runs.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Conversion completed and the output file was written.
    Clean = 0,

    /// Validation or conversion failure; no output file was written.
    Failure = 1,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_values() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::Failure.as_i32(), 1);
    }
}
