//! Duration rendering for tables and status lines
//!
//! Call durations arrive from the backend as whole seconds and poll
//! intervals live as [`Duration`]s; both render the same way.

use std::time::Duration;

/// Render a duration as "1h 3m 20s", dropping leading zero units.
///
/// Sub-second durations render in milliseconds.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use std::time::Duration;
///
/// use calldeck_common::time::format::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(42)), "42s");
/// assert_eq!(format_duration(Duration::from_secs(95)), "1m 35s");
/// assert_eq!(format_duration(Duration::from_secs(3800)), "1h 3m 20s");
/// # }
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    if total == 0 {
        return format!("{}ms", duration.as_millis());
    }

    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Render whole seconds, for backend call durations
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use calldeck_common::time::format::format_seconds;
///
/// assert_eq!(format_seconds(42), "42s");
/// assert_eq!(format_seconds(90), "1m 30s");
/// # }
/// ```
pub fn format_seconds(seconds: u64) -> String {
    format_duration(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_sub_second() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::ZERO), "0ms");
    }

    #[test]
    fn test_format_duration_skips_leading_zero_units() {
        assert_eq!(format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h 0m 0s");
    }

    #[test]
    fn test_inner_zero_units_are_kept() {
        assert_eq!(format_duration(Duration::from_secs(3605)), "1h 0m 5s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m 0s");
    }

    #[test]
    fn test_format_seconds_matches_duration_formatting() {
        assert_eq!(format_seconds(3665), "1h 1m 5s");
    }
}
