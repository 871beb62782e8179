//! Human-readable duration breakdown
//!
//! Renders an elapsed-time estimate as whole days, hours and minutes. The
//! breakdown starts at the coarsest non-zero unit: leading zero units are
//! omitted, inner ones are kept ("1 day, 0 hours, 5 minutes" is valid,
//! "0 days, ..." is not).

use crate::core_types::units::Hours;

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// Format an elapsed duration as a days/hours/minutes breakdown.
///
/// Works on whole minutes (the estimate rounded to the nearest minute); a
/// duration that rounds to zero minutes renders as "less than a minute"
/// rather than an all-zero breakdown.
#[must_use]
pub fn format_duration(elapsed: Hours) -> String {
    let total_minutes = elapsed.total_minutes();
    if total_minutes == 0 {
        return "less than a minute".to_string();
    }

    let days = total_minutes / MINUTES_PER_DAY;
    let hours = (total_minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let minutes = total_minutes % MINUTES_PER_HOUR;

    if days > 0 {
        format!(
            "{}, {}, {}",
            count(days, "day"),
            count(hours, "hour"),
            count(minutes, "minute")
        )
    } else if hours > 0 {
        format!("{}, {}", count(hours, "hour"), count(minutes, "minute"))
    } else {
        count(minutes, "minute")
    }
}

fn count(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ninety_minutes() {
        assert_eq!(format_duration(Hours::new(1.5)), "1 hour, 30 minutes");
    }

    #[test]
    fn test_zero_is_less_than_a_minute() {
        assert_eq!(format_duration(Hours::new(0.0)), "less than a minute");
        // Rounds below one minute
        assert_eq!(format_duration(Hours::new(0.004)), "less than a minute");
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(format_duration(Hours::new(0.75)), "45 minutes");
        assert_eq!(format_duration(Hours::new(1.0 / 60.0)), "1 minute");
    }

    #[test]
    fn test_multi_day_breakdown() {
        // 2 days + 3 hours + 4 minutes = 3064 minutes
        let elapsed = Hours::new(3064.0 / 60.0);
        assert_eq!(format_duration(elapsed), "2 days, 3 hours, 4 minutes");
    }

    #[test]
    fn test_inner_zero_units_are_kept() {
        assert_eq!(format_duration(Hours::new(24.0)), "1 day, 0 hours, 0 minutes");
        assert_eq!(format_duration(Hours::new(2.0)), "2 hours, 0 minutes");
    }

    #[test]
    fn test_rounding_carries_into_hours() {
        // 59.6 minutes rounds to 60 -> 1 hour, 0 minutes
        assert_eq!(
            format_duration(Hours::new(59.6 / 60.0)),
            "1 hour, 0 minutes"
        );
    }
}
