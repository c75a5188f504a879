//! Crack-time estimation with coarse human-readable buckets.

/// Assumed attacker throughput in guesses per second.
const GUESSES_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
/// Upper bound of the years bucket (ten years).
const DECADE: f64 = 3.154e8;

/// Seconds a brute-force attacker needs to cover the full search space.
///
/// Large entropies overflow to +inf, which lands in the final bucket of
/// [`format_crack_time`].
pub fn crack_seconds(entropy: f64) -> f64 {
    entropy.exp2() / GUESSES_PER_SECOND
}

/// Formats a crack duration into its bucket phrase.
///
/// Each bucket floors the quotient before the unit, so 90000 seconds is
/// "1 days" rather than "1.04 days".
pub fn format_crack_time(seconds: f64) -> String {
    if seconds < MINUTE {
        format!("{} seconds", seconds.floor() as u64)
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE).floor() as u64)
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR).floor() as u64)
    } else if seconds < YEAR {
        format!("{} days", (seconds / DAY).floor() as u64)
    } else if seconds < DECADE {
        format!("{} years", (seconds / YEAR).floor() as u64)
    } else {
        "millennia (virtually uncrackable)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_crack_time(30.0), "30 seconds");
        assert_eq!(format_crack_time(0.0001), "0 seconds");
        assert_eq!(format_crack_time(59.9), "59 seconds");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_crack_time(120.0), "2 minutes");
        assert_eq!(format_crack_time(60.0), "1 minutes");
        assert_eq!(format_crack_time(3_599.0), "59 minutes");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_crack_time(3_600.0), "1 hours");
        assert_eq!(format_crack_time(86_399.0), "23 hours");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_crack_time(90_000.0), "1 days");
        assert_eq!(format_crack_time(31_535_999.0), "364 days");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_crack_time(40_000_000.0), "1 years");
        assert_eq!(format_crack_time(3.1e8), "9 years");
    }

    #[test]
    fn test_format_millennia() {
        assert_eq!(format_crack_time(4e9), "millennia (virtually uncrackable)");
        assert_eq!(
            format_crack_time(f64::INFINITY),
            "millennia (virtually uncrackable)"
        );
    }

    #[test]
    fn test_crack_seconds_formula() {
        // 2^30 guesses at 1e9 guesses/sec.
        let seconds = crack_seconds(30.0);
        assert!((seconds - 2.0_f64.powi(30) / 1e9).abs() < 1e-9);

        // Zero entropy still takes a (tiny) positive duration.
        assert!(crack_seconds(0.0) > 0.0);
    }

    #[test]
    fn test_crack_seconds_saturates() {
        // Beyond f64 range the estimate saturates instead of wrapping.
        assert!(crack_seconds(2_000.0).is_infinite());
    }
}
