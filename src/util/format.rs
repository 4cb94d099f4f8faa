//! Formatting utilities
//!
//! Human-readable durations and percentages, plus recognition of metric
//! values that qualify for the count-up animation.

use std::time::Duration;

/// Format duration into human-readable string
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use pitchdeck::util::format::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 3600 {
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        format!("{}h {}m {}s", hours, minutes, total_secs % 60)
    } else if total_secs >= 60 {
        format!("{}m {}s", total_secs / 60, total_secs % 60)
    } else if total_secs > 0 && millis > 0 {
        format!("{}.{:02}s", total_secs, millis / 10)
    } else if total_secs > 0 {
        format!("{}s", total_secs)
    } else {
        format!("{}ms", millis)
    }
}

/// Format a percentage with two decimals
///
/// # Examples
/// ```
/// use pitchdeck::util::format::format_percentage;
///
/// assert_eq!(format_percentage(4.0 / 13.0 * 100.0), "30.77%");
/// assert_eq!(format_percentage(100.0), "100.00%");
/// ```
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Parse a plain whole-number percentage such as `"20%"`
///
/// Anything else (ranges like `"2-3%"`, decimals, text) yields `None` and is
/// displayed verbatim instead of being animated.
pub fn parse_simple_percent(text: &str) -> Option<u32> {
    let digits = text.strip_suffix('%')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m 1s");
        assert_eq!(format_duration(Duration::ZERO), "0ms");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(3.0 / 13.0 * 100.0), "23.08%");
        assert_eq!(format_percentage(0.0), "0.00%");
    }

    #[test]
    fn test_parse_simple_percent() {
        assert_eq!(parse_simple_percent("20%"), Some(20));
        assert_eq!(parse_simple_percent("100%"), Some(100));
        assert_eq!(parse_simple_percent("2-3%"), None);
        assert_eq!(parse_simple_percent("2.5%"), None);
        assert_eq!(parse_simple_percent("%"), None);
        assert_eq!(parse_simple_percent("20"), None);
        assert_eq!(parse_simple_percent("$4,200"), None);
    }
}
