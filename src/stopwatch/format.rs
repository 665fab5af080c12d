//! `HH:MM:SS.ss` rendering of an elapsed duration.

use std::time::Duration;

use thousands::Separable;

/// Format `elapsed` as `HH:MM:SS.ss`.
///
/// Hours are padded to two digits and grouped with commas past 999, so a
/// very long run reads `1,234:05:06.70`. The value is truncated to whole
/// centiseconds: the readout never shows time that has not yet elapsed.
pub fn format_elapsed(elapsed: Duration) -> String {
    let centis = elapsed.as_millis() / 10;
    let hours = centis / 360_000;
    let minutes = (centis / 6_000) % 60;
    let seconds = (centis / 100) % 60;
    let fraction = centis % 100;
    format!(
        "{:0>2}:{:02}:{:02}.{:02}",
        hours.separate_with_commas(),
        minutes,
        seconds,
        fraction
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00:00.00");
    }

    #[test]
    fn test_format_hours_minutes_seconds() {
        assert_eq!(
            format_elapsed(Duration::from_secs_f64(3725.5)),
            "01:02:05.50"
        );
    }

    #[test]
    fn test_format_truncates_to_centiseconds() {
        // Truncation, not rounding, so 59.999s never displays as 00:00:60.00
        assert_eq!(format_elapsed(Duration::from_millis(59_999)), "00:00:59.99");
        assert_eq!(format_elapsed(Duration::from_millis(60_000)), "00:01:00.00");
    }

    #[test]
    fn test_format_large_hours_use_separators() {
        let elapsed = Duration::from_secs(1234 * 3600 + 5 * 60 + 6) + Duration::from_millis(700);
        assert_eq!(format_elapsed(elapsed), "1,234:05:06.70");
        assert_eq!(format_elapsed(Duration::from_secs(100 * 3600)), "100:00:00.00");
    }
}
