//! Display formatting for money and rates.

use time::{format_description, OffsetDateTime};

/// `"$1,234"`: rounded to the nearest whole unit (halves round up) and
/// grouped by thousands.
pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(round_half_up(value)))
}

/// `"$12.34/min"`.
pub fn format_rate(value: f64) -> String {
    format!("${}/min", two_decimals(value))
}

/// `"×1.50"`.
pub fn format_multiplier(value: f64) -> String {
    format!("×{}", two_decimals(value))
}

/// Minutes, without a trailing `.0` for whole values.
pub fn format_minutes(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0} min")
    } else {
        format!("{value:.1} min")
    }
}

/// `"14:05:09 UTC"`; empty if the description fails to build.
pub fn format_clock(at: OffsetDateTime) -> String {
    format_description::parse("[hour]:[minute]:[second]")
        .ok()
        .and_then(|description| at.format(&description).ok())
        .map(|clock| format!("{clock} UTC"))
        .unwrap_or_default()
}

fn two_decimals(value: f64) -> String {
    // Avoid printing "-0.00".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}

fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value + 0.5).floor() as i64
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_rounds_and_groups() {
        assert_eq!(format_currency(890.0), "$890");
        assert_eq!(format_currency(1234.4), "$1,234");
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn currency_handles_losses() {
        assert_eq!(format_currency(-50.0), "$-50");
        assert_eq!(format_currency(-1234.0), "$-1,234");
        // Halves round towards positive infinity.
        assert_eq!(format_currency(-2.5), "$-2");
        assert_eq!(format_currency(-0.2), "$0");
    }

    #[test]
    fn rate_has_two_decimals() {
        assert_eq!(format_rate(890.0 / 30.0), "$29.67/min");
        assert_eq!(format_rate(0.0), "$0.00/min");
        assert_eq!(format_rate(-0.0), "$0.00/min");
        assert_eq!(format_rate(-1.5), "$-1.50/min");
        assert_eq!(format_rate(1234.0), "$1234.00/min");
    }

    #[test]
    fn small_helpers() {
        assert_eq!(format_multiplier(1.1), "×1.10");
        assert_eq!(format_minutes(30.0), "30 min");
        assert_eq!(format_minutes(2.5), "2.5 min");
    }

    #[test]
    fn clock_is_utc_time_of_day() {
        let at = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(format_clock(at), "22:13:20 UTC");
    }
}
