//! Pure formatting helpers shared by the dashboard panels, chart labels
//! and slider displays.

use chrono::{Datelike, NaiveDate};

/// Round a case count and group it with comma thousands separators.
/// Non-finite values render as `"N/A"` so a bad payload degrades a panel
/// instead of printing `NaN`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    group_thousands(value.round() as i64)
}

/// Like [`format_number`] but `None` renders as `"N/A"`.
pub fn format_opt_number(value: Option<f64>) -> String {
    match value {
        Some(v) => format_number(v),
        None => "N/A".to_string(),
    }
}

/// Abbreviate an ISO `YYYY-MM-DD` date to `"{3-letter month} {day}"`.
/// Unparseable input passes through unchanged so a chart label never panics.
pub fn format_short_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!("{} {}", parsed.format("%b"), parsed.day()),
        Err(_) => date.to_string(),
    }
}

/// Signed percent for the mobility slider display: `+12%`, `-8%`, `+0%`.
pub fn format_signed_percent(value: i32) -> String {
    if value >= 0 {
        format!("+{value}%")
    } else {
        format!("{value}%")
    }
}

fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
    }

    #[test]
    fn test_format_number_rounds_before_grouping() {
        assert_eq!(format_number(999.6), "1,000");
        assert_eq!(format_number(41230.4), "41,230");
    }

    #[test]
    fn test_format_number_rejects_non_finite() {
        assert_eq!(format_number(f64::NAN), "N/A");
        assert_eq!(format_number(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_format_opt_number() {
        assert_eq!(format_opt_number(Some(1200.0)), "1,200");
        assert_eq!(format_opt_number(None), "N/A");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2025-08-03"), "Aug 3");
        assert_eq!(format_short_date("2025-12-25"), "Dec 25");
    }

    #[test]
    fn test_format_short_date_passthrough_on_bad_input() {
        assert_eq!(format_short_date("next week"), "next week");
        assert_eq!(format_short_date(""), "");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(12), "+12%");
        assert_eq!(format_signed_percent(0), "+0%");
        assert_eq!(format_signed_percent(-25), "-25%");
    }
}
