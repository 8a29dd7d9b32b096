//! Calendar boundary of the engine: parsing dataset dates and formatting
//! instants for the axis and the cursor readout.
//!
//! All layout and projection math runs on `f64` milliseconds since the Unix
//! epoch; chrono is only touched here, at the edges.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

pub const MS_PER_SECOND: f64 = 1_000.0;
pub const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
pub const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
pub const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
pub const MS_PER_MONTH: f64 = 30.0 * MS_PER_DAY;
pub const MS_PER_YEAR: f64 = 365.0 * MS_PER_DAY;

/// Readout precision, chosen from the visible span. Thresholds are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadoutPrecision {
    /// Span over a year: "June 2001".
    MonthYear,
    /// Span over 28 days: "June 3rd 2001".
    MonthDayYear,
    /// Anything tighter: "June 3rd 2001, 4:05:06 pm".
    Full,
}

pub fn precision_for_span(span_ms: f64) -> ReadoutPrecision {
    if span_ms > 365.0 * MS_PER_DAY {
        ReadoutPrecision::MonthYear
    } else if span_ms > 28.0 * MS_PER_DAY {
        ReadoutPrecision::MonthDayYear
    } else {
        ReadoutPrecision::Full
    }
}

/// Format an instant at the given precision. Out-of-range instants fall back
/// to the raw millisecond value.
pub fn format_instant(ms: f64, precision: ReadoutPrecision) -> String {
    let Some(dt) = datetime(ms) else {
        return format!("{ms:.0}");
    };
    match precision {
        ReadoutPrecision::MonthYear => dt.format("%B %Y").to_string(),
        ReadoutPrecision::MonthDayYear => {
            let day = dt.day();
            format!("{} {}{} {}", dt.format("%B"), day, ordinal_suffix(day), dt.format("%Y"))
        }
        ReadoutPrecision::Full => {
            let day = dt.day();
            format!(
                "{} {}{} {}, {}",
                dt.format("%B"),
                day,
                ordinal_suffix(day),
                dt.format("%Y"),
                dt.format("%-I:%M:%S %P"),
            )
        }
    }
}

/// Label for an axis tick, with precision chosen from the tick interval
/// rather than the visible span.
pub fn axis_label(ms: f64, interval_ms: f64) -> String {
    let Some(dt) = datetime(ms) else {
        return format!("{ms:.0}");
    };
    if interval_ms >= MS_PER_YEAR {
        dt.format("%Y").to_string()
    } else if interval_ms >= MS_PER_MONTH {
        dt.format("%b %Y").to_string()
    } else if interval_ms >= MS_PER_DAY {
        dt.format("%b %-d").to_string()
    } else if interval_ms >= MS_PER_MINUTE {
        dt.format("%H:%M").to_string()
    } else {
        dt.format("%H:%M:%S").to_string()
    }
}

/// Parse a dataset date scalar into ms since epoch.
///
/// Hand-curated files use a handful of shapes: ISO dates with or without a
/// time component, US `M/D/YYYY`, and bare years.
pub fn parse_instant(s: &str) -> Option<f64> {
    let s = s.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis() as f64);
        }
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return midnight_ms(date);
        }
    }
    if let Ok(year) = s.parse::<i32>() {
        return NaiveDate::from_ymd_opt(year, 1, 1).and_then(midnight_ms);
    }
    None
}

/// Current wall-clock time in ms since epoch; captured once per dataset load.
pub fn now_ms() -> f64 {
    Utc::now().timestamp_millis() as f64
}

/// ms since epoch for midnight UTC on the given date.
pub fn date_ms(year: i32, month: u32, day: u32) -> Option<f64> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(midnight_ms)
}

fn datetime(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms as i64)
}

fn midnight_ms(date: NaiveDate) -> Option<f64> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis() as f64)
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_thresholds() {
        assert_eq!(precision_for_span(400.0 * MS_PER_DAY), ReadoutPrecision::MonthYear);
        assert_eq!(precision_for_span(60.0 * MS_PER_DAY), ReadoutPrecision::MonthDayYear);
        assert_eq!(precision_for_span(5.0 * MS_PER_DAY), ReadoutPrecision::Full);
        // Boundary: exactly 365 days is not "over a year".
        assert_eq!(precision_for_span(365.0 * MS_PER_DAY), ReadoutPrecision::MonthDayYear);
    }

    #[test]
    fn formats_by_precision() {
        let ms = date_ms(2001, 6, 3).unwrap_or_default();
        assert_eq!(format_instant(ms, ReadoutPrecision::MonthYear), "June 2001");
        assert_eq!(format_instant(ms, ReadoutPrecision::MonthDayYear), "June 3rd 2001");
        assert_eq!(
            format_instant(ms, ReadoutPrecision::Full),
            "June 3rd 2001, 12:00:00 am"
        );
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
    }

    #[test]
    fn parses_dataset_dates() {
        assert_eq!(parse_instant("1983-05-01"), date_ms(1983, 5, 1));
        assert_eq!(parse_instant("5/1/1983"), date_ms(1983, 5, 1));
        assert_eq!(parse_instant("1983"), date_ms(1983, 1, 1));
        assert_eq!(
            parse_instant("1983-05-01 06:30:00"),
            date_ms(1983, 5, 1).map(|ms| ms + 6.5 * MS_PER_HOUR),
        );
        assert_eq!(parse_instant("present"), None);
        assert_eq!(parse_instant(""), None);
    }

    #[test]
    fn axis_labels_by_interval() {
        let ms = date_ms(1995, 3, 1).unwrap_or_default();
        assert_eq!(axis_label(ms, 10.0 * MS_PER_YEAR), "1995");
        assert_eq!(axis_label(ms, 3.0 * MS_PER_MONTH), "Mar 1995");
        assert_eq!(axis_label(ms, MS_PER_DAY), "Mar 1");
        assert_eq!(axis_label(ms, MS_PER_HOUR), "00:00");
        assert_eq!(axis_label(ms, MS_PER_SECOND), "00:00:00");
    }
}
