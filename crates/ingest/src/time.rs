//! Timestamp parsing for reporter-supplied event times and filter bounds.
//!
//! Reporters type times by hand, so several layouts are accepted. Values
//! without an offset are read as UTC.
//!
//! | Layout | Example |
//! |--------|---------|
//! | RFC 3339 | `2023-04-15T14:30:00Z` |
//! | date + time | `2023-04-15 14:30`, `2023-04-15 14:30:00` |
//! | ISO local | `2023-04-15T14:30`, `2023-04-15T14:30:00.250` |
//! | date only | `2023-04-15` |
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Parse an event time. Date-only values resolve to midnight UTC.
///
/// Returns `None` for empty or unrecognised input; callers decide whether
/// that is an error.
///
/// ```
/// use ingest::parse_event_time;
///
/// assert!(parse_event_time("2023-04-15T14:30:00Z").is_some());
/// assert!(parse_event_time("2023-04-15 14:30").is_some());
/// assert!(parse_event_time("yesterday afternoon").is_none());
/// ```
pub fn parse_event_time(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    parse_datetime(s).or_else(|| {
        parse_date(s)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    })
}

/// Parse an inclusive lower bound. Same rules as [`parse_event_time`].
pub fn parse_lower_bound(raw: &str) -> Option<DateTime<Utc>> {
    parse_event_time(raw)
}

/// Parse an inclusive upper bound. A date-only value covers the whole day.
///
/// ```
/// use ingest::{parse_event_time, parse_upper_bound};
///
/// let end = parse_upper_bound("2023-04-16").unwrap();
/// assert!(parse_event_time("2023-04-16 23:59").unwrap() <= end);
/// ```
pub fn parse_upper_bound(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    parse_datetime(s).or_else(|| {
        parse_date(s)
            .and_then(|d| d.and_hms_nano_opt(23, 59, 59, 999_999_999))
            .map(|naive| naive.and_utc())
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, TimeZone, Timelike};

    use super::*;

    #[test]
    fn rfc3339_offsets_are_normalised_to_utc() {
        let parsed = parse_event_time("2023-04-15T16:30:00+02:00").expect("rfc3339");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 4, 15, 14, 30, 0).unwrap());
    }

    #[test]
    fn console_layout_is_accepted() {
        let parsed = parse_event_time("2023-04-15 14:30").expect("console layout");
        assert_eq!(parsed.hour(), 14);
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn iso_local_with_fraction_is_accepted() {
        let parsed = parse_event_time("2023-04-15T14:30:00.250").expect("fractional");
        assert_eq!(parsed.nanosecond(), 250_000_000);
    }

    #[test]
    fn date_only_is_midnight() {
        let parsed = parse_event_time("2023-04-15").expect("date only");
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2023, 4, 15));
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn garbage_is_none() {
        assert!(parse_event_time("").is_none());
        assert!(parse_event_time("   ").is_none());
        assert!(parse_event_time("last tuesday").is_none());
        assert!(parse_event_time("2023-13-45").is_none());
    }

    #[test]
    fn upper_bound_date_covers_whole_day() {
        let end = parse_upper_bound("2023-04-16").expect("date bound");
        let late = parse_event_time("2023-04-16T23:59:59Z").expect("late");
        let next = parse_event_time("2023-04-17T00:00:00Z").expect("next day");
        assert!(late <= end);
        assert!(next > end);
    }

    #[test]
    fn upper_bound_with_time_is_exact() {
        let end = parse_upper_bound("2023-04-16 10:00").expect("bound");
        assert_eq!(end, Utc.with_ymd_and_hms(2023, 4, 16, 10, 0, 0).unwrap());
    }
}
