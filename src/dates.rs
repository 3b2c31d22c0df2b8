//! Timestamp Helpers
//!
//! The backend emits RFC 2822 timestamps for stored documents; ISO 8601
//! is accepted as well. Display and day-filtering happen in the viewer's
//! local time.

use chrono::{DateTime, FixedOffset, Local, NaiveDate};

/// Parse a server timestamp, RFC 3339 or RFC 2822.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
}

/// True when the timestamp falls on `day` in local time.
pub fn same_local_day(raw: &str, day: NaiveDate) -> bool {
    parse_timestamp(raw)
        .map(|dt| dt.with_timezone(&Local).date_naive() == day)
        .unwrap_or(false)
}

/// Table display format, e.g. "19 Oct 2024 21:21:09".
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(&Local).format("%d %b %Y %H:%M:%S").to_string(),
        None => "Invalid Date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_both_wire_formats() {
        assert!(parse_timestamp("2024-10-19T21:21:09+00:00").is_some());
        assert!(parse_timestamp("Sat, 19 Oct 2024 21:21:09 GMT").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn rfc2822_and_rfc3339_agree() {
        let a = parse_timestamp("Sat, 19 Oct 2024 21:21:09 GMT").unwrap();
        let b = parse_timestamp("2024-10-19T21:21:09+00:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn same_local_day_compares_local_calendar_dates() {
        let local = Local.with_ymd_and_hms(2024, 10, 19, 23, 30, 0).unwrap();
        let raw = local.to_rfc3339();
        assert!(same_local_day(&raw, NaiveDate::from_ymd_opt(2024, 10, 19).unwrap()));
        assert!(!same_local_day(&raw, NaiveDate::from_ymd_opt(2024, 10, 20).unwrap()));
    }

    #[test]
    fn unparseable_timestamps_never_match() {
        assert!(!same_local_day("garbage", NaiveDate::from_ymd_opt(2024, 10, 19).unwrap()));
    }

    #[test]
    fn formats_for_display_with_fallback() {
        let local = Local.with_ymd_and_hms(2024, 10, 19, 9, 5, 0).unwrap();
        assert_eq!(format_timestamp(&local.to_rfc3339()), "19 Oct 2024 09:05:00");
        assert_eq!(format_timestamp("garbage"), "Invalid Date");
    }
}
