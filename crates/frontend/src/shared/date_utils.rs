//! Utilities for the app's two datetime boundaries: the expiry day boundary
//! and the `datetime-local` form value.

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Start of the current calendar day (local midnight) as an instant.
/// Everything dated before this point counts as over.
pub fn start_of_today() -> DateTime<Utc> {
    let midnight = Local::now().date_naive().and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        // A DST shift can skip local midnight entirely; the UTC reading is
        // close enough for a day boundary.
        .unwrap_or_else(|| midnight.and_utc())
}

/// Parse a `datetime-local` form value (`YYYY-MM-DDTHH:MM`, seconds
/// optional). Returns the naive wall-clock time; resolving it to an instant
/// is a separate step so parsing stays timezone-free.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Resolve a naive local wall-clock time to an instant.
pub fn local_to_instant(naive: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

/// Card rendering of an event instant, back in local time.
/// Example: "01 Jun 2024, 10:00 AM"
pub fn format_event_time(instant: &DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%d %b %Y, %I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_datetime_local_values() {
        let parsed = parse_datetime_local("2024-06-01T12:30").unwrap();
        assert_eq!(parsed.to_string(), "2024-06-01 12:30:00");

        let with_seconds = parse_datetime_local("2024-06-01T12:30:45").unwrap();
        assert_eq!(with_seconds.to_string(), "2024-06-01 12:30:45");
    }

    #[test]
    fn rejects_incomplete_or_garbage_values() {
        assert!(parse_datetime_local("").is_none());
        assert!(parse_datetime_local("tomorrow noon").is_none());
        assert!(parse_datetime_local("2024-06-01").is_none());
        assert!(parse_datetime_local("12:30").is_none());
    }
}
