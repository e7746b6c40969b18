/*!
 Contains date parsing and formatting functions used for `<date>` values.
*/

use chrono::{DateTime, SecondsFormat, Timelike, Utc};

/// Parse strict [RFC 3339](https://www.rfc-editor.org/rfc/rfc3339) text into a UTC timestamp
///
/// Any offset in the source text is applied before converting to UTC. The date and time
/// must be separated by `T`, and leap seconds are rejected.
///
/// # Example:
///
/// ```
/// use plist_decoder::util::dates::parse_rfc3339;
///
/// let date = parse_rfc3339("2011-10-05T14:48:00+02:00").unwrap();
/// assert_eq!(date.to_rfc3339(), "2011-10-05T12:48:00+00:00");
/// ```
pub fn parse_rfc3339(text: &str) -> Option<DateTime<Utc>> {
    // chrono also accepts a space or a lowercase `t` here
    if text.as_bytes().get(10) != Some(&b'T') {
        return None;
    }

    let date = DateTime::parse_from_rfc3339(text).ok()?;
    // chrono stores `:60` as a nanosecond count past one second
    if date.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(date.with_timezone(&Utc))
}

/// Format a UTC timestamp the way property lists store it, i.e. `2011-10-05T12:48:00Z`
pub fn format_rfc3339(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike, Utc};

    use crate::util::dates::{format_rfc3339, parse_rfc3339};

    #[test]
    fn can_parse_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        assert_eq!(parse_rfc3339("2024-01-31T23:59:59Z"), Some(expected));
    }

    #[test]
    fn can_parse_offset() {
        let expected = Utc.with_ymd_and_hms(2024, 2, 1, 1, 0, 0).unwrap();
        assert_eq!(parse_rfc3339("2024-01-31T20:00:00-05:00"), Some(expected));
    }

    #[test]
    fn cant_parse_partial_dates() {
        assert!(parse_rfc3339("2024-01-31").is_none());
        assert!(parse_rfc3339("2024-01-31T23:59:59").is_none());
        assert!(parse_rfc3339("yesterday").is_none());
        assert!(parse_rfc3339("").is_none());
    }

    #[test]
    fn cant_parse_loose_separators() {
        assert!(parse_rfc3339("2024-01-31 23:59:59Z").is_none());
        assert!(parse_rfc3339("2024-01-31t23:59:59Z").is_none());
        assert!(parse_rfc3339("2024-01-31_23:59:59Z").is_none());
    }

    #[test]
    fn cant_parse_leap_second() {
        assert!(parse_rfc3339("2016-12-31T23:59:60Z").is_none());
        assert!(parse_rfc3339("2016-12-31T23:59:60.5Z").is_none());
    }

    #[test]
    fn can_parse_fractional_seconds() {
        let date = parse_rfc3339("2024-01-31T23:59:59.25Z").unwrap();
        assert_eq!(date.nanosecond(), 250_000_000);
    }

    #[test]
    fn can_format_whole_seconds() {
        let date = Utc.with_ymd_and_hms(2011, 10, 5, 12, 48, 0).unwrap();
        assert_eq!(format_rfc3339(&date), "2011-10-05T12:48:00Z");
    }
}
