//! Local-time parsing and formatting for task timestamps

use chrono::{Local, NaiveDateTime, TimeZone};

/// Entry format used by the new-task dialog and CLI flags.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Display format used in task rows, e.g. `08-30 14:05`.
const SHORT_FORMAT: &str = "%m-%d %H:%M";

/// Parses `YYYY-MM-DD HH:MM` in the local timezone into epoch millis.
pub fn parse_local_datetime(input: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), INPUT_FORMAT).ok()?;
    // Ambiguous local times (DST transitions) resolve to the earlier instant
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

/// Formats epoch millis as `MM-DD HH:MM` in the local timezone.
pub fn format_short(millis: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format(SHORT_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_roundtrip() {
        let millis = parse_local_datetime("2026-01-15 09:30").unwrap();
        assert_eq!(format_short(millis).unwrap(), "01-15 09:30");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parse_local_datetime("  2026-01-15 09:30 "),
            parse_local_datetime("2026-01-15 09:30")
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_local_datetime("tomorrow"), None);
        assert_eq!(parse_local_datetime("2026-13-01 09:30"), None);
        assert_eq!(parse_local_datetime(""), None);
    }

    #[test]
    fn test_parse_rejects_date_only() {
        assert_eq!(parse_local_datetime("2026-01-15"), None);
    }
}
