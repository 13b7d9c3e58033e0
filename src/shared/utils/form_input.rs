//! Conversions between native form input strings and filter values
//!
//! `<input type="time">` yields `HH:MM` (sometimes `HH:MM:SS`) and
//! `<input type="date">` yields `YYYY-MM-DD`. A cleared input yields `""`.
//! Anything that does not parse is treated as no value.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::models::SLOT_FORMAT;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn parse_time_input(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(raw, SLOT_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

pub fn format_time_input(value: Option<NaiveTime>) -> String {
    value
        .map(|t| t.format(SLOT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Midnight UTC of the picked calendar day.
///
/// The browser's own picker converts local midnight to UTC, which shifts the
/// instant by the viewer's offset. Here the day maps to `T00:00:00.000Z`
/// regardless of the viewer's time zone.
pub fn parse_date_input(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn format_date_input(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_time_input() {
        assert_eq!(parse_time_input("14:30"), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_time_input("08:15:42"), NaiveTime::from_hms_opt(8, 15, 42));
        assert_eq!(parse_time_input(""), None);
        assert_eq!(parse_time_input("25:00"), None);
        assert_eq!(parse_time_input("soon"), None);
    }

    #[test]
    fn test_format_time_input() {
        assert_eq!(format_time_input(NaiveTime::from_hms_opt(9, 5, 0)), "09:05");
        assert_eq!(format_time_input(None), "");
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2024-01-01"),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("2024-02-30"), None);
    }

    #[test]
    fn test_picked_day_serializes_as_utc_midnight() {
        let at = parse_date_input("2024-06-15").unwrap();
        assert_eq!(
            crate::domain::models::format_instant(&at),
            "2024-06-15T00:00:00.000Z"
        );
    }

    #[test]
    fn test_format_date_input() {
        let at = Utc.with_ymd_and_hms(2024, 7, 9, 18, 45, 0).unwrap();
        assert_eq!(format_date_input(Some(at)), "2024-07-09");
        assert_eq!(format_date_input(None), "");
    }
}
