//! Date Formatting
//!
//! Backend timestamps come either as naive `YYYY-MM-DD HH:MM:SS` wall time or,
//! after an optimistic update, as RFC 3339 with an offset.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Format a timestamp as `DD.MM.YYYY HH:MM` in browser local time.
/// Empty or unparseable input yields `""`.
pub fn format_date(raw: &str) -> String {
    format_date_in(raw, &Local)
}

/// Same as [`format_date`] with an explicit display time zone
pub fn format_date_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }

    // Naive timestamps are already wall time, shown as-is
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}

/// Current instant as an ISO-8601 UTC string, used for `completed_time`
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
