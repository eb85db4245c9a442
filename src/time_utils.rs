use crate::domain::chart::TimeUnit;
use chrono::{DateTime, NaiveDate, Utc};

/// Format a timestamp (ms) as a tick label for the given time unit, in UTC.
///
/// - `Hour`  -> `HH:MM`
/// - `Day`   -> `Mon D`
/// - `Month` -> `Mon YYYY`
/// - `Year`  -> `YYYY`
pub fn format_time_label(timestamp: u64, unit: TimeUnit) -> String {
    let Some(date) = i64::try_from(timestamp).ok().and_then(DateTime::<Utc>::from_timestamp_millis)
    else {
        return timestamp.to_string();
    };
    let pattern = match unit {
        TimeUnit::Hour => "%H:%M",
        TimeUnit::Day => "%b %-d",
        TimeUnit::Month => "%b %Y",
        TimeUnit::Year => "%Y",
    };
    date.format(pattern).to_string()
}

/// Midnight UTC of a `YYYY-MM-DD` label, in milliseconds.
pub fn parse_date_label(label: &str) -> Option<u64> {
    let date = NaiveDate::parse_from_str(label.trim(), "%Y-%m-%d").ok()?;
    let millis = date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis();
    u64::try_from(millis).ok()
}
