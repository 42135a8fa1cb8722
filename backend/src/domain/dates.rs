//! Timestamp parsing and display formatting shared by the view layer.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};

/// Parse a YYYY-MM-DD date into epoch milliseconds at midnight UTC.
pub fn parse_date(date: &str) -> Result<i64> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("Invalid date '{}': {}", date, e))?;
    let midnight = parsed
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("Invalid date '{}'", date))?;
    Ok(midnight.and_utc().timestamp_millis())
}

fn to_datetime(timestamp_ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(timestamp_ms).unwrap_or_else(|| DateTime::UNIX_EPOCH)
}

/// Format epoch milliseconds as "Mar 1, 2025".
pub fn format_date(timestamp_ms: i64) -> String {
    to_datetime(timestamp_ms).format("%b %-d, %Y").to_string()
}

/// Format epoch milliseconds as "Mar 1, 2025 14:30".
pub fn format_date_time(timestamp_ms: i64) -> String {
    to_datetime(timestamp_ms)
        .format("%b %-d, %Y %H:%M")
        .to_string()
}

/// Date and time columns for the CSV export, e.g. ("2025-03-01", "14:30").
pub fn to_date_time_parts(timestamp_ms: i64) -> (String, String) {
    let datetime = to_datetime(timestamp_ms);
    (
        datetime.format("%Y-%m-%d").to_string(),
        datetime.format("%H:%M").to_string(),
    )
}

/// Today's date as YYYY-MM-DD, for leaderboard entries.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Current time as epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;
const WEEK_MS: i64 = 604_800_000;

/// Relative age of a timestamp against a reference clock: "Just now",
/// "5m ago", "3h ago", "2d ago", or the full date once older than a week.
pub fn relative_age(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms - timestamp_ms;
    if diff < MINUTE_MS {
        "Just now".to_string()
    } else if diff < HOUR_MS {
        format!("{}m ago", diff / MINUTE_MS)
    } else if diff < DAY_MS {
        format!("{}h ago", diff / HOUR_MS)
    } else if diff < WEEK_MS {
        format!("{}d ago", diff / DAY_MS)
    } else {
        format_date(timestamp_ms)
    }
}
