//! Display formatting helpers

use chrono::{DateTime, NaiveDateTime, Utc};

/// Format an ISO-8601 timestamp as `Mon D, YYYY` (UTC)
///
/// Accepts RFC 3339 with any offset and naive `YYYY-MM-DDTHH:MM:SS` values,
/// which are read as UTC. Input that cannot be parsed is returned as-is.
pub fn format_date(timestamp: &str) -> String {
    parse_timestamp(timestamp)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
