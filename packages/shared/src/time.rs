//! Time helpers.

use chrono::{DateTime, Local, Utc};

/// Get current Unix timestamp (milliseconds)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as local `HH:MM:SS`.
///
/// Out-of-range timestamps fall back to the epoch.
pub fn format_clock_time(millis: i64) -> String {
    let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default();
    utc.with_timezone(&Local).format("%H:%M:%S").to_string()
}
