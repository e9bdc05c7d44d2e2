/// Timestamp formatting utilities for diagnostic output.
///
/// Timestamps stay `SystemTime` everywhere internally; chrono is only used
/// at the display boundary.
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::time::SystemTime;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a modification time in the local timezone, e.g. `2024-05-01 13:37:00`.
pub fn format_timestamp(t: SystemTime) -> String {
    format_in(t, &Local)
}

fn format_in<Tz>(t: SystemTime, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::<chrono::Utc>::from(t)
        .with_timezone(tz)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
