use chrono::{DateTime, Datelike, Utc};

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

pub fn month_day_label(timestamp_ms: i64) -> String {
    let date = to_utc(timestamp_ms);
    format!("{}-{}", pad2(date.month()), pad2(date.day()))
}

pub fn ymd_string(timestamp_ms: i64) -> String {
    let date = to_utc(timestamp_ms);
    format!("{}-{}-{}", date.year(), pad2(date.month()), pad2(date.day()))
}

// Out-of-range timestamps clamp to the epoch instead of failing.
fn to_utc(timestamp_ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(timestamp_ms).unwrap_or_default()
}

// Manual zero padding instead of width specifiers.
fn pad2(value: u32) -> String {
    if value < 10 {
        format!("0{value}")
    } else {
        value.to_string()
    }
}
