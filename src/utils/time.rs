//! Time utilities: parsing timestamps, seconds-since-midnight conversions,
//! HH:MM:SS rendering.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT).ok()
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S").ok()
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    if let Some(s) = input {
        let t = parse_timestamp(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Time-of-day expressed as seconds after local midnight.
pub fn seconds_since_midnight(t: NaiveTime) -> u32 {
    t.hour() * 3600 + t.minute() * 60 + t.second()
}

/// Render a seconds-since-midnight value back to "HH:MM:SS".
/// Floor-based conversion (truncation, not rounding); None → "N/A".
pub fn format_seconds_hms(seconds: Option<f64>) -> String {
    match seconds {
        None => "N/A".to_string(),
        Some(secs) => {
            let total = secs as i64;
            let h = total / 3600;
            let m = (total % 3600) / 60;
            let s = total % 60;
            format!("{:02}:{:02}:{:02}", h, m, s)
        }
    }
}
