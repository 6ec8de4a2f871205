use crate::utils::time::format_seconds_hms;
use serde::Serialize;

/// Daily aggregate statistics. Derived at analytics time, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct DailyStats {
    /// Mean check-in time as seconds since local midnight (None = no check-ins).
    pub avg_checkin_secs: Option<f64>,
    /// Mean check-out time as seconds since local midnight (None = no check-outs).
    pub avg_checkout_secs: Option<f64>,
    pub checkin_rate_pct: f64,
    pub checkout_rate_pct: f64,
    pub on_time_pct: f64,
}

impl DailyStats {
    pub fn avg_checkin_str(&self) -> String {
        format_seconds_hms(self.avg_checkin_secs)
    }

    pub fn avg_checkout_str(&self) -> String {
        format_seconds_hms(self.avg_checkout_secs)
    }
}
