use crate::config::Config;
use crate::db::attendance::{DayActivity, events_for_day};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::daily_stats::DailyStats;
use crate::utils::time::{parse_time, seconds_since_midnight};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Compute the daily aggregates from one day of grouped events.
///
/// Returns None when the day has no events at all: the caller shows a
/// no-data placeholder instead of zeroed statistics.
pub fn compute_daily_stats(
    data: &BTreeMap<String, DayActivity>,
    on_time_limit: NaiveTime,
) -> Option<DailyStats> {
    let mut in_seconds: Vec<u32> = Vec::new();
    let mut out_seconds: Vec<u32> = Vec::new();
    let mut on_time_count = 0usize;

    for activity in data.values() {
        for t_in in &activity.check_ins {
            let time_only = t_in.time();
            in_seconds.push(seconds_since_midnight(time_only));

            // boundary is inclusive: 08:00:00 sharp is on time
            if time_only <= on_time_limit {
                on_time_count += 1;
            }
        }
        for t_out in &activity.check_outs {
            out_seconds.push(seconds_since_midnight(t_out.time()));
        }
    }

    let total_check_ins = in_seconds.len();
    let total_check_outs = out_seconds.len();
    let total_events = total_check_ins + total_check_outs;

    if total_events == 0 {
        return None;
    }

    let mean = |v: &[u32]| -> Option<f64> {
        if v.is_empty() {
            None
        } else {
            Some(v.iter().map(|&s| s as f64).sum::<f64>() / v.len() as f64)
        }
    };

    let checkin_rate_pct = total_check_ins as f64 / total_events as f64 * 100.0;
    let checkout_rate_pct = total_check_outs as f64 / total_events as f64 * 100.0;

    // 0, not NaN, when nobody checked in
    let on_time_pct = if total_check_ins > 0 {
        on_time_count as f64 / total_check_ins as f64 * 100.0
    } else {
        0.0
    };

    Some(DailyStats {
        avg_checkin_secs: mean(&in_seconds),
        avg_checkout_secs: mean(&out_seconds),
        checkin_rate_pct,
        checkout_rate_pct,
        on_time_pct,
    })
}

/// Fetch one day of events and aggregate them.
pub fn build_daily_analytics(
    pool: &mut DbPool,
    cfg: &Config,
    date: NaiveDate,
) -> AppResult<Option<DailyStats>> {
    let limit = parse_time(&cfg.on_time_limit)
        .ok_or_else(|| AppError::Config(format!("Invalid on_time_limit: {}", cfg.on_time_limit)))?;

    let grouped = events_for_day(pool, date)?;

    Ok(compute_daily_stats(&grouped, limit))
}
