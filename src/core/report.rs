use crate::config::Config;
use crate::db::attendance::latest_event_per_faculty;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::models::latest_event::LatestEvent;
use crate::models::status_row::StatusRow;
use chrono::Duration;

pub const NOTE_NO_RECORDS: &str = "No Records";
pub const NOTE_TIME_IN: &str = "Time-In";
pub const NOTE_SHIFT_DONE: &str = "properly done";
pub const NOTE_SHIFT_NOT_DONE: &str = "not done";

/// Derive one status row from a latest-event join row.
///
/// - no events at all → "No Records"
/// - last action Check-In → "Time-In" (only the most recent check-in counts,
///   even after two Check-Ins in a row)
/// - last action Check-Out without a prior Check-In → "No Records" (no
///   duration can be computed; degrades, never errors)
/// - last action Check-Out with a prior Check-In → duration between the two,
///   "properly done" when it reaches the shift length, "not done" otherwise
///
/// The prior Check-In is simply the most recent one before the Check-Out;
/// no check for an intervening Check-Out is made (observed behavior of the
/// pre-existing store, kept as-is).
pub fn derive_status(row: &LatestEvent, shift: Duration) -> StatusRow {
    let mut status = StatusRow {
        faculty_id: row.faculty_id.clone(),
        full_name: row.full_name.clone(),
        last_action: row.last_action,
        last_action_time: row.last_action_time,
        hours_rendered: None,
        note: NOTE_NO_RECORDS.to_string(),
    };

    match (row.last_action, row.last_action_time) {
        (Some(Action::CheckIn), _) => {
            status.note = NOTE_TIME_IN.to_string();
        }
        (Some(Action::CheckOut), Some(out_time)) => {
            if let Some(in_time) = row.previous_checkin_time {
                let rendered = out_time - in_time;
                status.hours_rendered = Some(rendered);
                status.note = if rendered >= shift {
                    NOTE_SHIFT_DONE.to_string()
                } else {
                    NOTE_SHIFT_NOT_DONE.to_string()
                };
            }
            // no prior check-in: stays "No Records"
        }
        _ => {}
    }

    status
}

/// Build the full status report: one row per roster entry, ordered by name.
pub fn build_report(pool: &mut DbPool, cfg: &Config) -> AppResult<Vec<StatusRow>> {
    let shift = Duration::hours(cfg.shift_hours);
    let rows = latest_event_per_faculty(pool)?;

    Ok(rows.iter().map(|r| derive_status(r, shift)).collect())
}
