use super::action::Action;
use chrono::NaiveDateTime;

/// One row of the latest-event-per-faculty join: every faculty record with
/// its most recent attendance event (if any) and, when that event is a
/// Check-Out, the most recent Check-In strictly before it.
#[derive(Debug, Clone)]
pub struct LatestEvent {
    pub faculty_id: String,
    pub full_name: String,
    pub last_action: Option<Action>,
    pub last_action_time: Option<NaiveDateTime>,
    pub previous_checkin_time: Option<NaiveDateTime>,
}
