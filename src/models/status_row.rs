use super::action::Action;
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// One report line per faculty member. Derived at report time, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct StatusRow {
    pub faculty_id: String,
    pub full_name: String,
    pub last_action: Option<Action>,
    #[serde(serialize_with = "serialize_opt_dt")]
    pub last_action_time: Option<NaiveDateTime>,
    #[serde(serialize_with = "serialize_opt_duration")]
    pub hours_rendered: Option<Duration>,
    pub note: String,
}

impl StatusRow {
    /// "x.xx hrs" or "N/A" when no completed shift is available.
    pub fn hours_str(&self) -> String {
        match self.hours_rendered {
            Some(d) => format!("{:.2} hrs", d.num_seconds() as f64 / 3600.0),
            None => "N/A".to_string(),
        }
    }

    /// "Check-In @ 08:00:00 09/01" style label, or the note when the person
    /// has no events at all.
    pub fn last_action_str(&self) -> String {
        match (self.last_action, self.last_action_time) {
            (Some(action), Some(t)) => {
                format!("{} @ {}", action.to_db_str(), t.format("%H:%M:%S %m/%d"))
            }
            _ => self.note.clone(),
        }
    }
}

fn serialize_opt_dt<S>(v: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match v {
        Some(t) => s.serialize_some(&t.format("%Y-%m-%d %H:%M:%S").to_string()),
        None => s.serialize_none(),
    }
}

fn serialize_opt_duration<S>(v: &Option<Duration>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match v {
        Some(d) => s.serialize_some(&d.num_seconds()),
        None => s.serialize_none(),
    }
}
