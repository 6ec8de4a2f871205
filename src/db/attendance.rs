use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::latest_event::LatestEvent;
use crate::utils::time::TIMESTAMP_FMT;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::params;
use std::collections::BTreeMap;

/// All of one faculty member's events for a single day, split by action.
/// Both lists are chronologically ascending.
#[derive(Debug, Clone, Default)]
pub struct DayActivity {
    pub check_ins: Vec<NaiveDateTime>,
    pub check_outs: Vec<NaiveDateTime>,
}

fn parse_ts(col: usize, raw: &str) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            col,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(raw.to_string())),
        )
    })
}

/// Append one attendance event. No alternation validation: any sequence of
/// actions is accepted (two Check-Ins in a row included). The faculty id is
/// resolved at the call site, not here.
pub fn insert_attendance(
    pool: &DbPool,
    faculty_id: &str,
    action: Action,
    at: NaiveDateTime,
) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO Attendance (FacultyID, Action, Timestamp)
         VALUES (?1, ?2, ?3)",
        params![
            faculty_id,
            action.to_db_str(),
            at.format(TIMESTAMP_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// For every roster entry, its most recent event and — when that event is a
/// Check-Out — the most recent Check-In strictly before it (the pair used to
/// compute the shift duration). People with zero events still get a row with
/// all event fields null. Ordered by full name ascending.
pub fn latest_event_per_faculty(pool: &DbPool) -> AppResult<Vec<LatestEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT
             F.FacultyID,
             F.FullName,
             A.Timestamp AS LastActionTime,
             A.Action    AS LastAction,
             (SELECT MAX(Timestamp) FROM Attendance
               WHERE FacultyID = F.FacultyID
                 AND Action = 'Check-In'
                 AND Timestamp < A.Timestamp) AS PreviousCheckInTime
         FROM Faculty AS F
         LEFT JOIN Attendance AS A
                ON A.id = (SELECT id FROM Attendance
                            WHERE FacultyID = F.FacultyID
                            ORDER BY Timestamp DESC, id DESC
                            LIMIT 1)
         ORDER BY F.FullName ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let faculty_id: String = row.get("FacultyID")?;
        let full_name: String = row.get("FullName")?;

        let last_action_time = match row.get::<_, Option<String>>("LastActionTime")? {
            Some(raw) => Some(parse_ts(2, &raw)?),
            None => None,
        };

        let last_action = match row.get::<_, Option<String>>("LastAction")? {
            Some(raw) => Some(Action::from_db_str(&raw).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    3,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidAction(raw.clone())),
                )
            })?),
            None => None,
        };

        let previous_checkin_time = match row.get::<_, Option<String>>("PreviousCheckInTime")? {
            Some(raw) => Some(parse_ts(4, &raw)?),
            None => None,
        };

        Ok(LatestEvent {
            faculty_id,
            full_name,
            last_action,
            last_action_time,
            previous_checkin_time,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All events for one local calendar day, grouped per faculty id.
/// An empty map means the day has no events at all.
pub fn events_for_day(pool: &DbPool, date: NaiveDate) -> AppResult<BTreeMap<String, DayActivity>> {
    let mut stmt = pool.conn.prepare(
        "SELECT FacultyID, Timestamp, Action
         FROM Attendance
         WHERE date(Timestamp) = ?1
         ORDER BY Timestamp ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map([date_str], |row| {
        let faculty_id: String = row.get(0)?;
        let raw_ts: String = row.get(1)?;
        let raw_action: String = row.get(2)?;

        let ts = parse_ts(1, &raw_ts)?;
        let action = Action::from_db_str(&raw_action).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidAction(raw_action.clone())),
            )
        })?;

        Ok((faculty_id, ts, action))
    })?;

    let mut grouped: BTreeMap<String, DayActivity> = BTreeMap::new();
    for r in rows {
        let (faculty_id, ts, action) = r?;
        let entry = grouped.entry(faculty_id).or_default();
        match action {
            Action::CheckIn => entry.check_ins.push(ts),
            Action::CheckOut => entry.check_outs.push(ts),
        }
    }

    Ok(grouped)
}

pub fn count_attendance(pool: &DbPool) -> AppResult<i64> {
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM Attendance", [], |row| row.get(0))?;
    Ok(count)
}
