use crate::db::attendance::insert_attendance;
use crate::db::log::atlog;
use crate::db::pool::DbPool;
use crate::db::roster::lookup_faculty;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::faculty::FacultyRecord;
use chrono::{Local, NaiveDateTime};

/// High-level business logic for the `check` command.
pub struct CheckLogic;

impl CheckLogic {
    /// Record one Check-In/Check-Out event for a faculty member.
    ///
    /// The id must resolve in the roster; the event log itself accepts any
    /// action sequence (consecutive identical actions included).
    /// Returns the roster record so the caller can address the person by
    /// name in its success message.
    pub fn apply(
        pool: &mut DbPool,
        faculty_id: &str,
        action: Action,
        at: Option<NaiveDateTime>,
    ) -> AppResult<FacultyRecord> {
        let faculty_id = faculty_id.trim();
        if faculty_id.is_empty() {
            return Err(AppError::Validation("Please enter Faculty ID.".to_string()));
        }

        let record = lookup_faculty(pool, faculty_id)?
            .ok_or_else(|| AppError::NotFound(faculty_id.to_string()))?;

        let at = at.unwrap_or_else(|| Local::now().naive_local());

        insert_attendance(pool, faculty_id, action, at)?;

        if let Err(e) = atlog(
            &pool.conn,
            "check",
            faculty_id,
            &format!("{} at {}", action.to_db_str(), at.format("%Y-%m-%d %H:%M:%S")),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(record)
    }
}
