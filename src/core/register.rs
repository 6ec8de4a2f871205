use crate::db::log::atlog;
use crate::db::pool::DbPool;
use crate::db::roster::{insert_faculty, lookup_faculty};
use crate::errors::{AppError, AppResult};
use crate::models::faculty::FacultyRecord;

/// High-level business logic for the `register` command.
pub struct RegisterLogic;

impl RegisterLogic {
    /// Register a new faculty member.
    ///
    /// Lookup-then-insert: not atomic against a concurrent registration,
    /// which is acceptable with a single interactive operator.
    pub fn apply(
        pool: &mut DbPool,
        faculty_id: &str,
        full_name: &str,
        department: &str,
    ) -> AppResult<FacultyRecord> {
        //
        // 1. Validate input before touching storage
        //
        let faculty_id = faculty_id.trim();
        let full_name = full_name.trim();
        let department = department.trim();

        if faculty_id.is_empty() || full_name.is_empty() || department.is_empty() {
            return Err(AppError::Validation("All fields are required.".to_string()));
        }

        //
        // 2. Reject duplicates
        //
        if lookup_faculty(pool, faculty_id)?.is_some() {
            return Err(AppError::AlreadyExists(faculty_id.to_string()));
        }

        //
        // 3. Insert
        //
        let record = FacultyRecord::new(faculty_id, full_name, department);
        insert_faculty(pool, &record)?;

        //
        // 4. Internal log (non blocking)
        //
        if let Err(e) = atlog(
            &pool.conn,
            "register",
            faculty_id,
            &format!("Registered {} ({})", full_name, department),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(record)
    }
}
