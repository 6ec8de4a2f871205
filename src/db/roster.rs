use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::faculty::FacultyRecord;
use rusqlite::{OptionalExtension, params};

/// Exact-match lookup by faculty id.
pub fn lookup_faculty(pool: &DbPool, faculty_id: &str) -> AppResult<Option<FacultyRecord>> {
    let record = pool
        .conn
        .query_row(
            "SELECT FacultyID, FullName, Department
             FROM Faculty
             WHERE FacultyID = ?1",
            [faculty_id],
            |row| {
                Ok(FacultyRecord {
                    id: row.get(0)?,
                    full_name: row.get(1)?,
                    department: row.get(2)?,
                })
            },
        )
        .optional()?;

    Ok(record)
}

/// Insert a roster entry. Duplicate detection is the caller's job
/// (core::register does a lookup first).
pub fn insert_faculty(pool: &DbPool, record: &FacultyRecord) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO Faculty (FacultyID, FullName, Department)
         VALUES (?1, ?2, ?3)",
        params![record.id, record.full_name, record.department],
    )?;
    Ok(())
}

pub fn count_faculty(pool: &DbPool) -> AppResult<i64> {
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM Faculty", [], |row| row.get(0))?;
    Ok(count)
}
