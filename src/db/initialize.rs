use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Column names (FacultyID, FullName, Department, Action, Timestamp) are
/// kept wire-compatible with the pre-existing store.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS Faculty (
            FacultyID  TEXT PRIMARY KEY,
            FullName   TEXT NOT NULL,
            Department TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS Attendance (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            FacultyID TEXT NOT NULL REFERENCES Faculty(FacultyID),
            Action    TEXT NOT NULL CHECK(Action IN ('Check-In','Check-Out')),
            Timestamp TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_faculty_ts
            ON Attendance(FacultyID, Timestamp);
        CREATE INDEX IF NOT EXISTS idx_attendance_ts
            ON Attendance(Timestamp);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
