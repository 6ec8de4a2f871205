use crate::db::attendance::count_attendance;
use crate::db::pool::DbPool;
use crate::db::roster::count_faculty;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROSTER & EVENT COUNTS
    //
    let faculty = count_faculty(pool)?;
    let events = count_attendance(pool)?;

    println!(
        "{}• Faculty members:{} {}{}{}",
        CYAN, RESET, GREEN, faculty, RESET
    );
    println!(
        "{}• Attendance events:{} {}{}{}",
        CYAN, RESET, GREEN, events, RESET
    );

    //
    // 3) EVENT DATE RANGE
    //
    let first_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT Timestamp FROM Attendance ORDER BY Timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT Timestamp FROM Attendance ORDER BY Timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_ts.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_ts.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Event range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
