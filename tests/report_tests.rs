use chrono::{Duration, NaiveDate};
use predicates::str::contains;

mod common;
use common::{check_at, init_db_with_roster, rat, setup_test_db, temp_out};

use rattendance::core::report::{
    NOTE_NO_RECORDS, NOTE_SHIFT_DONE, NOTE_SHIFT_NOT_DONE, NOTE_TIME_IN, derive_status,
};
use rattendance::models::action::Action;
use rattendance::models::latest_event::LatestEvent;

fn dt(date: (i32, u32, u32), time: (u32, u32, u32)) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .unwrap()
        .and_hms_opt(time.0, time.1, time.2)
        .unwrap()
}

fn row(
    last_action: Option<Action>,
    last_action_time: Option<chrono::NaiveDateTime>,
    previous_checkin_time: Option<chrono::NaiveDateTime>,
) -> LatestEvent {
    LatestEvent {
        faculty_id: "F001".to_string(),
        full_name: "Alice Cruz".to_string(),
        last_action,
        last_action_time,
        previous_checkin_time,
    }
}

// ---------------------------------------------------------------
// Pure status derivation
// ---------------------------------------------------------------

#[test]
fn test_status_no_events() {
    let status = derive_status(&row(None, None, None), Duration::hours(8));
    assert_eq!(status.note, NOTE_NO_RECORDS);
    assert!(status.hours_rendered.is_none());
}

#[test]
fn test_status_check_in_is_time_in() {
    let status = derive_status(
        &row(
            Some(Action::CheckIn),
            Some(dt((2026, 1, 15), (8, 0, 0))),
            None,
        ),
        Duration::hours(8),
    );
    assert_eq!(status.note, NOTE_TIME_IN);
    assert!(status.hours_rendered.is_none());
}

#[test]
fn test_status_exact_eight_hours_properly_done() {
    let status = derive_status(
        &row(
            Some(Action::CheckOut),
            Some(dt((2026, 1, 15), (16, 0, 0))),
            Some(dt((2026, 1, 15), (8, 0, 0))),
        ),
        Duration::hours(8),
    );
    assert_eq!(status.note, NOTE_SHIFT_DONE);
    assert_eq!(status.hours_rendered, Some(Duration::hours(8)));
}

#[test]
fn test_status_one_second_short_not_done() {
    let status = derive_status(
        &row(
            Some(Action::CheckOut),
            Some(dt((2026, 1, 15), (15, 59, 59))),
            Some(dt((2026, 1, 15), (8, 0, 0))),
        ),
        Duration::hours(8),
    );
    assert_eq!(status.note, NOTE_SHIFT_NOT_DONE);
    assert_eq!(
        status.hours_rendered,
        Some(Duration::hours(8) - Duration::seconds(1))
    );
}

#[test]
fn test_status_check_out_without_prior_check_in() {
    let status = derive_status(
        &row(
            Some(Action::CheckOut),
            Some(dt((2026, 1, 15), (16, 0, 0))),
            None,
        ),
        Duration::hours(8),
    );
    // degrades gracefully, no duration available
    assert_eq!(status.note, NOTE_NO_RECORDS);
    assert!(status.hours_rendered.is_none());
}

// ---------------------------------------------------------------
// CLI report
// ---------------------------------------------------------------

#[test]
fn test_report_full_shift() {
    let db_path = setup_test_db("report_full_shift");
    init_db_with_roster(&db_path);

    check_at(&db_path, "F001", "in", "2026-01-15 08:00:00");
    check_at(&db_path, "F001", "out", "2026-01-15 16:00:00");

    rat()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("Alice Cruz"))
        .stdout(contains("8.00 hrs"))
        .stdout(contains("properly done"));
}

#[test]
fn test_report_short_shift() {
    let db_path = setup_test_db("report_short_shift");
    init_db_with_roster(&db_path);

    check_at(&db_path, "F001", "in", "2026-01-15 09:00:00");
    check_at(&db_path, "F001", "out", "2026-01-15 13:30:00");

    rat()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("4.50 hrs"))
        .stdout(contains("not done"));
}

#[test]
fn test_report_double_check_in_shows_time_in() {
    let db_path = setup_test_db("report_double_in");
    init_db_with_roster(&db_path);

    check_at(&db_path, "F001", "in", "2026-01-15 07:30:00");
    check_at(&db_path, "F001", "in", "2026-01-15 08:15:00");

    rat()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("Time-In"));
}

#[test]
fn test_report_lists_people_with_no_events() {
    let db_path = setup_test_db("report_no_events");
    init_db_with_roster(&db_path);

    rat()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("Alice Cruz"))
        .stdout(contains("Ben Reyes"))
        .stdout(contains("No Records"));
}

#[test]
fn test_report_json_output() {
    let db_path = setup_test_db("report_json");
    init_db_with_roster(&db_path);

    check_at(&db_path, "F002", "in", "2026-01-15 08:45:00");

    rat()
        .args(["--db", &db_path, "report", "--json"])
        .assert()
        .success()
        .stdout(contains("\"faculty_id\": \"F002\""))
        .stdout(contains("\"note\": \"Time-In\""));
}

#[test]
fn test_report_csv_export() {
    let db_path = setup_test_db("report_csv");
    let out = temp_out("report_csv", "csv");
    init_db_with_roster(&db_path);

    check_at(&db_path, "F001", "in", "2026-01-15 08:00:00");
    check_at(&db_path, "F001", "out", "2026-01-15 16:00:00");

    rat()
        .args(["--db", &db_path, "report", "--export", &out])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("FacultyID,FullName,LastAction,HoursRendered,Note"));
    assert!(content.contains("properly done"));
}
