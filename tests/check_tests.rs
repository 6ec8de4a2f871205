use predicates::str::contains;

mod common;
use common::{check_at, init_db_with_roster, rat, setup_test_db};

use rattendance::db::attendance::count_attendance;
use rattendance::db::pool::DbPool;

#[test]
fn test_check_in_records_event() {
    let db_path = setup_test_db("check_in");
    init_db_with_roster(&db_path);

    rat()
        .args(["--db", &db_path, "check", "F001", "in"])
        .assert()
        .success()
        .stdout(contains("Attendance for Alice Cruz has been recorded."))
        .stdout(contains("Check-In"));

    let pool = DbPool::new(&db_path).expect("open db");
    assert_eq!(count_attendance(&pool).expect("count"), 1);
}

#[test]
fn test_check_unknown_id_fails() {
    let db_path = setup_test_db("check_unknown");
    init_db_with_roster(&db_path);

    rat()
        .args(["--db", &db_path, "check", "GHOST", "in"])
        .assert()
        .failure()
        .stderr(contains("'GHOST' not found"));
}

#[test]
fn test_check_invalid_action_fails() {
    let db_path = setup_test_db("check_badaction");
    init_db_with_roster(&db_path);

    rat()
        .args(["--db", &db_path, "check", "F001", "sideways"])
        .assert()
        .failure()
        .stderr(contains("Invalid action"));
}

#[test]
fn test_consecutive_identical_actions_accepted() {
    let db_path = setup_test_db("check_double_in");
    init_db_with_roster(&db_path);

    // two Check-Ins in a row: accepted, no alternation validation
    check_at(&db_path, "F001", "in", "2026-01-15 07:30:00");
    check_at(&db_path, "F001", "in", "2026-01-15 08:15:00");

    let pool = DbPool::new(&db_path).expect("open db");
    assert_eq!(count_attendance(&pool).expect("count"), 2);
}

#[test]
fn test_check_rejects_bad_timestamp_override() {
    let db_path = setup_test_db("check_bad_at");
    init_db_with_roster(&db_path);

    rat()
        .args(["--db", &db_path, "check", "F001", "in", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}
