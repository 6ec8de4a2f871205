use predicates::str::contains;

mod common;
use common::{init_db_with_roster, rat, setup_test_db};

use rattendance::db::pool::DbPool;
use rattendance::db::roster::lookup_faculty;

#[test]
fn test_register_then_lookup_preserves_fields() {
    let db_path = setup_test_db("register_lookup");
    init_db_with_roster(&db_path);

    let pool = DbPool::new(&db_path).expect("open db");
    let record = lookup_faculty(&pool, "F001")
        .expect("lookup")
        .expect("record should exist");

    assert_eq!(record.id, "F001");
    assert_eq!(record.full_name, "Alice Cruz");
    assert_eq!(record.department, "Math");
}

#[test]
fn test_lookup_absent_id_returns_none() {
    let db_path = setup_test_db("register_absent");
    init_db_with_roster(&db_path);

    let pool = DbPool::new(&db_path).expect("open db");
    let record = lookup_faculty(&pool, "NOPE").expect("lookup");

    assert!(record.is_none());
}

#[test]
fn test_register_duplicate_id_rejected() {
    let db_path = setup_test_db("register_dup");
    init_db_with_roster(&db_path);

    rat()
        .args(["--db", &db_path, "register", "F001", "Somebody Else", "Chem"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // stored record must be unchanged
    let pool = DbPool::new(&db_path).expect("open db");
    let record = lookup_faculty(&pool, "F001")
        .expect("lookup")
        .expect("record should exist");
    assert_eq!(record.full_name, "Alice Cruz");
    assert_eq!(record.department, "Math");
}

#[test]
fn test_register_rejects_empty_fields() {
    let db_path = setup_test_db("register_empty");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "register", "F010", "  ", "Math"])
        .assert()
        .failure()
        .stderr(contains("All fields are required"));
}

#[test]
fn test_register_success_message() {
    let db_path = setup_test_db("register_msg");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "register", "F003", "Carla Diaz", "Bio"])
        .assert()
        .success()
        .stdout(contains("Faculty Carla Diaz (ID: F003) added successfully."));
}
