//! File-backed tests for the database bootstrap sequence.

use std::collections::HashMap;
use std::path::Path;
use seeddb::config::map::{self, Entry};
use seeddb::db::{self, Db, DbError, StoredUser};
use seeddb::util;

const SEED_USER: &str = "John Doe";

fn cfg_for(db_path: &Path) -> map::Config {
    let mut sqlite = HashMap::new();
    sqlite.insert("db-path".to_owned(),
                  Entry::Value(db_path.display().to_string()));
    let mut dbsec = HashMap::new();
    dbsec.insert("sqlite".to_owned(), Entry::Section(sqlite));
    let mut root = HashMap::new();
    root.insert("db".to_owned(), Entry::Section(dbsec));
    map::new(root)
}

/// One full run of the bootstrap sequence: open, ensure schema, insert,
/// close.
fn run_sequence(db_path: &Path) -> Result<i64, DbError> {
    let mut db = db::open(&cfg_for(db_path))?;
    let id = db.insert_user(SEED_USER)?;
    db.close()?;
    Ok(id)
}

#[test]
fn fresh_file_gets_one_row() {
    let dir = tempfile::tempdir().unwrap();
    // nested path: open must create the parent directory too
    let db_path = dir.path().join("db").join("test.db");

    let id = run_sequence(&db_path).unwrap();
    assert_eq!(id, 1);
    assert!(util::path_exists(&db_path));

    let db = db::open(&cfg_for(&db_path)).unwrap();
    assert_eq!(db.get_users().unwrap(),
               vec![StoredUser { id: 1, name: Some(SEED_USER.to_owned()) }]);
}

#[test]
fn second_run_accumulates_duplicate_rows() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    let first = run_sequence(&db_path).unwrap();
    let second = run_sequence(&db_path).unwrap();
    assert_ne!(first, second);

    let db = db::open(&cfg_for(&db_path)).unwrap();
    let users = db.get_users().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter()
        .all(|u| u.name.as_deref() == Some(SEED_USER)));
    assert_eq!(db.user_count().unwrap(), 2);
}

#[test]
fn schema_creation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    // open runs the schema batch each time; the second open must not fail
    // and must not reset existing rows
    run_sequence(&db_path).unwrap();
    let db = db::open(&cfg_for(&db_path)).unwrap();
    assert_eq!(db.user_count().unwrap(), 1);
    db.close().unwrap();
}

#[test]
fn unwritable_path_fails_open() {
    let dir = tempfile::tempdir().unwrap();
    // a regular file where a parent directory is needed
    let blocker = dir.path().join("blocker");
    util::create_file(&blocker).unwrap();
    let db_path = blocker.join("db").join("test.db");

    let err = run_sequence(&db_path).unwrap_err();
    assert!(matches!(err, DbError::Open { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("error opening database"));
    assert!(!util::path_exists(&db_path));
}

#[test]
fn corrupt_file_fails_schema_creation() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    std::fs::write(&db_path, "not an sqlite file").unwrap();

    // the engine only notices the bad header when the DDL runs
    let err = run_sequence(&db_path).unwrap_err();
    assert!(matches!(err, DbError::Schema { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("error creating schema"));
}

#[test]
fn conflicting_table_fails_insert() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    // an existing users table without a name column: schema creation is a
    // no-op, the insert is what fails
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute_batch("CREATE TABLE users (id INTEGER PRIMARY KEY)")
        .unwrap();
    conn.close().unwrap();

    let err = run_sequence(&db_path).unwrap_err();
    assert!(matches!(err, DbError::Insert { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("error inserting row"));
}

#[test]
fn insert_binds_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    // a name with a quote must be bound, not spliced into the statement
    let mut db = db::open(&cfg_for(&db_path)).unwrap();
    db.insert_user("O'Brien; DROP TABLE users").unwrap();
    let users = db.get_users().unwrap();
    assert_eq!(users[0].name.as_deref(), Some("O'Brien; DROP TABLE users"));
}

#[test]
fn ids_are_assigned_by_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    let mut db = db::open(&cfg_for(&db_path)).unwrap();
    let ids: Vec<i64> = (0..3)
        .map(|_| db.insert_user(SEED_USER).unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
