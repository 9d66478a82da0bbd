//! Helpers for writing to the database.

use rusqlite::{named_params, Connection};
use crate::db::{DbError, DbResult, UserId};
use super::dbtypes::table::USERS;

pub fn create_user(conn: &Connection, name: &str) -> DbResult<UserId> {
    conn.execute(format!("
        INSERT INTO {USERS} (name)
        VALUES (:name)
    ").as_ref(), named_params! {
        ":name": name,
    })
        .map(|_| conn.last_insert_rowid())
        .map_err(|e| DbError::Insert { msg: e.to_string() })
}
