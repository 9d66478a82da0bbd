//! Helpers for reading from the database.

use rusqlite::{Connection, Row};
use crate::db::{DbError, DbResult, DbResults, StoredUser};
use super::dbtypes::table::USERS;

const USERS_SQL: &str = "id, name";

fn read_err<T, F>(f: F) -> DbResult<T>
where
    F: FnOnce() -> rusqlite::Result<T>,
{
    f().map_err(|e| DbError::Read { msg: e.to_string() })
}

/// for a result selected by [`USERS_SQL`]
fn user(r: &Row) -> rusqlite::Result<StoredUser> {
    Ok(StoredUser {
        id: r.get(0)?,
        name: r.get(1)?,
    })
}

pub fn get_users(conn: &Connection) -> DbResults<StoredUser> {
    read_err(|| {
        let mut stmt = conn.prepare(format!("
            SELECT {USERS_SQL} FROM {USERS}
            ORDER BY id
        ").as_ref())?;
        let rows = stmt.query_map((), |r| user(r))?;
        rows.collect()
    })
}

pub fn user_count(conn: &Connection) -> DbResult<u64> {
    read_err(|| {
        conn.query_row(
            format!("SELECT COUNT(*) FROM {USERS}").as_ref(),
            (),
            |r| r.get(0))
    })
}
