//! SQLite database implementation.

use std::fs;
use std::path::Path;
use log::debug;
use rusqlite::Connection;
use crate::db::{DbError, DbResult, DbResults, StoredUser, UserId};

mod dbtypes;
mod read;
mod write;

/// SQLite [`Db`](crate::db::Db) implementation.
///
/// Owns the connection handle; dropping it releases the handle on every exit
/// path.
#[derive(Debug)]
pub struct Db { conn: Connection }

/// Initialise the database schema.  Safe to run against a database that
/// already has the tables.
fn init_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(dbtypes::SCHEMA_SQL)
        .map_err(|e| DbError::Schema { msg: e.to_string() })
}

/// Connect to the database and perform any required initialisation.
///
/// Missing parent directories are created first, like the storage engine
/// creates a missing database file.
pub fn open(db_path: &Path) -> DbResult<Db> {
    let db_path_parent = db_path.parent()
        .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
        .unwrap_or(db_path);

    fs::create_dir_all(db_path_parent)
        .map_err(|e| DbError::Open {
            path: db_path_parent.display().to_string(),
            msg: e.to_string(),
        })?;
    let conn = Connection::open(db_path)
        .map_err(|e| DbError::Open {
            path: db_path.display().to_string(),
            msg: e.to_string(),
        })?;
    init_schema(&conn)?;
    debug!("opened database ({})", db_path.display());
    Ok(Db { conn })
}

impl crate::db::Db for Db {
    fn insert_user(&mut self, name: &str) -> DbResult<UserId> {
        write::create_user(&self.conn, name)
    }

    fn get_users(&self) -> DbResults<StoredUser> {
        read::get_users(&self.conn)
    }

    fn user_count(&self) -> DbResult<u64> {
        read::user_count(&self.conn)
    }

    fn close(self) -> DbResult<()> {
        // on failure the handle comes back and its drop retries the close
        self.conn.close()
            .map_err(|(_conn, e)| DbError::Close { msg: e.to_string() })
    }
}
