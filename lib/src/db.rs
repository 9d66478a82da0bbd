//! Database access for the bootstrap sequence.

use thiserror::Error;
use crate::config::{parse, Config};
use crate::configrefs;

mod sqlite;

/// Errors from database operations, one kind per bootstrap step.
///
/// Each is a thin wrapper around the storage engine's message; none is
/// recoverable for this tool.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("error opening database ({path}): {msg}")]
    Open { path: String, msg: String },
    #[error("error creating schema: {msg}")]
    Schema { msg: String },
    #[error("error inserting row: {msg}")]
    Insert { msg: String },
    #[error("error reading rows: {msg}")]
    Read { msg: String },
    #[error("error closing database: {msg}")]
    Close { msg: String },
}

pub type DbResult<T> = Result<T, DbError>;
pub type DbResults<T> = DbResult<Vec<T>>;

/// Row id assigned by the storage engine.
pub type UserId = i64;

/// A row of the `users` table as stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoredUser {
    pub id: UserId,
    pub name: Option<String>,
}

pub trait Db {
    /// Insert a user row, returning the engine-assigned id.
    ///
    /// The name reaches the statement through parameter binding, never
    /// through string concatenation.
    fn insert_user(&mut self, name: &str) -> DbResult<UserId>;

    /// All stored users, in id order.
    fn get_users(&self) -> DbResults<StoredUser>;

    fn user_count(&self) -> DbResult<u64>;

    /// Release the connection, surfacing any close-time error.
    ///
    /// Dropping a [`Db`] also releases the connection, so early-error paths
    /// never leak the handle; this method exists for the success path, where
    /// a close-time error should be reported.
    fn close(self) -> DbResult<()>;
}

/// Connect to the database at the configured path and perform any required
/// initialisation.
pub fn open<C>(cfg: &C) -> DbResult<impl Db>
where
    C: Config + ?Sized,
{
    sqlite::open(&parse::file_path(
        cfg.get_ref(&configrefs::DB_SQLITE_PATH)))
}
