use crate::config::ValueRef;

pub const DB_SQLITE_PATH: ValueRef<'_> = ValueRef {
    names: &["db", "sqlite", "db-path"],
    def: "./db/test.db",
};
