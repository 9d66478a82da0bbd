pub const SCHEMA_SQL: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        name TEXT
    )
";

pub mod table {
    pub const USERS: &str = "users";
}
