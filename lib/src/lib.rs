//! Library for seeddb, a tool that bootstraps a local SQLite database: it
//! ensures the `users` table exists and seeds it with an initial row.

pub mod config;
mod configrefs;
pub mod db;
pub mod util;
