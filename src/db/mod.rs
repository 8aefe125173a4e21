//! Database layer for the project tracker.
//!
//! SQLite through `rusqlite`. [`db::Db`] opens a new connection for each
//! operation and makes sure the tables exist; [`projects::Projects`] issues
//! the parameterized statements and maps rows into records.

/// Connection provider.
pub mod db;

/// Project inserts and lookups, including materials, steps and categories.
pub mod projects;

/// Table definitions applied when a connection is opened.
pub mod schema;
