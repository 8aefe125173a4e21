use super::schema;
use crate::libs::config::Config;
use crate::libs::error::{ProjectsError, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DB_FILE_NAME: &str = "projects.db";

/// Hands out a fresh connection to the project database on every call.
#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    /// Uses the database path from the saved configuration.
    pub fn new() -> anyhow::Result<Db> {
        let path = Config::read()?.database_path()?;
        Ok(Db { path })
    }

    /// Points at an explicit database file, bypassing the configuration.
    ///
    /// Nothing is opened or created until [`Db::connect`] is called.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the SQLite file; created on first connect if missing
    pub fn with_path(path: impl Into<PathBuf>) -> Db {
        Db { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a new connection with foreign keys enforced and the schema in place.
    ///
    /// Missing tables are created on every connect, so a brand-new file is
    /// usable immediately. Existing tables are never altered.
    ///
    /// # Returns
    ///
    /// A ready-to-use connection owned by the caller.
    ///
    /// # Errors
    ///
    /// [`ProjectsError::StoreUnavailable`] when the file cannot be opened or
    /// the schema cannot be applied.
    pub fn connect(&self) -> Result<Connection> {
        debug!(path = %self.path.display(), "Connecting to database");

        let conn = Connection::open(&self.path)
            .and_then(|conn| {
                conn.execute_batch("PRAGMA foreign_keys = ON")?;
                schema::ensure(&conn)?;
                Ok(conn)
            })
            .map_err(|source| ProjectsError::StoreUnavailable {
                path: self.path.clone(),
                source,
            })?;

        debug!("Successfully connected");
        Ok(conn)
    }
}
