use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ProjectsError> = std::result::Result<T, E>;

/// Failures surfaced by the store, the service and the shell's input parsing.
#[derive(Debug, Error)]
pub enum ProjectsError {
    /// The database file could not be opened.
    #[error("Unable to open database {}: {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement or transaction failed. The transaction has been rolled back.
    #[error("{0}")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("Project with ID={0} does not exist.")]
    NotFound(i64),

    #[error("{0}")]
    InvalidInput(String),
}

impl ProjectsError {
    pub fn persistence<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Persistence(Box::new(err))
    }
}

impl From<rusqlite::Error> for ProjectsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::persistence(value)
    }
}
