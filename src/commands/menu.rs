use crate::{
    db::db::Db,
    libs::{messages::Message, service::ProjectService, shell::Shell},
    msg_debug,
};
use anyhow::Result;
use std::io;
use std::path::PathBuf;

/// Runs the interactive menu against stdin/stdout until the user exits.
pub fn cmd(database: Option<PathBuf>) -> Result<()> {
    let db = match database {
        Some(path) => Db::with_path(path),
        None => Db::new()?,
    };
    msg_debug!(Message::UsingDatabase(db.path().display().to_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(ProjectService::new(db), stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}
