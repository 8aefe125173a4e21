//! Display implementation for application messages.
//!
//! All user-facing text lives in this one `match`, so the shell, the
//! configuration wizard and the error reporting in `main` print the same
//! wording for the same event.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuHeader => "These are the available selections. Press the Enter key to quit:".to_string(),
            Message::MenuAddProject => "1) Add a project".to_string(),
            Message::MenuListProjects => "2) List projects".to_string(),
            Message::MenuSelectProject => "3) Select a project".to_string(),
            Message::NotWorkingWithProject => "You are not working with a project.".to_string(),
            Message::WorkingWithProject(project) => format!("You are working with project: {}", project),
            Message::InvalidSelection(selection) => format!("{} is not a valid selection. Try again.", selection),
            Message::SelectionFailed(error) => format!("Error: {} Try again.", error),
            Message::MenuExited => "Menu exited.".to_string(),

            // === PROJECT MESSAGES ===
            Message::ProjectsHeader => "Projects:".to_string(),
            Message::ProjectListItem(id, name) => format!("  {}: {}", id, name),
            Message::ProjectCreated(project) => format!("You have successfully created project: {}", project),

            // === PROMPTS ===
            Message::PromptMenuSelection => "Enter a menu selection".to_string(),
            Message::PromptProjectName => "Enter the project name".to_string(),
            Message::PromptEstimatedHours => "Enter the estimated hours".to_string(),
            Message::PromptActualHours => "Enter the actual hours".to_string(),
            Message::PromptDifficulty => "Enter the project difficulty (1-5)".to_string(),
            Message::PromptNotes => "Enter the project notes".to_string(),
            Message::PromptSelectProjectId => "Enter a project ID to select a project".to_string(),
            Message::PromptDatabasePath => "Enter the database file path".to_string(),

            // === INPUT ERRORS ===
            Message::InvalidNumber(input) => format!("{} is not a valid number.", input),
            Message::InvalidDecimal(input) => format!("{} is not a valid decimal number.", input),
            Message::ProjectIdRequired => "A project ID is required.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::UsingDatabase(path) => format!("Using database {}", path),
        };

        write!(f, "{}", text)
    }
}
