//! Core library modules for the project tracker.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use projects::db::db::Db;
//! use projects::libs::project::Project;
//! use projects::libs::service::ProjectService;
//!
//! let service = ProjectService::new(Db::with_path("projects.db"));
//! let project = Project::new(Some("Build a bookshelf".to_string()), None, None, Some(2), None);
//! let project = service.add_project(project)?;
//! assert!(project.project_id.is_some());
//! # Ok::<(), projects::libs::error::ProjectsError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod hours;
pub mod messages;
pub mod project;
pub mod service;
pub mod shell;
