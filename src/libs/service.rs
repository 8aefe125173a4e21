//! Project use-cases on top of the data access layer.
//!
//! The service adds no validation of its own. Its one piece of policy is that
//! a project requested by id must exist: an empty lookup becomes
//! [`ProjectsError::NotFound`].

use super::error::{ProjectsError, Result};
use super::project::Project;
use crate::db::db::Db;
use crate::db::projects::Projects;

pub struct ProjectService {
    projects: Projects,
}

impl ProjectService {
    /// Builds the service on top of a [`Projects`] store for `db`.
    pub fn new(db: Db) -> Self {
        Self {
            projects: Projects::new(db),
        }
    }

    /// Persists a new project.
    ///
    /// # Arguments
    ///
    /// * `project` - Project assembled from user input, without an id
    ///
    /// # Returns
    ///
    /// The stored project carrying its new id, or `Persistence` if the
    /// store rejects it (for example a missing name).
    pub fn add_project(&self, project: Project) -> Result<Project> {
        self.projects.insert(project)
    }

    /// Every project ordered by name, without related rows.
    pub fn fetch_all_projects(&self) -> Result<Vec<Project>> {
        self.projects.fetch_all()
    }

    /// Returns the project with its related rows, or `NotFound` carrying the requested id.
    pub fn fetch_project_by_id(&self, project_id: i64) -> Result<Project> {
        self.projects
            .fetch_by_id(project_id)?
            .ok_or(ProjectsError::NotFound(project_id))
    }
}
