use super::db::Db;
use crate::libs::error::{ProjectsError, Result};
use crate::libs::project::{Category, Material, Project, Step};
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use tracing::{debug, info, warn};

const INSERT_PROJECT: &str = "INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_ALL_PROJECTS: &str = "SELECT * FROM project ORDER BY project_name";
const SELECT_PROJECT_BY_ID: &str = "SELECT * FROM project WHERE project_id = ?1";
const SELECT_MATERIALS_BY_PROJECT: &str = "SELECT * FROM material WHERE project_id = ?1 ORDER BY material_id";
const SELECT_STEPS_BY_PROJECT: &str = "SELECT * FROM step WHERE project_id = ?1 ORDER BY step_order, step_id";
const SELECT_CATEGORIES_BY_PROJECT: &str = "
    SELECT c.* FROM category c
    JOIN project_category pc ON c.category_id = pc.category_id
    WHERE pc.project_id = ?1
    ORDER BY c.category_name
";

/// Data access for the `project` table and the rows hanging off it.
///
/// Every public operation opens its own connection and runs inside a single
/// transaction. Any failure rolls that transaction back and is reported as
/// [`ProjectsError::Persistence`].
pub struct Projects {
    db: Db,
}

impl Projects {
    /// # Arguments
    ///
    /// * `db` - Connection factory used by every operation
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Inserts the project row and returns the project with its assigned id.
    ///
    /// Only the scalar fields are written; materials, steps and categories
    /// on the passed project are ignored.
    ///
    /// # Arguments
    ///
    /// * `project` - The project to store; any `project_id` it carries is overwritten
    ///
    /// # Returns
    ///
    /// The same project with `project_id` set to the new row id.
    pub fn insert(&self, mut project: Project) -> Result<Project> {
        let mut conn = self.open()?;

        let project_id = in_transaction(&mut conn, |tx| {
            tx.execute(
                INSERT_PROJECT,
                params![
                    project.project_name,
                    project.estimated_hours,
                    project.actual_hours,
                    project.difficulty,
                    project.notes
                ],
            )?;
            Ok(tx.last_insert_rowid())
        })?;

        info!(project_id, "Inserted project");
        project.project_id = Some(project_id);
        Ok(project)
    }

    /// All projects ordered by name. Related collections stay empty.
    pub fn fetch_all(&self) -> Result<Vec<Project>> {
        let mut conn = self.open()?;

        let projects = in_transaction(&mut conn, |tx| {
            let mut stmt = tx.prepare(SELECT_ALL_PROJECTS)?;
            let project_iter = stmt.query_map([], Project::from_row)?;

            let mut projects = Vec::new();
            for project in project_iter {
                projects.push(project?);
            }
            Ok(projects)
        })?;

        debug!(count = projects.len(), "Fetched projects");
        Ok(projects)
    }

    /// Loads one project together with its materials, steps and categories.
    ///
    /// # Arguments
    ///
    /// * `project_id` - Row id of the project
    ///
    /// # Returns
    ///
    /// `Ok(None)` for a missing id. A failure in any of the four queries
    /// rolls the whole read back and yields [`ProjectsError::Persistence`].
    pub fn fetch_by_id(&self, project_id: i64) -> Result<Option<Project>> {
        let mut conn = self.open()?;

        in_transaction(&mut conn, |tx| {
            let project = tx
                .query_row(SELECT_PROJECT_BY_ID, params![project_id], Project::from_row)
                .optional()?;

            let Some(mut project) = project else {
                debug!(project_id, "No project with this id");
                return Ok(None);
            };

            project.materials = fetch_materials(tx, project_id)?;
            project.steps = fetch_steps(tx, project_id)?;
            project.categories = fetch_categories(tx, project_id)?;
            Ok(Some(project))
        })
    }

    fn open(&self) -> Result<Connection> {
        self.db.connect().map_err(ProjectsError::persistence)
    }
}

/// Runs `op` in a transaction, committing on success and rolling back on failure.
fn in_transaction<T, F>(conn: &mut Connection, op: F) -> Result<T>
where
    F: FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
{
    let tx = conn.transaction()?;

    match op(&tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(err) => {
            warn!(error = %err, "Rolling back transaction");
            if let Err(rollback_err) = tx.rollback() {
                warn!(error = %rollback_err, "Rollback failed");
            }
            Err(ProjectsError::persistence(err))
        }
    }
}

fn fetch_materials(conn: &Connection, project_id: i64) -> rusqlite::Result<Vec<Material>> {
    let mut stmt = conn.prepare(SELECT_MATERIALS_BY_PROJECT)?;
    let material_iter = stmt.query_map(params![project_id], Material::from_row)?;

    let mut materials = Vec::new();
    for material in material_iter {
        materials.push(material?);
    }
    Ok(materials)
}

fn fetch_steps(conn: &Connection, project_id: i64) -> rusqlite::Result<Vec<Step>> {
    let mut stmt = conn.prepare(SELECT_STEPS_BY_PROJECT)?;
    let step_iter = stmt.query_map(params![project_id], Step::from_row)?;

    let mut steps = Vec::new();
    for step in step_iter {
        steps.push(step?);
    }
    Ok(steps)
}

fn fetch_categories(conn: &Connection, project_id: i64) -> rusqlite::Result<Vec<Category>> {
    let mut stmt = conn.prepare(SELECT_CATEGORIES_BY_PROJECT)?;
    let category_iter = stmt.query_map(params![project_id], Category::from_row)?;

    let mut categories = Vec::new();
    for category in category_iter {
        categories.push(category?);
    }
    Ok(categories)
}
