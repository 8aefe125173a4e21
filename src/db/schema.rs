use rusqlite::{Connection, Result};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS project (
    project_id INTEGER NOT NULL PRIMARY KEY,
    project_name TEXT NOT NULL,
    estimated_hours DECIMAL(7,2),
    actual_hours DECIMAL(7,2),
    difficulty INT,
    notes TEXT
);
CREATE TABLE IF NOT EXISTS material (
    material_id INTEGER NOT NULL PRIMARY KEY,
    project_id INTEGER NOT NULL,
    material_name TEXT NOT NULL,
    num_required INT,
    cost DECIMAL(7,2),
    FOREIGN KEY (project_id) REFERENCES project (project_id) ON DELETE CASCADE
);
CREATE TABLE IF NOT EXISTS step (
    step_id INTEGER NOT NULL PRIMARY KEY,
    project_id INTEGER NOT NULL,
    step_text TEXT NOT NULL,
    step_order INT NOT NULL,
    FOREIGN KEY (project_id) REFERENCES project (project_id) ON DELETE CASCADE
);
CREATE TABLE IF NOT EXISTS category (
    category_id INTEGER NOT NULL PRIMARY KEY,
    category_name TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS project_category (
    project_id INTEGER NOT NULL,
    category_id INTEGER NOT NULL,
    PRIMARY KEY (project_id, category_id),
    FOREIGN KEY (project_id) REFERENCES project (project_id) ON DELETE CASCADE,
    FOREIGN KEY (category_id) REFERENCES category (category_id) ON DELETE CASCADE
);
";

/// Creates any of the five tables that do not exist yet. Existing tables are left alone.
pub fn ensure(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
}
