//! Project records and the rows owned by or linked to them.
//!
//! Each record kind maps its row by column name, so a `SELECT *` against a
//! table with reordered columns still yields the same record.

use super::hours::Hours;
use rusqlite::Row;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
    pub materials: Vec<Material>,
    pub steps: Vec<Step>,
    pub categories: Vec<Category>,
}

impl Project {
    pub fn new(
        project_name: Option<String>,
        estimated_hours: Option<Hours>,
        actual_hours: Option<Hours>,
        difficulty: Option<i32>,
        notes: Option<String>,
    ) -> Self {
        Project {
            project_id: None,
            project_name,
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
            materials: Vec::new(),
            steps: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Maps a `project` row. Related collections are left empty.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Project {
            project_id: row.get("project_id")?,
            project_name: row.get("project_name")?,
            estimated_hours: row.get("estimated_hours")?,
            actual_hours: row.get("actual_hours")?,
            difficulty: row.get("difficulty")?,
            notes: row.get("notes")?,
            materials: Vec::new(),
            steps: Vec::new(),
            categories: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub material_id: Option<i64>,
    pub project_id: Option<i64>,
    pub material_name: String,
    pub num_required: Option<i32>,
    pub cost: Option<Hours>,
}

impl Material {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Material {
            material_id: row.get("material_id")?,
            project_id: row.get("project_id")?,
            material_name: row.get("material_name")?,
            num_required: row.get("num_required")?,
            cost: row.get("cost")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub step_id: Option<i64>,
    pub project_id: Option<i64>,
    pub step_text: String,
    pub step_order: i32,
}

impl Step {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Step {
            step_id: row.get("step_id")?,
            project_id: row.get("project_id")?,
            step_text: row.get("step_text")?,
            step_order: row.get("step_order")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub category_id: Option<i64>,
    pub category_name: String,
}

impl Category {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Category {
            category_id: row.get("category_id")?,
            category_name: row.get("category_name")?,
        })
    }
}

struct Field<'a, T>(&'a Option<T>);

impl<T: Display> Display for Field<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("null"),
        }
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n   ID={}", Field(&self.project_id))?;
        writeln!(f, "   name={}", Field(&self.project_name))?;
        writeln!(f, "   estimatedHours={}", Field(&self.estimated_hours))?;
        writeln!(f, "   actualHours={}", Field(&self.actual_hours))?;
        writeln!(f, "   difficulty={}", Field(&self.difficulty))?;
        writeln!(f, "   notes={}", Field(&self.notes))?;

        writeln!(f, "\n   Materials:")?;
        for material in &self.materials {
            writeln!(f, "      {}", material)?;
        }

        writeln!(f, "\n   Steps:")?;
        for step in &self.steps {
            writeln!(f, "      {}", step)?;
        }

        writeln!(f, "\n   Categories:")?;
        for category in &self.categories {
            writeln!(f, "      {}", category)?;
        }
        Ok(())
    }
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID={}, materialName={}, numRequired={}, cost={}",
            Field(&self.material_id),
            self.material_name,
            Field(&self.num_required),
            Field(&self.cost)
        )
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ID={}, stepOrder={}, stepText={}", Field(&self.step_id), self.step_order, self.step_text)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ID={}, categoryName={}", Field(&self.category_id), self.category_name)
    }
}
