//! Course model

use super::Module;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// No prior experience assumed
    Beginner,
    /// Builds on introductory material
    Intermediate,
    /// Assumes solid working knowledge
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        };
        write!(f, "{as_str}")
    }
}

/// Represents a course in the catalog
///
/// Catalog data is immutable once loaded; learner state lives in the
/// progress store, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier (e.g., "web-dev-101")
    pub id: String,

    /// Course title (e.g., "Complete Web Development Bootcamp")
    pub title: String,

    /// Marketing description shown on catalog cards
    #[serde(default)]
    pub description: String,

    /// Instructor display name
    pub instructor: String,

    /// Category name (e.g., "Web Development")
    pub category: String,

    /// Difficulty level
    pub level: Level,

    /// List price in USD
    #[serde(default)]
    pub price: f32,

    /// Total course length in hours (can be fractional)
    pub duration_hours: f32,

    /// Average learner rating out of 5
    #[serde(default)]
    pub rating: f32,

    /// Number of enrolled students platform-wide
    #[serde(default)]
    pub students: u32,

    /// Ordered list of modules (lessons)
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `id` - Course identifier
    /// * `title` - Course title
    /// * `instructor` - Instructor display name
    /// * `category` - Category name
    /// * `level` - Difficulty level
    /// * `duration_hours` - Total course length in hours
    #[must_use]
    pub const fn new(
        id: String,
        title: String,
        instructor: String,
        category: String,
        level: Level,
        duration_hours: f32,
    ) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            instructor,
            category,
            level,
            price: 0.0,
            duration_hours,
            rating: 0.0,
            students: 0,
            modules: Vec::new(),
        }
    }

    /// Add a module to the course
    ///
    /// # Arguments
    /// * `module` - The module to add
    ///
    /// # Returns
    /// `true` if the module was added, `false` if a module with that id already exists
    pub fn add_module(&mut self, module: Module) -> bool {
        if self.has_module(&module.id) {
            return false;
        }
        self.modules.push(module);
        true
    }

    /// Get a module by its id
    ///
    /// # Arguments
    /// * `module_id` - Module identifier
    ///
    /// # Returns
    /// A reference to the module, or `None` if not found
    #[must_use]
    pub fn get_module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Returns whether the course contains a module with the given id
    #[must_use]
    pub fn has_module(&self, module_id: &str) -> bool {
        self.modules.iter().any(|m| m.id == module_id)
    }

    /// Number of modules in the course
    #[must_use]
    pub const fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Human-readable duration label (e.g., "10 hours")
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{} hours", self.duration_hours)
    }
}
