//! Course module (lesson) model

use serde::{Deserialize, Serialize};

/// Represents a single lesson within a course
///
/// Module ids are unique within their parent course and are the unit of
/// completion tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Module identifier, unique within the parent course (e.g., "wd-m1")
    pub id: String,

    /// Module title (e.g., "HTML Foundations")
    pub title: String,

    /// Short description of the lesson content
    #[serde(default)]
    pub description: String,

    /// Lesson length in minutes
    pub duration_minutes: u32,

    /// Location of the lesson video
    #[serde(default)]
    pub video_url: String,
}

impl Module {
    /// Create a new module
    ///
    /// # Arguments
    /// * `id` - Module identifier, unique within the course
    /// * `title` - Module title
    /// * `duration_minutes` - Lesson length in minutes
    #[must_use]
    pub const fn new(id: String, title: String, duration_minutes: u32) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            duration_minutes,
            video_url: String::new(),
        }
    }

    /// Human-readable duration label (e.g., "45 min")
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_creation() {
        let module = Module::new("wd-m1".to_string(), "HTML Foundations".to_string(), 55);

        assert_eq!(module.id, "wd-m1");
        assert_eq!(module.title, "HTML Foundations");
        assert_eq!(module.duration_minutes, 55);
        assert!(module.description.is_empty());
        assert!(module.video_url.is_empty());
    }

    #[test]
    fn test_duration_label() {
        let module = Module::new("m".to_string(), "Intro".to_string(), 45);
        assert_eq!(module.duration_label(), "45 min");
    }
}
