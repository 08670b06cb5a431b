//! Catalog model

use super::{Course, Level};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Search and filter criteria for catalog queries
///
/// All criteria are optional; a default filter matches every course.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Case-insensitive search term matched against title, description, and instructor
    pub term: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    /// Difficulty level
    pub level: Option<Level>,
}

impl CatalogFilter {
    /// Returns whether a course satisfies every criterion in this filter
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(term) = &self.term {
            let needle = term.to_lowercase();
            let hit = course.title.to_lowercase().contains(&needle)
                || course.description.to_lowercase().contains(&needle)
                || course.instructor.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &course.category != category {
                return false;
            }
        }

        if let Some(level) = self.level {
            if course.level != level {
                return false;
            }
        }

        true
    }
}

/// Represents the full course catalog
///
/// Courses keep their insertion order, which the catalog treats as the
/// curated display order (the first few entries are the featured ones).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog display name (e.g., "LearnTrack Academy")
    pub name: String,

    /// Courses in curated order
    #[serde(default)]
    courses: Vec<Course>,
}

impl Catalog {
    /// Create a new, empty catalog
    ///
    /// # Arguments
    /// * `name` - Catalog display name
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            courses: Vec::new(),
        }
    }

    /// Add a course to the catalog
    ///
    /// # Arguments
    /// * `course` - The course to add
    ///
    /// # Returns
    /// `true` if the course was added, `false` if a course with that id already exists
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.contains(&course.id) {
            return false;
        }
        self.courses.push(course);
        true
    }

    /// Get a course by its id
    ///
    /// # Arguments
    /// * `course_id` - Course identifier (e.g., "web-dev-101")
    ///
    /// # Returns
    /// A reference to the course, or `None` if not found
    #[must_use]
    pub fn get_course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Returns whether the catalog contains a course with the given id
    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c.id == course_id)
    }

    /// All courses in curated order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses in the catalog
    #[must_use]
    pub const fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns whether the catalog has no courses
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Distinct category names in first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.courses
            .iter()
            .map(|c| c.category.as_str())
            .filter(|cat| seen.insert(*cat))
            .collect()
    }

    /// The first `n` courses in curated order (the homepage picks)
    #[must_use]
    pub fn featured(&self, n: usize) -> &[Course] {
        &self.courses[..n.min(self.courses.len())]
    }

    /// Courses matching a filter, in curated order
    #[must_use]
    pub fn search(&self, filter: &CatalogFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Validate catalog integrity
    ///
    /// Deserialized catalogs bypass [`add_course`](Self::add_course), so
    /// duplicate ids have to be caught here.
    ///
    /// # Returns
    /// `Ok(())` if the catalog is well formed, `Err(Vec<String>)` with one
    /// message per problem found
    ///
    /// # Errors
    /// Returns `Err` when a course id is empty or duplicated, or when a
    /// module id is empty or duplicated within its course
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        let mut course_ids = HashSet::new();

        for course in &self.courses {
            if course.id.trim().is_empty() {
                problems.push(format!("Course '{}': empty id", course.title));
            } else if !course_ids.insert(course.id.as_str()) {
                problems.push(format!("Duplicate course id '{}'", course.id));
            }

            let mut module_ids = HashSet::new();
            for module in &course.modules {
                if module.id.trim().is_empty() {
                    problems.push(format!(
                        "Course '{}': module '{}' has an empty id",
                        course.id, module.title
                    ));
                } else if !module_ids.insert(module.id.as_str()) {
                    problems.push(format!(
                        "Course '{}': duplicate module id '{}'",
                        course.id, module.id
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Module;

    fn course(id: &str, title: &str, category: &str, level: Level) -> Course {
        Course::new(
            id.to_string(),
            title.to_string(),
            "Alex Instructor".to_string(),
            category.to_string(),
            level,
            8.0,
        )
    }

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new("Test Academy".to_string());
        catalog.add_course(course(
            "web-dev",
            "Web Development Bootcamp",
            "Web Development",
            Level::Beginner,
        ));
        catalog.add_course(course(
            "data-sci",
            "Data Science Fundamentals",
            "Data Science",
            Level::Intermediate,
        ));
        catalog.add_course(course(
            "ui-ux",
            "UI/UX Design Principles",
            "Design",
            Level::Beginner,
        ));
        catalog.add_course(course(
            "ml-adv",
            "Advanced Machine Learning",
            "Data Science",
            Level::Advanced,
        ));
        catalog
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new("Test Academy".to_string());

        assert_eq!(catalog.name, "Test Academy");
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_add_and_get_course() {
        let catalog = sample_catalog();

        let retrieved = catalog.get_course("web-dev");
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().title, "Web Development Bootcamp");

        assert!(catalog.contains("data-sci"));
        assert!(!catalog.contains("missing"));
    }

    #[test]
    fn test_add_duplicate_course() {
        let mut catalog = sample_catalog();

        let duplicate = course("web-dev", "Different Title", "Design", Level::Advanced);
        assert!(!catalog.add_course(duplicate));

        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.get_course("web-dev").unwrap().title,
            "Web Development Bootcamp"
        );
    }

    #[test]
    fn test_courses_keep_curated_order() {
        let catalog = sample_catalog();

        let ids: Vec<&str> = catalog.courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["web-dev", "data-sci", "ui-ux", "ml-adv"]);
    }

    #[test]
    fn test_categories_distinct_first_seen() {
        let catalog = sample_catalog();

        assert_eq!(
            catalog.categories(),
            vec!["Web Development", "Data Science", "Design"]
        );
    }

    #[test]
    fn test_featured_takes_leading_courses() {
        let catalog = sample_catalog();

        let featured = catalog.featured(3);
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].id, "web-dev");
        assert_eq!(featured[2].id, "ui-ux");

        // Asking for more than exists caps at the catalog size
        assert_eq!(catalog.featured(10).len(), 4);
    }

    #[test]
    fn test_search_by_term_is_case_insensitive() {
        let catalog = sample_catalog();

        let filter = CatalogFilter {
            term: Some("BOOTCAMP".to_string()),
            ..Default::default()
        };
        let results = catalog.search(&filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "web-dev");
    }

    #[test]
    fn test_search_matches_instructor() {
        let catalog = sample_catalog();

        let filter = CatalogFilter {
            term: Some("alex".to_string()),
            ..Default::default()
        };
        assert_eq!(catalog.search(&filter).len(), 4);
    }

    #[test]
    fn test_search_by_category() {
        let catalog = sample_catalog();

        let filter = CatalogFilter {
            category: Some("Data Science".to_string()),
            ..Default::default()
        };
        let results = catalog.search(&filter);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|c| c.category == "Data Science"));
    }

    #[test]
    fn test_search_by_level() {
        let catalog = sample_catalog();

        let filter = CatalogFilter {
            level: Some(Level::Beginner),
            ..Default::default()
        };
        assert_eq!(catalog.search(&filter).len(), 2);
    }

    #[test]
    fn test_search_combined_criteria() {
        let catalog = sample_catalog();

        let filter = CatalogFilter {
            term: Some("data".to_string()),
            category: Some("Data Science".to_string()),
            level: Some(Level::Intermediate),
        };
        let results = catalog.search(&filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "data-sci");
    }

    #[test]
    fn test_search_no_matches() {
        let catalog = sample_catalog();

        let filter = CatalogFilter {
            term: Some("quantum basket weaving".to_string()),
            ..Default::default()
        };
        assert!(catalog.search(&filter).is_empty());
    }

    #[test]
    fn test_validate_success() {
        let mut catalog = sample_catalog();
        if let Some(c) = catalog.courses.first_mut() {
            c.add_module(Module::new("m1".to_string(), "Intro".to_string(), 30));
            c.add_module(Module::new("m2".to_string(), "Next".to_string(), 40));
        }

        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_course_id() {
        // Build via the private field to simulate a deserialized catalog
        let mut catalog = sample_catalog();
        catalog
            .courses
            .push(course("web-dev", "Copy", "Design", Level::Beginner));

        let result = catalog.validate();
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("web-dev"));
    }

    #[test]
    fn test_validate_duplicate_module_id() {
        let mut catalog = sample_catalog();
        if let Some(c) = catalog.courses.first_mut() {
            c.modules
                .push(Module::new("m1".to_string(), "Intro".to_string(), 30));
            c.modules
                .push(Module::new("m1".to_string(), "Copy".to_string(), 40));
        }

        let result = catalog.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err()[0].contains("duplicate module id"));
    }
}
