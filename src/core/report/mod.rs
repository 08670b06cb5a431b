//! Dashboard report generation
//!
//! Renders the current learning dashboard (statistics, per-course progress,
//! achievements) to Markdown or self-contained HTML.

pub mod formats;

use crate::core::models::Catalog;
use crate::core::progress::{CourseStatus, ProgressStore};
use crate::core::stats::{earned_achievements, humanize_last_accessed, Achievement, DashboardStats};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// One enrolled course, flattened for rendering
#[derive(Debug, Clone)]
pub struct CourseRow {
    /// Course identifier
    pub id: String,
    /// Course title
    pub title: String,
    /// Instructor display name
    pub instructor: String,
    /// Category name
    pub category: String,
    /// Derived completion status
    pub status: CourseStatus,
    /// Completion percentage in `0.0..=100.0`
    pub percent: f32,
    /// Number of completed modules
    pub completed_modules: usize,
    /// Total number of modules
    pub module_count: usize,
    /// Humanized last-accessed label (e.g., "Yesterday")
    pub last_accessed: String,
}

/// Data context for report generation
///
/// Aggregates everything a report template needs, so formats only decide how
/// to lay it out.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Catalog the enrollments refer to
    pub catalog: &'a Catalog,
    /// Current progress state
    pub store: &'a ProgressStore,
    /// Dashboard statistics at generation time
    pub stats: DashboardStats,
    /// Timestamp rendered into the report header
    pub generated_at: DateTime<Utc>,
}

impl<'a> ReportContext<'a> {
    /// Create a report context over the current state
    #[must_use]
    pub fn new(catalog: &'a Catalog, store: &'a ProgressStore) -> Self {
        Self {
            catalog,
            store,
            stats: DashboardStats::compute(catalog, store),
            generated_at: Utc::now(),
        }
    }

    /// Header timestamp label
    #[must_use]
    pub fn generated_label(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }

    /// Total-hours label without trailing zeros (e.g., "23" or "14.5")
    #[must_use]
    pub fn total_hours_label(&self) -> String {
        self.stats.total_hours.to_string()
    }

    /// Achievements earned at the current statistics
    #[must_use]
    pub fn achievements(&self) -> Vec<Achievement> {
        earned_achievements(&self.stats)
    }

    /// Flattened rows for every enrolled course, in enrollment order
    #[must_use]
    pub fn course_rows(&self) -> Vec<CourseRow> {
        self.store
            .enrolled_ids()
            .iter()
            .filter_map(|course_id| {
                let course = self.catalog.get_course(course_id)?;
                let record = self.store.get_progress(course_id)?;
                Some(CourseRow {
                    id: course.id.clone(),
                    title: course.title.clone(),
                    instructor: course.instructor.clone(),
                    category: course.category.clone(),
                    status: record.status(),
                    percent: record.total_progress,
                    completed_modules: record.completed_count(),
                    module_count: course.module_count(),
                    last_accessed: humanize_last_accessed(record.last_accessed, self.generated_at),
                })
            })
            .collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Level, Module};

    fn sample_world() -> (Catalog, ProgressStore) {
        let mut catalog = Catalog::new("Test Academy".to_string());
        let mut course = Course::new(
            "alpha".to_string(),
            "Alpha Course".to_string(),
            "Alex Instructor".to_string(),
            "Testing".to_string(),
            Level::Beginner,
            10.0,
        );
        course.add_module(Module::new("m1".to_string(), "One".to_string(), 30));
        course.add_module(Module::new("m2".to_string(), "Two".to_string(), 30));
        catalog.add_course(course);

        let mut store = ProgressStore::new();
        store.enroll(&catalog, "alpha");
        store.mark_module_complete(&catalog, "alpha", "m1");
        (catalog, store)
    }

    #[test]
    fn context_builds_rows_in_enrollment_order() {
        let (catalog, store) = sample_world();
        let ctx = ReportContext::new(&catalog, &store);

        let rows = ctx.course_rows();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.id, "alpha");
        assert_eq!(row.status, CourseStatus::InProgress);
        assert!((row.percent - 50.0).abs() < f32::EPSILON);
        assert_eq!(row.completed_modules, 1);
        assert_eq!(row.module_count, 2);
        assert_eq!(row.last_accessed, "Today");
    }

    #[test]
    fn context_stats_match_store() {
        let (catalog, store) = sample_world();
        let ctx = ReportContext::new(&catalog, &store);

        assert_eq!(ctx.stats.total_enrolled, 1);
        assert_eq!(ctx.stats.in_progress, 1);
        assert_eq!(ctx.total_hours_label(), "10");
    }
}
