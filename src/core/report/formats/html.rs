//! HTML report generator
//!
//! Generates the learning dashboard as a single self-contained HTML page
//! with embedded CSS.

use crate::core::progress::CourseStatus;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        // Substitute header metadata
        output = output.replace("{{catalog_name}}", &ctx.catalog.name);
        output = output.replace("{{generated}}", &ctx.generated_label());

        // Substitute dashboard statistics
        output = output.replace("{{total_enrolled}}", &ctx.stats.total_enrolled.to_string());
        output = output.replace("{{in_progress}}", &ctx.stats.in_progress.to_string());
        output = output.replace("{{completed}}", &ctx.stats.completed.to_string());
        output = output.replace("{{total_hours}}", &ctx.total_hours_label());

        // Generate course and achievement sections
        let course_rows = Self::generate_course_rows(ctx);
        output = output.replace("{{course_rows}}", &course_rows);

        let achievement_items = Self::generate_achievement_items(ctx);
        output = output.replace("{{achievement_items}}", &achievement_items);

        // Catalog footer
        output = output.replace("{{catalog_size}}", &ctx.catalog.len().to_string());
        output = output.replace(
            "{{category_count}}",
            &ctx.catalog.categories().len().to_string(),
        );

        output
    }

    /// CSS badge class for a completion status
    const fn status_class(status: CourseStatus) -> &'static str {
        match status {
            CourseStatus::NotStarted => "status-not-started",
            CourseStatus::InProgress => "status-in-progress",
            CourseStatus::Completed => "status-completed",
        }
    }

    /// Generate the per-course progress rows
    fn generate_course_rows(ctx: &ReportContext) -> String {
        let rows = ctx.course_rows();
        if rows.is_empty() {
            return "<tr><td colspan=\"7\" class=\"empty\">No enrollments yet.</td></tr>".to_string();
        }

        let mut html = String::new();
        for row in rows {
            let status_class = Self::status_class(row.status);
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td>\
                 <td><span class=\"badge {status_class}\">{}</span></td>\
                 <td><div class=\"bar\"><div class=\"fill\" style=\"width:{:.0}%\"></div></div>\
                 <span class=\"percent\">{:.0}%</span></td>\
                 <td>{}/{}</td><td>{}</td></tr>",
                row.title,
                row.instructor,
                row.category,
                row.status,
                row.percent,
                row.percent,
                row.completed_modules,
                row.module_count,
                row.last_accessed
            );
        }

        html
    }

    /// Generate the achievements list items
    fn generate_achievement_items(ctx: &ReportContext) -> String {
        let achievements = ctx.achievements();
        if achievements.is_empty() {
            return "<li class=\"empty\">No achievements earned yet.</li>".to_string();
        }

        let mut html = String::new();
        for achievement in achievements {
            let _ = writeln!(
                html,
                "<li><span class=\"title\">{}</span> <span class=\"detail\">{}</span></li>",
                achievement.title, achievement.detail
            );
        }

        html
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Course, Level, Module};
    use crate::core::progress::ProgressStore;

    fn sample_world() -> (Catalog, ProgressStore) {
        let mut catalog = Catalog::new("Test Academy".to_string());
        let mut course = Course::new(
            "alpha".to_string(),
            "Alpha Course".to_string(),
            "Alex Instructor".to_string(),
            "Testing".to_string(),
            Level::Beginner,
            4.0,
        );
        course.add_module(Module::new("m1".to_string(), "One".to_string(), 30));
        catalog.add_course(course);

        let mut store = ProgressStore::new();
        store.enroll(&catalog, "alpha");
        store.mark_module_complete(&catalog, "alpha", "m1");
        (catalog, store)
    }

    #[test]
    fn renders_self_contained_page() {
        let (catalog, store) = sample_world();
        let ctx = ReportContext::new(&catalog, &store);

        let rendered = HtmlReporter::new().render(&ctx).unwrap();

        assert!(rendered.starts_with("<!DOCTYPE html>"));
        assert!(rendered.contains("Alpha Course"));
        assert!(rendered.contains("status-completed"));
        assert!(rendered.contains("width:100%"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn renders_empty_state_row() {
        let catalog = Catalog::new("Empty Academy".to_string());
        let store = ProgressStore::new();
        let ctx = ReportContext::new(&catalog, &store);

        let rendered = HtmlReporter::new().render(&ctx).unwrap();
        assert!(rendered.contains("No enrollments yet."));
        assert!(rendered.contains("No achievements earned yet."));
    }
}
