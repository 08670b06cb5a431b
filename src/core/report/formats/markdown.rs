//! Markdown report generator
//!
//! Generates the learning dashboard in Markdown. These reports render well
//! in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        // Substitute header metadata
        output = output.replace("{{catalog_name}}", &ctx.catalog.name);
        output = output.replace("{{generated}}", &ctx.generated_label());

        // Substitute dashboard statistics
        output = output.replace("{{total_enrolled}}", &ctx.stats.total_enrolled.to_string());
        output = output.replace("{{in_progress}}", &ctx.stats.in_progress.to_string());
        output = output.replace("{{completed}}", &ctx.stats.completed.to_string());
        output = output.replace("{{total_hours}}", &ctx.total_hours_label());

        // Generate course and achievement sections
        let course_table = Self::generate_course_table(ctx);
        output = output.replace("{{course_table}}", &course_table);

        let achievements = Self::generate_achievements(ctx);
        output = output.replace("{{achievements}}", &achievements);

        // Catalog footer
        output = output.replace("{{catalog_size}}", &ctx.catalog.len().to_string());
        output = output.replace(
            "{{category_count}}",
            &ctx.catalog.categories().len().to_string(),
        );

        output
    }

    /// Generate the per-course progress table
    fn generate_course_table(ctx: &ReportContext) -> String {
        let rows = ctx.course_rows();
        if rows.is_empty() {
            return "_No enrollments yet._".to_string();
        }

        let mut table = String::new();
        table.push_str("| Course | Instructor | Category | Status | Progress | Modules | Last Accessed |\n");
        table.push_str("|---|---|---|---|---|---|---|\n");

        for row in rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {:.0}% | {}/{} | {} |",
                row.title,
                row.instructor,
                row.category,
                row.status,
                row.percent,
                row.completed_modules,
                row.module_count,
                row.last_accessed
            );
        }

        table
    }

    /// Generate the achievements list
    fn generate_achievements(ctx: &ReportContext) -> String {
        let achievements = ctx.achievements();
        if achievements.is_empty() {
            return "_No achievements earned yet._".to_string();
        }

        let mut list = String::new();
        for achievement in achievements {
            let _ = writeln!(list, "- **{}**: {}", achievement.title, achievement.detail);
        }

        list
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
