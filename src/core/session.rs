//! Interactive learning session
//!
//! The engine behind the `learn` command. A session owns the catalog and the
//! progress store for its lifetime; every user action is parsed into a
//! [`SessionCommand`] and dispatched through [`Session::handle`], which
//! returns the rendered reply. Keeping the loop free of terminal I/O makes
//! whole sessions scriptable in tests.

use crate::core::models::{Catalog, CatalogFilter, Course};
use crate::core::progress::{CourseStatus, ProgressStore};
use crate::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use crate::core::stats::{earned_achievements, filter_enrolled, DashboardFilter, DashboardStats};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;

/// A parsed session command
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// List the full catalog
    Courses,
    /// Search the catalog by term
    Search(String),
    /// Show one course in detail
    Show(String),
    /// Enroll in a course
    Enroll(String),
    /// Mark a module of an enrolled course as completed
    Complete {
        /// Course the module belongs to
        course_id: String,
        /// Module to mark
        module_id: String,
    },
    /// Show the progress record for a course
    Progress(String),
    /// Show the dashboard, optionally filtered
    Dashboard(DashboardFilter),
    /// Export the dashboard report
    Export {
        /// Output format
        format: ReportFormat,
        /// Explicit output path; defaults into the configured reports dir
        output: Option<PathBuf>,
    },
    /// Show command help
    Help,
    /// End the session
    Quit,
    /// Blank input, ignored
    Empty,
}

impl SessionCommand {
    /// Parse a command from one line of user input
    ///
    /// # Errors
    /// Returns a usage message when the command is unknown or its arguments
    /// are missing or malformed
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Self::Empty);
        };

        match command.to_lowercase().as_str() {
            "courses" | "list" => Ok(Self::Courses),
            "search" => {
                let term = words.collect::<Vec<_>>().join(" ");
                if term.is_empty() {
                    Err("Usage: search <term>".to_string())
                } else {
                    Ok(Self::Search(term))
                }
            }
            "show" => one_arg(words.next(), "Usage: show <course-id>").map(Self::Show),
            "enroll" => one_arg(words.next(), "Usage: enroll <course-id>").map(Self::Enroll),
            "complete" => {
                let course_id = words.next();
                let module_id = words.next();
                match (course_id, module_id) {
                    (Some(course_id), Some(module_id)) => Ok(Self::Complete {
                        course_id: course_id.to_string(),
                        module_id: module_id.to_string(),
                    }),
                    _ => Err("Usage: complete <course-id> <module-id>".to_string()),
                }
            }
            "progress" => one_arg(words.next(), "Usage: progress <course-id>").map(Self::Progress),
            "dashboard" => match words.next() {
                None => Ok(Self::Dashboard(DashboardFilter::All)),
                Some(token) => DashboardFilter::from_str(token)
                    .map(Self::Dashboard)
                    .map_err(|_| {
                        "Usage: dashboard [all|in-progress|completed]".to_string()
                    }),
            },
            "export" => {
                let format = match words.next() {
                    Some(token) => ReportFormat::from_str(token)
                        .map_err(|_| "Usage: export <markdown|html> [path]".to_string())?,
                    None => return Err("Usage: export <markdown|html> [path]".to_string()),
                };
                let output = words.next().map(PathBuf::from);
                Ok(Self::Export { format, output })
            }
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!(
                "Unknown command '{other}'. Type 'help' for the command list."
            )),
        }
    }
}

fn one_arg(arg: Option<&str>, usage: &str) -> Result<String, String> {
    arg.map_or_else(|| Err(usage.to_string()), |a| Ok(a.to_string()))
}

/// Rendered outcome of one handled command
#[derive(Debug, Clone)]
pub struct SessionReply {
    /// Text to present to the user (may be empty)
    pub text: String,
    /// Whether the session should end
    pub quit: bool,
}

impl SessionReply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }

    const fn quit(text: String) -> Self {
        Self { text, quit: true }
    }
}

/// An interactive learning session over one catalog
///
/// Progress state lives only inside the session and is dropped with it.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    store: ProgressStore,
    reports_dir: PathBuf,
}

impl Session {
    /// Create a session over a catalog
    ///
    /// # Arguments
    /// * `catalog` - Catalog to browse and enroll from
    /// * `reports_dir` - Directory `export` writes reports into
    #[must_use]
    pub fn new(catalog: Catalog, reports_dir: PathBuf) -> Self {
        Self {
            catalog,
            store: ProgressStore::new(),
            reports_dir,
        }
    }

    /// The catalog this session browses
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current progress state
    #[must_use]
    pub const fn store(&self) -> &ProgressStore {
        &self.store
    }

    /// Parse and handle one line of input
    pub fn handle_line(&mut self, line: &str) -> SessionReply {
        match SessionCommand::parse(line) {
            Ok(command) => self.handle(command),
            Err(message) => SessionReply::text(format!("✗ {message}")),
        }
    }

    /// Handle a parsed command
    pub fn handle(&mut self, command: SessionCommand) -> SessionReply {
        match command {
            SessionCommand::Courses => SessionReply::text(self.render_course_table(
                &self.catalog.courses().iter().collect::<Vec<_>>(),
            )),
            SessionCommand::Search(term) => self.handle_search(&term),
            SessionCommand::Show(course_id) => self.handle_show(&course_id),
            SessionCommand::Enroll(course_id) => self.handle_enroll(&course_id),
            SessionCommand::Complete {
                course_id,
                module_id,
            } => self.handle_complete(&course_id, &module_id),
            SessionCommand::Progress(course_id) => self.handle_progress(&course_id),
            SessionCommand::Dashboard(filter) => self.handle_dashboard(filter),
            SessionCommand::Export { format, output } => self.handle_export(format, output),
            SessionCommand::Help => SessionReply::text(HELP_TEXT),
            SessionCommand::Quit => SessionReply::quit("Goodbye!".to_string()),
            SessionCommand::Empty => SessionReply::text(String::new()),
        }
    }

    fn handle_search(&self, term: &str) -> SessionReply {
        let filter = CatalogFilter {
            term: Some(term.to_string()),
            ..Default::default()
        };
        let matches = self.catalog.search(&filter);
        if matches.is_empty() {
            return SessionReply::text(format!("No courses match '{term}'."));
        }
        SessionReply::text(self.render_course_table(&matches))
    }

    fn handle_show(&self, course_id: &str) -> SessionReply {
        let Some(course) = self.catalog.get_course(course_id) else {
            return SessionReply::text(format!("✗ No course with id '{course_id}'."));
        };

        let mut text = String::new();
        let _ = writeln!(text, "{} ({})", course.title, course.id);
        let _ = writeln!(
            text,
            "{} | {} | {} | {} | ★{} | {} students",
            course.instructor,
            course.category,
            course.level,
            course.duration_label(),
            course.rating,
            course.students
        );
        if !course.description.is_empty() {
            let _ = writeln!(text, "\n{}", course.description);
        }

        let record = self.store.get_progress(course_id);
        let _ = writeln!(text, "\nModules:");
        for module in &course.modules {
            let done = record.is_some_and(|r| r.is_module_complete(&module.id));
            let mark = if done { "x" } else { " " };
            let _ = writeln!(
                text,
                "  [{mark}] {:<10} {} ({})",
                module.id,
                module.title,
                module.duration_label()
            );
        }

        match record {
            Some(record) => {
                let _ = writeln!(
                    text,
                    "\nProgress: {} {:.0}% ({}/{} modules)",
                    render_bar(record.total_progress),
                    record.total_progress,
                    record.completed_count(),
                    course.module_count()
                );
            }
            None => {
                let _ = writeln!(
                    text,
                    "\nNot enrolled. Use 'enroll {course_id}' to start learning."
                );
            }
        }

        SessionReply::text(text)
    }

    fn handle_enroll(&mut self, course_id: &str) -> SessionReply {
        let Some(course) = self.catalog.get_course(course_id) else {
            return SessionReply::text(format!("✗ No course with id '{course_id}'."));
        };
        let title = course.title.clone();

        if self.store.enroll(&self.catalog, course_id) {
            SessionReply::text(format!("✓ Enrolled in '{title}'."))
        } else {
            SessionReply::text(format!("Already enrolled in '{title}'."))
        }
    }

    fn handle_complete(&mut self, course_id: &str, module_id: &str) -> SessionReply {
        let Some(course) = self.catalog.get_course(course_id) else {
            return SessionReply::text(format!("✗ No course with id '{course_id}'."));
        };
        if !course.has_module(module_id) {
            return SessionReply::text(format!(
                "✗ No module '{module_id}' in '{course_id}'."
            ));
        }
        if !self.store.is_enrolled(course_id) {
            return SessionReply::text(format!(
                "✗ Not enrolled in '{course_id}'. Use 'enroll {course_id}' first."
            ));
        }

        let course_title = course.title.clone();
        let module_title = course
            .get_module(module_id)
            .map_or_else(|| module_id.to_string(), |m| m.title.clone());

        if self.store.mark_module_complete(&self.catalog, course_id, module_id) {
            // Record exists after a successful mark
            let percent = self
                .store
                .get_progress(course_id)
                .map_or(0.0, |r| r.total_progress);
            SessionReply::text(format!(
                "✓ Completed '{module_title}' ({percent:.0}% of '{course_title}')."
            ))
        } else {
            SessionReply::text(format!("Module '{module_title}' is already completed."))
        }
    }

    fn handle_progress(&self, course_id: &str) -> SessionReply {
        let Some(record) = self.store.get_progress(course_id) else {
            return SessionReply::text(format!("Not enrolled in '{course_id}'."));
        };

        let title = self
            .catalog
            .get_course(course_id)
            .map_or(course_id, |c| c.title.as_str());

        let mut text = String::new();
        let _ = writeln!(text, "{title}: {}", record.status());
        let _ = writeln!(
            text,
            "Progress: {} {:.0}%",
            render_bar(record.total_progress),
            record.total_progress
        );
        if record.completed_modules.is_empty() {
            let _ = writeln!(text, "No modules completed yet.");
        } else {
            let completed: Vec<&str> = record
                .completed_modules
                .iter()
                .map(String::as_str)
                .collect();
            let _ = writeln!(text, "Completed modules: {}", completed.join(", "));
        }

        SessionReply::text(text)
    }

    fn handle_dashboard(&self, filter: DashboardFilter) -> SessionReply {
        let stats = DashboardStats::compute(&self.catalog, &self.store);

        let mut text = String::new();
        let _ = writeln!(text, "=== Learning Dashboard ===");
        let _ = writeln!(
            text,
            "Enrolled: {} | In progress: {} | Completed: {} | Total hours: {}",
            stats.total_enrolled, stats.in_progress, stats.completed, stats.total_hours
        );

        let courses = filter_enrolled(&self.catalog, &self.store, filter);
        if courses.is_empty() {
            let _ = writeln!(text, "\nNo courses to show ({filter}).");
        } else {
            let _ = writeln!(text);
            for course in courses {
                let record = self.store.get_progress(&course.id);
                let percent = record.map_or(0.0, |r| r.total_progress);
                let status = CourseStatus::of(record);
                let _ = writeln!(
                    text,
                    "  {:<38} {:<12} {} {:>4.0}%",
                    course.title,
                    status.to_string(),
                    render_bar(percent),
                    percent
                );
            }
        }

        let achievements = earned_achievements(&stats);
        if !achievements.is_empty() {
            let _ = writeln!(text, "\nAchievements:");
            for achievement in achievements {
                let _ = writeln!(text, "  ★ {}: {}", achievement.title, achievement.detail);
            }
        }

        SessionReply::text(text)
    }

    fn handle_export(&self, format: ReportFormat, output: Option<PathBuf>) -> SessionReply {
        let output_path = match output {
            Some(path) => path,
            None => {
                if let Err(e) = std::fs::create_dir_all(&self.reports_dir) {
                    return SessionReply::text(format!(
                        "✗ Failed to create reports directory {}: {e}",
                        self.reports_dir.display()
                    ));
                }
                self.reports_dir
                    .join(format!("dashboard_report.{}", format.extension()))
            }
        };

        let ctx = ReportContext::new(&self.catalog, &self.store);
        let result = match format {
            ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
            ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
        };

        match result {
            Ok(()) => SessionReply::text(format!("✓ Report generated: {}", output_path.display())),
            Err(e) => SessionReply::text(format!("✗ Failed to generate report: {e}")),
        }
    }

    fn render_course_table(&self, courses: &[&Course]) -> String {
        let mut text = String::new();
        let _ = writeln!(
            text,
            "{:<18} {:<40} {:<13} {:<20} {:>8}",
            "ID", "TITLE", "LEVEL", "CATEGORY", "HOURS"
        );
        for course in courses {
            let enrolled = if self.store.is_enrolled(&course.id) {
                "  (enrolled)"
            } else {
                ""
            };
            let _ = writeln!(
                text,
                "{:<18} {:<40} {:<13} {:<20} {:>8}{enrolled}",
                course.id,
                course.title,
                course.level.to_string(),
                course.category,
                course.duration_hours
            );
        }
        let _ = writeln!(text, "\n{} courses. Type 'show <id>' for details.", courses.len());
        text
    }
}

/// Ten-slot progress bar (e.g., `[#####.....]`)
fn render_bar(percent: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((percent / 10.0).round() as usize).min(10);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

const HELP_TEXT: &str = "Commands:
  courses                        List the course catalog
  search <term>                  Search title, description, and instructor
  show <course-id>               Course details and module checklist
  enroll <course-id>             Enroll in a course
  complete <course-id> <module>  Mark a module as completed
  progress <course-id>           Progress record for a course
  dashboard [filter]             Dashboard (all, in-progress, completed)
  export <markdown|html> [path]  Write the dashboard report
  help                           This help
  quit                           End the session";
