//! Derived dashboard and catalog statistics
//!
//! Everything here is recomputed from the catalog and the progress store on
//! each call. At catalog scale a full rescan is cheaper than keeping counters
//! in sync with every mutation.

use crate::core::models::{Catalog, Course};
use crate::core::progress::{CourseStatus, ProgressStore};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Headline numbers for the learner dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    /// Number of enrolled courses
    pub total_enrolled: usize,
    /// Enrolled courses strictly between 0% and 100%
    pub in_progress: usize,
    /// Enrolled courses at exactly 100%
    pub completed: usize,
    /// Sum of `duration_hours` across enrolled courses
    pub total_hours: f32,
}

impl DashboardStats {
    /// Compute dashboard statistics from the current enrollments
    #[must_use]
    pub fn compute(catalog: &Catalog, store: &ProgressStore) -> Self {
        let mut in_progress = 0;
        let mut completed = 0;
        let mut total_hours = 0.0;

        for course_id in store.enrolled_ids() {
            match store.status(course_id) {
                CourseStatus::InProgress => in_progress += 1,
                CourseStatus::Completed => completed += 1,
                CourseStatus::NotStarted => {}
            }

            if let Some(course) = catalog.get_course(course_id) {
                total_hours += course.duration_hours;
            }
        }

        Self {
            total_enrolled: store.enrollment_count(),
            in_progress,
            completed,
            total_hours,
        }
    }
}

/// Headline numbers for the catalog landing view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    /// Number of courses on offer
    pub total_courses: usize,
    /// Sum of platform-wide student counts
    pub total_students: u32,
    /// Number of distinct categories
    pub categories: usize,
}

impl CatalogStats {
    /// Compute catalog statistics
    #[must_use]
    pub fn compute(catalog: &Catalog) -> Self {
        Self {
            total_courses: catalog.len(),
            total_students: catalog.courses().iter().map(|c| c.students).sum(),
            categories: catalog.categories().len(),
        }
    }
}

/// Dashboard filter over enrolled courses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardFilter {
    /// All enrolled courses
    #[default]
    All,
    /// Only courses strictly between 0% and 100%
    InProgress,
    /// Only fully completed courses
    Completed,
}

impl DashboardFilter {
    /// Returns whether a course with the given status passes this filter
    #[must_use]
    pub fn accepts(self, status: CourseStatus) -> bool {
        match self {
            Self::All => true,
            Self::InProgress => status == CourseStatus::InProgress,
            Self::Completed => status == CourseStatus::Completed,
        }
    }
}

impl FromStr for DashboardFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "in-progress" | "inprogress" => Ok(Self::InProgress),
            "completed" | "complete" => Ok(Self::Completed),
            _ => Err(format!("Unknown dashboard filter: {s}")),
        }
    }
}

impl fmt::Display for DashboardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Enrolled courses passing a dashboard filter, in enrollment order
#[must_use]
pub fn filter_enrolled<'a>(
    catalog: &'a Catalog,
    store: &ProgressStore,
    filter: DashboardFilter,
) -> Vec<&'a Course> {
    store
        .enrolled_ids()
        .iter()
        .filter(|id| filter.accepts(store.status(id)))
        .filter_map(|id| catalog.get_course(id))
        .collect()
}

/// A milestone the learner has reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    /// Achievement name
    pub title: &'static str,
    /// What earned it
    pub detail: String,
}

/// Achievements earned at the current dashboard statistics
///
/// Thresholds: at least one completed course, at least 10 enrolled hours,
/// at least 3 enrollments.
#[must_use]
pub fn earned_achievements(stats: &DashboardStats) -> Vec<Achievement> {
    let mut earned = Vec::new();

    if stats.completed >= 1 {
        let plural = if stats.completed == 1 { "course" } else { "courses" };
        earned.push(Achievement {
            title: "Course Completionist",
            detail: format!("Completed {} {plural}", stats.completed),
        });
    }

    if stats.total_hours >= 10.0 {
        earned.push(Achievement {
            title: "Time Investor",
            detail: format!("{} hours of learning time", stats.total_hours),
        });
    }

    if stats.total_enrolled >= 3 {
        earned.push(Achievement {
            title: "Course Collector",
            detail: format!("Enrolled in {} courses", stats.total_enrolled),
        });
    }

    earned
}

/// Humanize how long ago a course was last worked on
///
/// Buckets: "Today", "Yesterday", "N days ago" (under a week),
/// "N weeks ago" (under a month, rounded up), then "N months ago"
/// (rounded up). Future timestamps clamp to "Today".
#[must_use]
pub fn humanize_last_accessed(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - then).num_days().max(0);
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => {
            let weeks = (d + 6) / 7;
            if weeks == 1 {
                "1 week ago".to_string()
            } else {
                format!("{weeks} weeks ago")
            }
        }
        d => {
            let months = (d + 29) / 30;
            if months == 1 {
                "1 month ago".to_string()
            } else {
                format!("{months} months ago")
            }
        }
    }
}
