//! Learning progress store
//!
//! Owns the set of enrolled courses and one progress record per enrollment.
//! All mutation goes through [`ProgressStore::enroll`] and
//! [`ProgressStore::mark_module_complete`]; references that don't resolve
//! against the catalog are ignored rather than treated as errors, so callers
//! can forward user input directly.
//!
//! State is in-memory only and lives exactly as long as the owning value.

use crate::core::models::Catalog;
use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Completion state of a course, derived from its progress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatus {
    /// No module completed yet (or no record at all)
    NotStarted,
    /// Strictly between 0% and 100%
    InProgress,
    /// Every module completed
    Completed,
}

impl CourseStatus {
    /// Derive the status from an optional progress record
    ///
    /// `None` (not enrolled) reads as [`CourseStatus::NotStarted`].
    #[must_use]
    pub fn of(record: Option<&ProgressRecord>) -> Self {
        record.map_or(Self::NotStarted, ProgressRecord::status)
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        };
        write!(f, "{as_str}")
    }
}

/// Per-course learning progress
///
/// Created empty at enrollment; every field after that is maintained by
/// [`ProgressStore::mark_module_complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    /// Ids of completed modules, in deterministic order
    pub completed_modules: BTreeSet<String>,

    /// Completion percentage in `0.0..=100.0`
    pub total_progress: f32,

    /// When the course was last worked on (stamped at enrollment, refreshed
    /// on each newly completed module)
    pub last_accessed: DateTime<Utc>,
}

impl ProgressRecord {
    /// Create a fresh record: nothing completed, zero progress, accessed now
    #[must_use]
    pub fn new() -> Self {
        Self {
            completed_modules: BTreeSet::new(),
            total_progress: 0.0,
            last_accessed: Utc::now(),
        }
    }

    /// Number of completed modules
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_modules.len()
    }

    /// Returns whether the module with the given id has been completed
    #[must_use]
    pub fn is_module_complete(&self, module_id: &str) -> bool {
        self.completed_modules.contains(module_id)
    }

    /// Returns whether the course is fully completed (100%)
    #[must_use]
    pub fn is_completed(&self) -> bool {
        (self.total_progress - 100.0).abs() < f32::EPSILON
    }

    /// Derive the completion status from the progress percentage
    #[must_use]
    pub fn status(&self) -> CourseStatus {
        if self.is_completed() {
            CourseStatus::Completed
        } else if self.total_progress > 0.0 {
            CourseStatus::InProgress
        } else {
            CourseStatus::NotStarted
        }
    }
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Completion percentage for `completed` out of `total` modules
///
/// A course without modules is defined as 0% complete.
#[allow(clippy::cast_precision_loss)]
fn completion_percent(completed: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    completed as f32 / total as f32 * 100.0
}

/// In-memory store of enrollments and per-course progress
///
/// An owned value with no global state; the catalog is passed into each
/// operation that needs to resolve course or module ids. Single-threaded by
/// design, so reads and writes need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct ProgressStore {
    /// Enrolled course ids in enrollment order (duplicate-free)
    enrolled: Vec<String>,

    /// Progress records keyed by course id; a key exists here exactly when
    /// the course is enrolled
    records: HashMap<String, ProgressRecord>,
}

impl ProgressStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll in a course
    ///
    /// Creates a fresh progress record for the course. Enrolling twice is a
    /// no-op, as is enrolling in a course id the catalog doesn't know.
    ///
    /// # Arguments
    /// * `catalog` - Catalog used to resolve the course id
    /// * `course_id` - Course to enroll in
    ///
    /// # Returns
    /// `true` if a new enrollment was created, `false` on any no-op
    pub fn enroll(&mut self, catalog: &Catalog, course_id: &str) -> bool {
        if !catalog.contains(course_id) {
            return false;
        }
        if self.is_enrolled(course_id) {
            return false;
        }

        self.enrolled.push(course_id.to_string());
        self.records
            .insert(course_id.to_string(), ProgressRecord::new());
        true
    }

    /// Mark a module of an enrolled course as completed
    ///
    /// Silently ignores unknown courses, unknown modules, courses the learner
    /// isn't enrolled in, and modules that are already completed. Re-marking a
    /// completed module leaves the record untouched, including its
    /// `last_accessed` stamp.
    ///
    /// On a successful first completion the record's `last_accessed` is set to
    /// now and `total_progress` is recomputed from the module counts.
    ///
    /// # Arguments
    /// * `catalog` - Catalog used to resolve the course and module ids
    /// * `course_id` - Enrolled course the module belongs to
    /// * `module_id` - Module to mark as completed
    ///
    /// # Returns
    /// `true` if the module was newly marked, `false` on any no-op
    pub fn mark_module_complete(
        &mut self,
        catalog: &Catalog,
        course_id: &str,
        module_id: &str,
    ) -> bool {
        let course = match catalog.get_course(course_id) {
            Some(course) => course,
            None => return false,
        };
        if !course.has_module(module_id) {
            return false;
        }

        // Not enrolled: no record, nothing to update
        let record = match self.records.get_mut(course_id) {
            Some(record) => record,
            None => return false,
        };
        if !record.completed_modules.insert(module_id.to_string()) {
            return false;
        }

        record.last_accessed = Utc::now();
        record.total_progress =
            completion_percent(record.completed_modules.len(), course.module_count());
        true
    }

    /// Get the progress record for a course
    ///
    /// # Arguments
    /// * `course_id` - Course identifier
    ///
    /// # Returns
    /// A reference to the record, or `None` if the course isn't enrolled
    #[must_use]
    pub fn get_progress(&self, course_id: &str) -> Option<&ProgressRecord> {
        self.records.get(course_id)
    }

    /// Returns whether the learner is enrolled in the course
    #[must_use]
    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrolled.iter().any(|id| id == course_id)
    }

    /// Enrolled course ids in enrollment order
    #[must_use]
    pub fn enrolled_ids(&self) -> &[String] {
        &self.enrolled
    }

    /// Progress records keyed by course id
    #[must_use]
    pub const fn records(&self) -> &HashMap<String, ProgressRecord> {
        &self.records
    }

    /// Number of enrolled courses
    #[must_use]
    pub const fn enrollment_count(&self) -> usize {
        self.enrolled.len()
    }

    /// Completion status of a course (not enrolled reads as not started)
    #[must_use]
    pub fn status(&self, course_id: &str) -> CourseStatus {
        CourseStatus::of(self.get_progress(course_id))
    }
}
