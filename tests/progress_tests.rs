//! Integration tests for enrollment and progress tracking
//!
//! Exercises the progress store against the built-in catalog the way the
//! interactive session does.

use learn_track::loader::builtin_catalog;
use learn_track::progress::{CourseStatus, ProgressStore};
use learn_track::stats::DashboardStats;

#[test]
fn test_enroll_is_idempotent() {
    let catalog = builtin_catalog();
    let mut store = ProgressStore::new();

    assert!(store.enroll(&catalog, "web-dev-101"));
    assert!(!store.enroll(&catalog, "web-dev-101"));

    assert_eq!(store.enrollment_count(), 1);
    assert!(store.is_enrolled("web-dev-101"));

    // A fresh record exists immediately after enrollment
    let record = store.get_progress("web-dev-101").unwrap();
    assert_eq!(record.completed_count(), 0);
    assert!((record.total_progress - 0.0).abs() < f32::EPSILON);
    assert_eq!(store.status("web-dev-101"), CourseStatus::NotStarted);
}

#[test]
fn test_enroll_unknown_course_is_rejected() {
    let catalog = builtin_catalog();
    let mut store = ProgressStore::new();

    assert!(!store.enroll(&catalog, "underwater-basket-weaving"));
    assert_eq!(store.enrollment_count(), 0);
    assert!(store.get_progress("underwater-basket-weaving").is_none());
}

#[test]
fn test_progress_advances_in_quarters() {
    let catalog = builtin_catalog();
    let mut store = ProgressStore::new();
    store.enroll(&catalog, "web-dev-101");

    // web-dev-101 has four modules, so each one is worth 25%
    let expected = [25.0, 50.0, 75.0, 100.0];
    for (module_id, expected_percent) in ["wd-m1", "wd-m2", "wd-m3", "wd-m4"].iter().zip(expected)
    {
        assert!(store.mark_module_complete(&catalog, "web-dev-101", module_id));
        let record = store.get_progress("web-dev-101").unwrap();
        assert!(
            (record.total_progress - expected_percent).abs() < f32::EPSILON,
            "after {module_id}: expected {expected_percent}, got {}",
            record.total_progress
        );
    }

    assert_eq!(store.status("web-dev-101"), CourseStatus::Completed);
    assert!(store.get_progress("web-dev-101").unwrap().is_completed());
}

#[test]
fn test_remarking_a_module_changes_nothing() {
    let catalog = builtin_catalog();
    let mut store = ProgressStore::new();
    store.enroll(&catalog, "web-dev-101");

    assert!(store.mark_module_complete(&catalog, "web-dev-101", "wd-m1"));
    let before = store.get_progress("web-dev-101").unwrap().clone();

    assert!(!store.mark_module_complete(&catalog, "web-dev-101", "wd-m1"));
    let after = store.get_progress("web-dev-101").unwrap();

    // The whole record is untouched, timestamp included
    assert_eq!(&before, after);
}

#[test]
fn test_mark_without_enrollment_is_rejected() {
    let catalog = builtin_catalog();
    let mut store = ProgressStore::new();

    assert!(!store.mark_module_complete(&catalog, "web-dev-101", "wd-m1"));
    assert!(store.get_progress("web-dev-101").is_none());
    assert_eq!(store.status("web-dev-101"), CourseStatus::NotStarted);
}

#[test]
fn test_mark_foreign_module_is_rejected() {
    let catalog = builtin_catalog();
    let mut store = ProgressStore::new();
    store.enroll(&catalog, "web-dev-101");

    // ds-m1 belongs to data-science-intro, not web-dev-101
    assert!(!store.mark_module_complete(&catalog, "web-dev-101", "ds-m1"));
    let record = store.get_progress("web-dev-101").unwrap();
    assert_eq!(record.completed_count(), 0);
}

#[test]
fn test_dashboard_hours_sum_enrolled_durations() {
    let catalog = builtin_catalog();
    let mut store = ProgressStore::new();

    // 10.0 + 14.5 + 8.0
    store.enroll(&catalog, "web-dev-101");
    store.enroll(&catalog, "data-science-intro");
    store.enroll(&catalog, "ui-ux-design");

    let stats = DashboardStats::compute(&catalog, &store);
    assert_eq!(stats.total_enrolled, 3);
    assert!((stats.total_hours - 32.5).abs() < f32::EPSILON);
}

#[test]
fn test_status_transitions() {
    let catalog = builtin_catalog();
    let mut store = ProgressStore::new();
    store.enroll(&catalog, "ui-ux-design");

    assert_eq!(store.status("ui-ux-design"), CourseStatus::NotStarted);

    store.mark_module_complete(&catalog, "ui-ux-design", "ux-m1");
    assert_eq!(store.status("ui-ux-design"), CourseStatus::InProgress);

    store.mark_module_complete(&catalog, "ui-ux-design", "ux-m2");
    store.mark_module_complete(&catalog, "ui-ux-design", "ux-m3");
    assert_eq!(store.status("ui-ux-design"), CourseStatus::Completed);

    let stats = DashboardStats::compute(&catalog, &store);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.in_progress, 0);
}

#[test]
fn test_enrollment_order_is_preserved() {
    let catalog = builtin_catalog();
    let mut store = ProgressStore::new();

    store.enroll(&catalog, "mobile-flutter");
    store.enroll(&catalog, "web-dev-101");
    store.enroll(&catalog, "startup-finance");

    assert_eq!(
        store.enrolled_ids(),
        &[
            "mobile-flutter".to_string(),
            "web-dev-101".to_string(),
            "startup-finance".to_string()
        ]
    );
}
