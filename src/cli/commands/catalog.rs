//! Catalog command handler

use learn_track::config::Config;
use learn_track::loader;
use learn_track::models::{Catalog, CatalogFilter, Course, Level};
use learn_track::stats::CatalogStats;
use learn_track::{debug, info};

/// Resolve the catalog for this run
///
/// Uses `paths.catalog_file` from the (override-applied) configuration when
/// set, otherwise falls back to the built-in demo catalog.
///
/// # Errors
/// Returns a printable message when a configured catalog file cannot be
/// read or parsed.
pub fn load_catalog(config: &Config) -> Result<Catalog, String> {
    let path = config.paths.catalog_file.trim();
    if path.is_empty() {
        debug!("No catalog file configured, using built-in catalog");
        return Ok(loader::builtin_catalog());
    }

    debug!("Loading catalog from {path}");
    loader::load_catalog_file(path).map_err(|e| e.to_string())
}

/// Run the catalog command
pub fn run(
    search: Option<&str>,
    category: Option<&str>,
    level: Option<Level>,
    detail: Option<&str>,
    config: &Config,
) {
    let catalog = match load_catalog(config) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };
    info!(
        "Loaded catalog '{}' with {} courses",
        catalog.name,
        catalog.len()
    );

    if let Some(course_id) = detail {
        match catalog.get_course(course_id) {
            Some(course) => print_course_detail(course),
            None => {
                eprintln!("✗ No course with id '{course_id}'");
                std::process::exit(1);
            }
        }
        return;
    }

    let filter = CatalogFilter {
        term: search.map(str::to_string),
        category: category.map(str::to_string),
        level,
    };
    let matches = catalog.search(&filter);
    if matches.is_empty() {
        println!("No courses match the given filters.");
        return;
    }

    print_course_list(&catalog, &matches);
}

fn print_course_list(catalog: &Catalog, courses: &[&Course]) {
    println!("\n=== {} ===\n", catalog.name);
    println!(
        "{:<18} {:<40} {:<20} {:<13} {:>6} {:>7}",
        "ID", "TITLE", "CATEGORY", "LEVEL", "HOURS", "RATING"
    );
    for course in courses {
        let rating = format!("★{}", course.rating);
        println!(
            "{:<18} {:<40} {:<20} {:<13} {:>6} {:>7}",
            course.id,
            course.title,
            course.category,
            course.level.to_string(),
            course.duration_hours,
            rating
        );
    }

    let stats = CatalogStats::compute(catalog);
    println!(
        "\n{} of {} courses shown | {} categories | {} students on the platform",
        courses.len(),
        stats.total_courses,
        stats.categories,
        stats.total_students
    );
}

fn print_course_detail(course: &Course) {
    println!("\n{} ({})", course.title, course.id);
    println!(
        "{} | {} | {} | {} | ★{} | {} students",
        course.instructor,
        course.category,
        course.level,
        course.duration_label(),
        course.rating,
        course.students
    );
    if course.price > 0.0 {
        println!("Price: ${:.2}", course.price);
    }
    if !course.description.is_empty() {
        println!("\n{}", course.description);
    }

    if course.modules.is_empty() {
        println!("\nNo modules published yet.");
    } else {
        println!("\nModules ({}):", course.module_count());
        for (index, module) in course.modules.iter().enumerate() {
            println!(
                "  {:>2}. {:<10} {} ({})",
                index + 1,
                module.id,
                module.title,
                module.duration_label()
            );
        }
    }
}
