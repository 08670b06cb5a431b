//! Core module for common functionality across all targets

pub mod config;
pub mod loader;
pub mod models;
pub mod progress;
pub mod report;
pub mod session;
pub mod stats;

/// Returns the current version of the `LearnTrack` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
