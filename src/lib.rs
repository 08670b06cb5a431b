//! Shared library for `LearnTrack`
//! Contains the course catalog, progress tracking, and reporting
//! functionality used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::*;
