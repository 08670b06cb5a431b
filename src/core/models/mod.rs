//! Data models for `LearnTrack`

pub mod catalog;
pub mod course;
pub mod module;

pub use catalog::{Catalog, CatalogFilter};
pub use course::{Course, Level};
pub use module::Module;
