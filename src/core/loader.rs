//! Catalog loading
//!
//! Catalogs are TOML documents with a top-level `name` and a list of
//! `[[courses]]` tables, each carrying nested `[[courses.modules]]` tables.
//! A default catalog is compiled into the binary for use when no file is
//! configured.

use crate::core::models::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog bundled with the binary
const DEFAULT_CATALOG: &str = include_str!("../assets/default_catalog.toml");

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog file {}: {source}", .path.display())]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The catalog content is not valid TOML for the expected schema
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// The catalog parsed but failed integrity validation
    #[error("invalid catalog: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Parse and validate a catalog from a TOML string
///
/// # Arguments
/// * `content` - TOML catalog document
///
/// # Errors
/// Returns [`CatalogError::Parse`] for malformed TOML and
/// [`CatalogError::Invalid`] when validation finds duplicate or empty ids
pub fn parse_catalog_toml(content: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = toml::from_str(content)?;
    catalog.validate().map_err(CatalogError::Invalid)?;
    Ok(catalog)
}

/// Load and validate a catalog from a TOML file
///
/// # Arguments
/// * `path` - Path to the catalog file
///
/// # Errors
/// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
/// same errors as [`parse_catalog_toml`]
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog_toml(&content)
}

/// The catalog compiled into the binary
///
/// # Panics
/// Panics if the embedded catalog is invalid. This should never happen in
/// practice since the catalog is compiled into the binary and covered by
/// tests.
#[must_use]
pub fn builtin_catalog() -> Catalog {
    parse_catalog_toml(DEFAULT_CATALOG).expect("Failed to parse compiled-in default catalog")
}
