//! Line-delimited catalog file helpers.
//!
//! Catalog discovery itself is a caller concern; these helpers only move an
//! already-enumerated identifier list to and from disk, one identifier per
//! line.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::constants::catalog::DEFAULT_CATALOG_EXTENSION;
use crate::errors::GroupingError;
use crate::types::FileIdentifier;

/// Read a catalog from a line-delimited file, skipping blank lines.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Vec<FileIdentifier>, GroupingError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let catalog: Vec<FileIdentifier> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    debug!(
        path = %path.as_ref().display(),
        identifiers = catalog.len(),
        "read catalog file"
    );
    Ok(catalog)
}

/// Write a catalog as a line-delimited file, one identifier per line.
pub fn write_catalog(
    path: impl AsRef<Path>,
    catalog: &[FileIdentifier],
) -> Result<(), GroupingError> {
    let mut contents = String::new();
    for identifier in catalog {
        contents.push_str(identifier);
        contents.push('\n');
    }
    fs::write(path.as_ref(), contents)?;
    debug!(
        path = %path.as_ref().display(),
        identifiers = catalog.len(),
        "wrote catalog file"
    );
    Ok(())
}

/// Ensure a catalog file name carries the expected extension (`.txt` by
/// default), appending it when absent and rejecting a conflicting one.
pub fn ensure_extension(file_name: &str, extension: &str) -> Result<String, GroupingError> {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    match file_name.rsplit_once('.') {
        Some((_, existing)) if existing == extension => Ok(file_name.to_string()),
        Some(_) => Err(GroupingError::Configuration(format!(
            "catalog file '{file_name}' needs the '.{extension}' extension"
        ))),
        None => Ok(format!("{file_name}.{extension}")),
    }
}

/// Default extension helper for data-list files.
pub fn ensure_default_extension(file_name: &str) -> Result<String, GroupingError> {
    ensure_extension(file_name, DEFAULT_CATALOG_EXTENSION)
}
