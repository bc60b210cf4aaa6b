use std::io;

use thiserror::Error;

use crate::types::FileIdentifier;

/// Error type for identifier parsing, window validation, and catalog IO failures.
#[derive(Debug, Error)]
pub enum GroupingError {
    #[error("identifier '{identifier}' contains {matches} embedded date-range matches; exactly one is required")]
    MalformedIdentifier {
        identifier: FileIdentifier,
        matches: usize,
    },
    #[error("cannot convert '{value}' to a calendar date with format '{format}'")]
    DateConversion { value: String, format: String },
    #[error("window start {start} is after window end {end}")]
    EmptyWindow { start: String, end: String },
    #[error("pattern '{pattern}' is not a valid regular expression: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
