#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Catalog file read/write helpers.
pub mod catalog;
/// Engine configuration types.
pub mod config;
/// Centralized constants: default patterns, log messages, file extensions.
pub mod constants;
/// Filter and grouping output types.
pub mod data;
/// Realization deduplication.
pub mod dedupe;
/// Family-key derivation and comparison.
pub mod family;
/// Window filtering of catalogs.
pub mod filter;
/// The contiguous per-family grouping pass.
pub mod grouper;
/// Date-range extraction and window membership.
pub mod range;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{EngineConfig, FamilyEquality, ParseMode};
pub use data::{FilterReport, Group, Grouping, SkippedIdentifier};
pub use dedupe::RealizationDeduplicator;
pub use errors::GroupingError;
pub use family::FamilyKeyExtractor;
pub use filter::RangeFilter;
pub use grouper::TemporalGrouper;
pub use range::{DateRange, DateRangeParser, RangeOverlap, RawDateRange, Window, overlaps};
pub use types::{DateText, FamilyKey, FileIdentifier, GroupLabel};
