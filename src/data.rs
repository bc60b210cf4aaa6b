//! Output types produced by the filtering and grouping passes.

use serde::{Deserialize, Serialize};

use crate::errors::GroupingError;
use crate::types::{FileIdentifier, GroupLabel};

/// An identifier dropped during a lenient pass, with the reason it failed.
#[derive(Debug)]
pub struct SkippedIdentifier {
    /// The identifier that was dropped.
    pub identifier: FileIdentifier,
    /// Why it could not be processed.
    pub error: GroupingError,
}

/// Result of a `RangeFilter` pass.
#[derive(Debug, Default)]
pub struct FilterReport {
    /// Identifiers intersecting the window, in catalog order.
    pub retained: Vec<FileIdentifier>,
    /// Identifiers dropped in lenient mode; empty in strict mode.
    pub skipped: Vec<SkippedIdentifier>,
}

/// A maximal contiguous run of same-family identifiers intersecting the
/// window, safe to open as one logical multi-file dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Label derived from the first member (family-stripped, suffix-trimmed).
    pub label: GroupLabel,
    /// Members in original catalog order; never empty.
    pub members: Vec<FileIdentifier>,
}

/// Result of a `TemporalGrouper` pass.
#[derive(Debug, Default)]
pub struct Grouping {
    /// Groups in completion order.
    pub groups: Vec<Group>,
    /// Identifiers dropped in lenient mode; empty in strict mode.
    pub skipped: Vec<SkippedIdentifier>,
}

impl Grouping {
    /// Total number of identifiers across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(|group| group.members.len()).sum()
    }
}
