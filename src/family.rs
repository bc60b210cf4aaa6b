//! Family-key derivation from file identifiers.
//!
//! Two identifiers belong to the same dataset family when their keys match
//! after the embedded date range is removed. Deduplication uses a second key
//! with the ensemble realization token removed instead, so the chunk files of
//! one realization stay distinct while sibling realizations collapse.

use regex::Regex;

use crate::config::{EngineConfig, FamilyEquality};
use crate::errors::GroupingError;
use crate::range::compile_pattern;
use crate::types::{FamilyKey, GroupLabel};

/// Derives family keys and group labels from file identifiers.
#[derive(Debug)]
pub struct FamilyKeyExtractor {
    date_range: Regex,
    realization: Regex,
    equality: FamilyEquality,
}

impl FamilyKeyExtractor {
    /// Compile the configured date-range and realization patterns.
    pub fn from_config(config: &EngineConfig) -> Result<Self, GroupingError> {
        Ok(Self {
            date_range: compile_pattern(&config.date_range_pattern)?,
            realization: compile_pattern(&config.realization_pattern)?,
            equality: config.family_equality,
        })
    }

    /// Remove the single embedded date-range substring, leaving surrounding
    /// punctuation intact.
    ///
    /// Requires exactly one match, like the parser; grouping over an
    /// identifier without a recognizable date range is meaningless.
    pub fn strip_date_range(&self, identifier: &str) -> Result<FamilyKey, GroupingError> {
        let matches: Vec<(usize, usize)> = self
            .date_range
            .find_iter(identifier)
            .map(|found| (found.start(), found.end()))
            .collect();
        if matches.len() != 1 {
            return Err(GroupingError::MalformedIdentifier {
                identifier: identifier.to_string(),
                matches: matches.len(),
            });
        }
        let (start, end) = matches[0];
        let mut key = String::with_capacity(identifier.len() - (end - start));
        key.push_str(&identifier[..start]);
        key.push_str(&identifier[end..]);
        Ok(key)
    }

    /// Remove the realization token from the identifier's basename, keeping
    /// the date range.
    ///
    /// Keeping the date range distinguishes the chunk files of a single
    /// realization from each other, so a first-seen-key pass keeps one whole
    /// realization per family rather than one file.
    pub fn strip_realization(&self, identifier: &str) -> FamilyKey {
        let name = basename(identifier);
        self.realization.replace_all(name, "").into_owned()
    }

    /// Whether two date-stripped keys name the same family.
    pub fn keys_match(&self, left: &str, right: &str) -> bool {
        match self.equality {
            FamilyEquality::Positional => positional_difference(left, right) == 0,
            FamilyEquality::Strict => left == right,
        }
    }

    /// Human-readable family label: basename with the date range, extension,
    /// and trailing separators removed.
    ///
    /// Example: `ua_day_CESM2_historical_r10i1p1f1_gn_19500101-19991231.nc`
    /// becomes `ua_day_CESM2_historical_r10i1p1f1_gn`. Identifiers without a
    /// date range keep their full stem, which lets exclusion checks run on
    /// catalogs that still contain malformed entries.
    pub fn family_label(&self, identifier: &str) -> GroupLabel {
        let name = basename(identifier);
        let stripped = self.date_range.replace_all(name, "");
        let stem = match stripped.rsplit_once('.') {
            Some((stem, _extension)) => stem,
            None => stripped.as_ref(),
        };
        stem.trim_end_matches(['_', '-']).to_string()
    }
}

/// Count character positions at which two strings differ, truncated at the
/// shorter string's length.
///
/// A trailing length mismatch is deliberately ignored; date-stripped keys are
/// usually equal length, and the historical comparison tolerated ragged tails
/// without raising. `FamilyEquality::Strict` is the escape hatch.
pub fn positional_difference(left: &str, right: &str) -> usize {
    left.chars()
        .zip(right.chars())
        .filter(|(a, b)| a != b)
        .count()
}

fn basename(identifier: &str) -> &str {
    identifier.rsplit('/').next().unwrap_or(identifier)
}
