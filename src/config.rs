use std::collections::HashSet;

use crate::constants::patterns;
use crate::types::GroupLabel;

/// How per-identifier parse failures are handled during filtering and grouping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Drop the failing identifier, emit a warning, and record a diagnostic.
    #[default]
    Lenient,
    /// Propagate the first parse failure as an error.
    Strict,
}

/// How two date-stripped family keys are compared during grouping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FamilyEquality {
    /// Count mismatching character positions up to the shorter key's length;
    /// keys match when the count is zero. A trailing length mismatch is
    /// ignored. This reproduces the historical behavior and is the default.
    #[default]
    Positional,
    /// Full string equality.
    Strict,
}

/// Top-level engine configuration.
///
/// All components compile their patterns once at construction, so a config is
/// cheap to clone and pass around.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// `chrono` format string for each half of the embedded date range.
    pub date_format: String,
    /// Regular expression matching the embedded date-range substring.
    pub date_range_pattern: String,
    /// Regular expression matching the ensemble realization token.
    pub realization_pattern: String,
    /// Family labels excluded from deduplicated catalogs (known-bad datasets).
    ///
    /// Labels are compared in suffix-trimmed form, for example
    /// `ua_day_CESM2_historical_r10i1p1f1_gn`.
    pub excluded_families: HashSet<GroupLabel>,
    /// Lenient or strict handling of unparseable identifiers.
    pub parse_mode: ParseMode,
    /// Family-key comparison rule used by the grouper.
    pub family_equality: FamilyEquality,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            date_format: patterns::DATE_FORMAT.to_string(),
            date_range_pattern: patterns::DATE_RANGE_PATTERN.to_string(),
            realization_pattern: patterns::REALIZATION_PATTERN.to_string(),
            excluded_families: HashSet::new(),
            parse_mode: ParseMode::default(),
            family_equality: FamilyEquality::default(),
        }
    }
}

impl EngineConfig {
    /// Override the per-half date format (for example `%Y%m` for monthly files).
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Override the embedded date-range pattern (for example `\d{6}-\d{6}`).
    pub fn with_date_range_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.date_range_pattern = pattern.into();
        self
    }

    /// Override the realization-token pattern.
    pub fn with_realization_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.realization_pattern = pattern.into();
        self
    }

    /// Exclude the given family labels from deduplicated catalogs.
    pub fn with_excluded_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<GroupLabel>,
    {
        self.excluded_families = families.into_iter().map(Into::into).collect();
        self
    }

    /// Select strict or lenient handling of unparseable identifiers.
    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = parse_mode;
        self
    }

    /// Select the family-key comparison rule.
    pub fn with_family_equality(mut self, family_equality: FamilyEquality) -> Self {
        self.family_equality = family_equality;
        self
    }
}
