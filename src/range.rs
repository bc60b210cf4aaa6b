//! Embedded date-range extraction and window membership.

use chrono::format::{Parsed, StrftimeItems};
use chrono::NaiveDate;
use regex::Regex;

use crate::config::EngineConfig;
use crate::errors::GroupingError;
use crate::types::DateText;

/// The two halves of an embedded date-range match, still as text.
///
/// Kept textual so that cardinality validation and calendar conversion stay
/// separate failure points (`MalformedIdentifier` vs `DateConversion`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDateRange {
    /// Start half of the matched substring.
    pub start: DateText,
    /// End half of the matched substring.
    pub end: DateText,
}

impl RawDateRange {
    /// Re-embed the two halves into the substring the parser matched.
    pub fn matched(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// Inclusive calendar date range covered by one file.
///
/// Chronological order of `start` and `end` is not enforced structurally;
/// membership checks assume it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    /// First covered date (inclusive).
    pub start: NaiveDate,
    /// Last covered date (inclusive).
    pub end: NaiveDate,
}

/// Caller-requested analysis window, both bounds inclusive.
///
/// Construction rejects windows whose start is after their end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
}

impl Window {
    /// Build a window from calendar dates, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, GroupingError> {
        if start > end {
            return Err(GroupingError::EmptyWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse a window from textual bounds in the given `chrono` format.
    pub fn parse(start: &str, end: &str, date_format: &str) -> Result<Self, GroupingError> {
        Self::new(
            parse_date(start, date_format)?,
            parse_date(end, date_format)?,
        )
    }

    /// First date of the window (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the window (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Result of checking a file's covered range against a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOverlap {
    /// Whether the range's start date falls inside the window.
    pub start_in_window: bool,
    /// Whether the range's end date falls inside the window.
    pub end_in_window: bool,
}

impl RangeOverlap {
    /// A file intersects the window when either endpoint check holds.
    pub fn intersects(&self) -> bool {
        self.start_in_window || self.end_in_window
    }
}

/// Check a covered range against a window.
///
/// Both endpoint checks are boundary-inclusive. When the range fully spans
/// the window (`start <= window.start` and `end >= window.end`) both flags
/// are forced true even though neither endpoint falls inside the window;
/// without the override such files would be dropped despite covering every
/// requested date.
pub fn overlaps(range: &DateRange, window: &Window) -> RangeOverlap {
    let start_in_window = window.start() <= range.start && range.start <= window.end();
    let end_in_window = window.start() <= range.end && range.end <= window.end();
    if range.start <= window.start() && range.end >= window.end() {
        return RangeOverlap {
            start_in_window: true,
            end_in_window: true,
        };
    }
    RangeOverlap {
        start_in_window,
        end_in_window,
    }
}

/// Extracts the single embedded date range from file identifiers.
#[derive(Debug)]
pub struct DateRangeParser {
    pattern: Regex,
    date_format: String,
}

impl DateRangeParser {
    /// Compile the configured date-range pattern.
    pub fn from_config(config: &EngineConfig) -> Result<Self, GroupingError> {
        let pattern = compile_pattern(&config.date_range_pattern)?;
        Ok(Self {
            pattern,
            date_format: config.date_format.clone(),
        })
    }

    /// Find the embedded date range in `identifier` and split it into halves.
    ///
    /// Exactly one match is required; zero or multiple matches mean the
    /// identifier does not follow the catalog naming convention.
    pub fn extract(&self, identifier: &str) -> Result<RawDateRange, GroupingError> {
        let matches: Vec<&str> = self
            .pattern
            .find_iter(identifier)
            .map(|found| found.as_str())
            .collect();
        if matches.len() != 1 {
            return Err(GroupingError::MalformedIdentifier {
                identifier: identifier.to_string(),
                matches: matches.len(),
            });
        }
        let (start, end) =
            matches[0]
                .split_once('-')
                .ok_or_else(|| GroupingError::MalformedIdentifier {
                    identifier: identifier.to_string(),
                    matches: 0,
                })?;
        Ok(RawDateRange {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    /// Convert a raw range to calendar dates.
    ///
    /// Conversion failures are explicit; a matched-but-invalid date (for
    /// example `19502399`) must never silently degrade to "no overlap".
    pub fn resolve(&self, raw: &RawDateRange) -> Result<DateRange, GroupingError> {
        Ok(DateRange {
            start: parse_date(&raw.start, &self.date_format)?,
            end: parse_date(&raw.end, &self.date_format)?,
        })
    }

    /// Extract and convert in one step.
    pub fn parse(&self, identifier: &str) -> Result<DateRange, GroupingError> {
        let raw = self.extract(identifier)?;
        self.resolve(&raw)
    }

    /// Check an identifier's covered range against a window.
    pub fn overlap(
        &self,
        identifier: &str,
        window: &Window,
    ) -> Result<RangeOverlap, GroupingError> {
        let range = self.parse(identifier)?;
        Ok(overlaps(&range, window))
    }
}

pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, GroupingError> {
    Regex::new(pattern).map_err(|source| GroupingError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Parse a date, defaulting the day to 1 when the format omits it
/// (monthly products use `%Y%m`).
pub(crate) fn parse_date(value: &str, date_format: &str) -> Result<NaiveDate, GroupingError> {
    let conversion_error = || GroupingError::DateConversion {
        value: value.to_string(),
        format: date_format.to_string(),
    };
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, value, StrftimeItems::new(date_format))
        .map_err(|_| conversion_error())?;
    if parsed.day().is_none() {
        parsed.set_day(1).map_err(|_| conversion_error())?;
    }
    parsed.to_naive_date().map_err(|_| conversion_error())
}
