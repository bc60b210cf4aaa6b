//! Order-preserving window filtering of a catalog.

use tracing::{debug, warn};

use crate::config::{EngineConfig, ParseMode};
use crate::constants::filtering::SKIP_UNPARSEABLE_MSG;
use crate::data::{FilterReport, SkippedIdentifier};
use crate::errors::GroupingError;
use crate::range::{DateRangeParser, Window};
use crate::types::FileIdentifier;

/// Keeps identifiers whose covered range intersects the window.
#[derive(Debug)]
pub struct RangeFilter {
    parser: DateRangeParser,
    mode: ParseMode,
}

impl RangeFilter {
    /// Build a filter from the engine configuration.
    pub fn new(config: &EngineConfig) -> Result<Self, GroupingError> {
        Ok(Self {
            parser: DateRangeParser::from_config(config)?,
            mode: config.parse_mode,
        })
    }

    /// Filter the catalog, preserving order.
    ///
    /// Lenient mode drops unparseable identifiers with a warning and records
    /// them in the report; strict mode propagates the first failure.
    pub fn filter(
        &self,
        catalog: &[FileIdentifier],
        window: &Window,
    ) -> Result<FilterReport, GroupingError> {
        let mut report = FilterReport::default();
        for identifier in catalog {
            match self.parser.overlap(identifier, window) {
                Ok(overlap) => {
                    if overlap.intersects() {
                        report.retained.push(identifier.clone());
                    }
                }
                Err(error) if self.mode == ParseMode::Lenient => {
                    warn!(identifier = %identifier, error = %error, SKIP_UNPARSEABLE_MSG);
                    report.skipped.push(SkippedIdentifier {
                        identifier: identifier.clone(),
                        error,
                    });
                }
                Err(error) => return Err(error),
            }
        }
        debug!(
            input = catalog.len(),
            retained = report.retained.len(),
            skipped = report.skipped.len(),
            "filtered catalog against window"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: &str, end: &str) -> Window {
        Window::parse(start, end, "%Y%m%d").unwrap()
    }

    fn catalog(identifiers: &[&str]) -> Vec<FileIdentifier> {
        identifiers.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn retains_intersecting_identifiers_in_order() {
        let filter = RangeFilter::new(&EngineConfig::default()).unwrap();
        let report = filter
            .filter(
                &catalog(&[
                    "m1_18500101-19001231.nc",
                    "m1_19010101-19501231.nc",
                    "m1_19510101-20141231.nc",
                ]),
                &window("19000101", "19451231"),
            )
            .unwrap();
        assert_eq!(
            report.retained,
            catalog(&["m1_18500101-19001231.nc", "m1_19010101-19501231.nc"])
        );
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn lenient_mode_records_unparseable_identifiers() {
        let filter = RangeFilter::new(&EngineConfig::default()).unwrap();
        let report = filter
            .filter(
                &catalog(&["bad_file_no_dates.nc", "m1_19010101-19501231.nc"]),
                &window("19000101", "19451231"),
            )
            .unwrap();
        assert_eq!(report.retained, catalog(&["m1_19010101-19501231.nc"]));
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].identifier, "bad_file_no_dates.nc");
        assert!(matches!(
            report.skipped[0].error,
            GroupingError::MalformedIdentifier { matches: 0, .. }
        ));
    }

    #[test]
    fn strict_mode_propagates_parse_failures() {
        let config = EngineConfig::default().with_parse_mode(ParseMode::Strict);
        let filter = RangeFilter::new(&config).unwrap();
        let err = filter
            .filter(
                &catalog(&["bad_file_no_dates.nc"]),
                &window("19000101", "19451231"),
            )
            .unwrap_err();
        assert!(matches!(err, GroupingError::MalformedIdentifier { .. }));
    }

    #[test]
    fn invalid_calendar_dates_are_explicit_errors() {
        let config = EngineConfig::default().with_parse_mode(ParseMode::Strict);
        let filter = RangeFilter::new(&config).unwrap();
        let err = filter
            .filter(
                &catalog(&["m1_19500199-19991231.nc"]),
                &window("19000101", "19451231"),
            )
            .unwrap_err();
        assert!(matches!(err, GroupingError::DateConversion { .. }));
    }
}
