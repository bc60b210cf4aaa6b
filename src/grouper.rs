//! The core partitioner: contiguous per-family groups of window-intersecting
//! identifiers.
//!
//! The walk is a plain index-cursor loop with one-element lookahead. Each
//! identifier is visited at most twice (once as a run candidate, once as a
//! potential run head), so the pass is bounded by the catalog length and no
//! recursion depth is involved regardless of how long a family run gets.

use tracing::{debug, warn};

use crate::config::{EngineConfig, ParseMode};
use crate::constants::filtering::SKIP_UNPARSEABLE_MSG;
use crate::data::{Group, Grouping, SkippedIdentifier};
use crate::errors::GroupingError;
use crate::family::FamilyKeyExtractor;
use crate::range::{DateRangeParser, Window};
use crate::types::FileIdentifier;

/// Partitions an ordered catalog into per-family groups.
///
/// Works on raw or pre-filtered catalogs alike; overlap is re-derived per
/// element, so running `RangeFilter` first changes nothing about the output
/// groups.
#[derive(Debug)]
pub struct TemporalGrouper {
    parser: DateRangeParser,
    keys: FamilyKeyExtractor,
    mode: ParseMode,
}

impl TemporalGrouper {
    /// Build a grouper from the engine configuration.
    pub fn new(config: &EngineConfig) -> Result<Self, GroupingError> {
        Ok(Self {
            parser: DateRangeParser::from_config(config)?,
            keys: FamilyKeyExtractor::from_config(config)?,
            mode: config.parse_mode,
        })
    }

    /// Walk the catalog in order and emit maximal contiguous family runs.
    ///
    /// A run opens at an identifier that intersects the window and whose
    /// predecessor either did not intersect or belongs to another family. It
    /// extends while following identifiers share the run's family key;
    /// same-family identifiers outside the window are consumed without being
    /// appended and do not close the run. A different-family identifier
    /// closes the run and is reconsidered as the next potential run head.
    /// The trailing open run is flushed at end of input.
    ///
    /// An empty catalog, or one with no intersecting identifiers, yields an
    /// empty group list.
    pub fn group(
        &self,
        catalog: &[FileIdentifier],
        window: &Window,
    ) -> Result<Grouping, GroupingError> {
        let mut grouping = Grouping::default();
        let mut cursor = 0;
        while cursor < catalog.len() {
            let head = &catalog[cursor];
            let intersects = match self.intersects(head, window) {
                Ok(intersects) => intersects,
                Err(error) => {
                    self.skip(&mut grouping, head, error)?;
                    cursor += 1;
                    continue;
                }
            };
            if !intersects {
                cursor += 1;
                continue;
            }
            let run_key = match self.keys.strip_date_range(head) {
                Ok(key) => key,
                Err(error) => {
                    self.skip(&mut grouping, head, error)?;
                    cursor += 1;
                    continue;
                }
            };
            let mut members = vec![head.clone()];
            cursor += 1;
            while cursor < catalog.len() {
                let candidate = &catalog[cursor];
                // An unparseable candidate has no usable family key; close
                // the run and let the outer loop record it once.
                let Ok(candidate_key) = self.keys.strip_date_range(candidate) else {
                    break;
                };
                if !self.keys.keys_match(&run_key, &candidate_key) {
                    break;
                }
                match self.intersects(candidate, window) {
                    Ok(true) => members.push(candidate.clone()),
                    Ok(false) => {}
                    Err(error) => {
                        self.skip(&mut grouping, candidate, error)?;
                    }
                }
                cursor += 1;
            }
            grouping.groups.push(Group {
                label: self.keys.family_label(&members[0]),
                members,
            });
        }
        debug!(
            input = catalog.len(),
            groups = grouping.groups.len(),
            members = grouping.member_count(),
            skipped = grouping.skipped.len(),
            "grouped catalog against window"
        );
        Ok(grouping)
    }

    fn intersects(
        &self,
        identifier: &FileIdentifier,
        window: &Window,
    ) -> Result<bool, GroupingError> {
        Ok(self.parser.overlap(identifier, window)?.intersects())
    }

    fn skip(
        &self,
        grouping: &mut Grouping,
        identifier: &FileIdentifier,
        error: GroupingError,
    ) -> Result<(), GroupingError> {
        if self.mode == ParseMode::Strict {
            return Err(error);
        }
        warn!(identifier = %identifier, error = %error, SKIP_UNPARSEABLE_MSG);
        grouping.skipped.push(SkippedIdentifier {
            identifier: identifier.clone(),
            error,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouper() -> TemporalGrouper {
        TemporalGrouper::new(&EngineConfig::default()).unwrap()
    }

    fn window(start: &str, end: &str) -> Window {
        Window::parse(start, end, "%Y%m%d").unwrap()
    }

    fn catalog(identifiers: &[&str]) -> Vec<FileIdentifier> {
        identifiers.iter().map(|s| s.to_string()).collect()
    }

    fn member_lists(grouping: &Grouping) -> Vec<Vec<FileIdentifier>> {
        grouping
            .groups
            .iter()
            .map(|group| group.members.clone())
            .collect()
    }

    #[test]
    fn splits_catalog_at_family_boundaries() {
        let grouping = grouper()
            .group(
                &catalog(&[
                    "m1_18500101-19001231.nc",
                    "m1_19010101-19501231.nc",
                    "m2_18500101-19001231.nc",
                ]),
                &window("19000101", "19451231"),
            )
            .unwrap();
        assert_eq!(
            member_lists(&grouping),
            vec![
                catalog(&["m1_18500101-19001231.nc", "m1_19010101-19501231.nc"]),
                catalog(&["m2_18500101-19001231.nc"]),
            ]
        );
    }

    #[test]
    fn no_overlap_yields_no_groups() {
        let grouping = grouper()
            .group(
                &catalog(&["a_20000101-20101231.nc"]),
                &window("19900101", "19951231"),
            )
            .unwrap();
        assert!(grouping.groups.is_empty());
    }

    #[test]
    fn empty_catalog_yields_no_groups() {
        let grouping = grouper().group(&[], &window("19900101", "19951231")).unwrap();
        assert!(grouping.groups.is_empty());
        assert!(grouping.skipped.is_empty());
    }

    #[test]
    fn containment_override_admits_spanning_file() {
        let grouping = grouper()
            .group(
                &catalog(&["a_19000101-20201231.nc"]),
                &window("19500101", "19601231"),
            )
            .unwrap();
        assert_eq!(
            member_lists(&grouping),
            vec![catalog(&["a_19000101-20201231.nc"])]
        );
    }

    #[test]
    fn same_family_gap_does_not_close_the_run() {
        // The middle chunk misses the window entirely; it is consumed but the
        // run continues to the third chunk.
        let grouping = grouper()
            .group(
                &catalog(&[
                    "m1_19400101-19491231.nc",
                    "m1_19600101-19691231.nc",
                    "m1_19450101-19471231.nc",
                ]),
                &window("19400101", "19481231"),
            )
            .unwrap();
        assert_eq!(
            member_lists(&grouping),
            vec![catalog(&["m1_19400101-19491231.nc", "m1_19450101-19471231.nc"])]
        );
    }

    #[test]
    fn family_change_closes_and_reopens_on_the_same_element() {
        let grouping = grouper()
            .group(
                &catalog(&[
                    "m1_19400101-19491231.nc",
                    "m2_19400101-19491231.nc",
                    "m2_19500101-19591231.nc",
                ]),
                &window("19400101", "19551231"),
            )
            .unwrap();
        assert_eq!(
            member_lists(&grouping),
            vec![
                catalog(&["m1_19400101-19491231.nc"]),
                catalog(&["m2_19400101-19491231.nc", "m2_19500101-19591231.nc"]),
            ]
        );
    }

    #[test]
    fn leading_non_intersecting_identifiers_are_passed_over() {
        let grouping = grouper()
            .group(
                &catalog(&["m1_18000101-18491231.nc", "m1_19400101-19491231.nc"]),
                &window("19400101", "19481231"),
            )
            .unwrap();
        assert_eq!(
            member_lists(&grouping),
            vec![catalog(&["m1_19400101-19491231.nc"])]
        );
    }

    #[test]
    fn lenient_mode_records_each_bad_identifier_once() {
        let grouping = grouper()
            .group(
                &catalog(&[
                    "m1_19400101-19491231.nc",
                    "bad_file_no_dates.nc",
                    "m1_19450101-19471231.nc",
                ]),
                &window("19400101", "19481231"),
            )
            .unwrap();
        // The malformed entry closes the first run, so the family reopens.
        assert_eq!(
            member_lists(&grouping),
            vec![
                catalog(&["m1_19400101-19491231.nc"]),
                catalog(&["m1_19450101-19471231.nc"]),
            ]
        );
        assert_eq!(grouping.skipped.len(), 1);
        assert_eq!(grouping.skipped[0].identifier, "bad_file_no_dates.nc");
    }

    #[test]
    fn strict_mode_propagates_parse_failures() {
        let config = EngineConfig::default().with_parse_mode(ParseMode::Strict);
        let grouper = TemporalGrouper::new(&config).unwrap();
        let err = grouper
            .group(
                &catalog(&["bad_file_no_dates.nc"]),
                &window("19400101", "19481231"),
            )
            .unwrap_err();
        assert!(matches!(err, GroupingError::MalformedIdentifier { .. }));
    }

    #[test]
    fn group_labels_come_from_the_first_member() {
        let grouping = grouper()
            .group(
                &catalog(&["/d/ua_day_CESM2_historical_r1i1p1f1_gn_19400101-19491231.nc"]),
                &window("19400101", "19481231"),
            )
            .unwrap();
        assert_eq!(
            grouping.groups[0].label,
            "ua_day_CESM2_historical_r1i1p1f1_gn"
        );
    }
}
