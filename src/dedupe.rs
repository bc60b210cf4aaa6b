//! Realization deduplication: at most one ensemble member per family.

use std::collections::HashSet;

use tracing::debug;

use crate::config::EngineConfig;
use crate::errors::GroupingError;
use crate::family::FamilyKeyExtractor;
use crate::types::{FamilyKey, FileIdentifier, GroupLabel};

/// Collapses a catalog to one realization per family, preserving first-seen
/// order, and drops families on the configured exclusion list.
#[derive(Debug)]
pub struct RealizationDeduplicator {
    keys: FamilyKeyExtractor,
    excluded_families: HashSet<GroupLabel>,
}

impl RealizationDeduplicator {
    /// Build a deduplicator from the engine configuration.
    pub fn new(config: &EngineConfig) -> Result<Self, GroupingError> {
        Ok(Self {
            keys: FamilyKeyExtractor::from_config(config)?,
            excluded_families: config.excluded_families.clone(),
        })
    }

    /// Single forward pass; an identifier survives when its family label is
    /// not excluded and its realization-stripped key has not been seen.
    pub fn dedupe(&self, catalog: &[FileIdentifier]) -> Vec<FileIdentifier> {
        let mut seen: HashSet<FamilyKey> = HashSet::new();
        let mut retained = Vec::new();
        for identifier in catalog {
            if !self.excluded_families.is_empty()
                && self
                    .excluded_families
                    .contains(&self.keys.family_label(identifier))
            {
                continue;
            }
            let key = self.keys.strip_realization(identifier);
            if seen.insert(key) {
                retained.push(identifier.clone());
            }
        }
        debug!(
            input = catalog.len(),
            retained = retained.len(),
            "deduplicated catalog realizations"
        );
        retained
    }
}
