use std::sync::Arc;

use modassets_core::{AssetExtractor, AssetKind, Candidate, ExtractError, ReadSeek, SourceUnit};

use crate::bundle::LoadedBundle;
use crate::prefab::RigLayout;

/// Extractor for rig layout bundles.
///
/// Prefabs without a grid view, and prefabs that fail to parse, are skipped
/// with a warning. Only a bundle that cannot be opened fails the unit.
#[derive(Debug, Default)]
pub struct RigLayoutExtractor;

impl RigLayoutExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl AssetExtractor for RigLayoutExtractor {
    type Value = Arc<RigLayout>;

    fn kind(&self) -> AssetKind {
        AssetKind::RigLayout
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["bundle"]
    }

    fn extract(
        &self,
        unit: &SourceUnit,
        reader: &mut dyn ReadSeek,
    ) -> Result<Vec<Candidate<Arc<RigLayout>>>, ExtractError> {
        let mut bundle = LoadedBundle::open(unit.key(), reader)?;
        let mut candidates = Vec::new();

        for entry in bundle.prefabs()? {
            let prefab = match entry.prefab {
                Ok(p) => p,
                Err(e) => {
                    log::warn!(
                        "Skipping unreadable prefab {} in bundle {}: {e}",
                        entry.member,
                        bundle.name()
                    );
                    continue;
                }
            };

            let Some(layout) = prefab.grid_view() else {
                log::warn!("Prefab {} missing ContainedGridsView.", prefab.name);
                continue;
            };
            if let Some(grid) = layout.find_empty_grid() {
                log::warn!(
                    "Prefab {} has zero-sized grid {grid}, skipping",
                    prefab.name
                );
                continue;
            }

            candidates.push(Candidate::new(prefab.name, Arc::new(layout)));
        }

        Ok(candidates)
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
