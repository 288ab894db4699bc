use std::sync::Arc;

use modassets_core::{AssetExtractor, AssetKind, Candidate, ExtractError, ReadSeek, SourceUnit};

use crate::sprite::SlotSprite;

/// Extractor for slot images. Each unit yields exactly one sprite, keyed by
/// the unit's key (override, file stem, or resource stem).
#[derive(Debug, Default)]
pub struct SlotImageExtractor;

impl SlotImageExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Decode raw image bytes into a sprite.
    pub fn decode(data: &[u8]) -> Result<SlotSprite, ExtractError> {
        let image =
            image::load_from_memory(data).map_err(|e| ExtractError::decode(e.to_string()))?;
        Ok(SlotSprite::from_image(image.into_rgba8()))
    }
}

impl AssetExtractor for SlotImageExtractor {
    type Value = Arc<SlotSprite>;

    fn kind(&self) -> AssetKind {
        AssetKind::SlotImage
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["png", "jpg", "jpeg", "bmp"]
    }

    fn unit_key(&self, unit: &SourceUnit) -> Option<String> {
        Some(unit.key().to_string())
    }

    fn extract(
        &self,
        unit: &SourceUnit,
        reader: &mut dyn ReadSeek,
    ) -> Result<Vec<Candidate<Arc<SlotSprite>>>, ExtractError> {
        if unit.key().is_empty() {
            return Err(ExtractError::other("slot image has no usable key"));
        }

        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        let sprite = Self::decode(&data)?;

        Ok(vec![Candidate::new(unit.key(), Arc::new(sprite))])
    }
}

#[cfg(test)]
#[path = "tests/slot_tests.rs"]
mod tests;
