use std::collections::BTreeMap;

use modassets_core::{AssetExtractor, AssetKind, Candidate, ExtractError, ReadSeek, SourceUnit};

/// Extractor for JSON voice mappings (`key -> path` strings).
///
/// The whole file is one unit: malformed JSON, or any non-string value,
/// fails the file without yielding a partial set. A leading byte-order mark
/// is ignored.
#[derive(Debug, Default)]
pub struct VoiceExtractor;

impl VoiceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl AssetExtractor for VoiceExtractor {
    type Value = String;

    fn kind(&self) -> AssetKind {
        AssetKind::Voice
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn extract(
        &self,
        _unit: &SourceUnit,
        reader: &mut dyn ReadSeek,
    ) -> Result<Vec<Candidate<String>>, ExtractError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        // BTreeMap keeps admission order stable within a file.
        let entries: BTreeMap<String, String> = serde_json::from_str(text)
            .map_err(|e| ExtractError::invalid_format(e.to_string()))?;

        Ok(entries
            .into_iter()
            .map(|(key, value)| Candidate::new(key, value))
            .collect())
    }
}

#[cfg(test)]
#[path = "tests/voice_tests.rs"]
mod tests;
