//! Source units: one file or byte stream handed to an extractor.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};

use crate::ReadSeek;
use crate::util::{file_stem_key, resource_stem};

/// Where a unit's bytes come from.
#[derive(Debug, Clone)]
pub enum UnitData {
    /// A file on disk, opened lazily by [`SourceUnit::open`].
    File(PathBuf),
    /// Bytes already held in memory (embedded resources, caller-supplied data).
    Bytes(Vec<u8>),
}

/// One unit of source data plus the key it defaults to.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    origin: String,
    default_key: String,
    key_override: Option<String>,
    data: UnitData,
}

impl SourceUnit {
    /// A file unit keyed by its file stem (`slot_a.png` -> `slot_a`).
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            origin: path.display().to_string(),
            default_key: file_stem_key(&path).unwrap_or_default(),
            key_override: None,
            data: UnitData::File(path),
        }
    }

    /// An in-memory unit from a named resource inside a container.
    ///
    /// The default key is the resource path with its last extension removed.
    pub fn from_resource(container: &str, resource_path: &str, bytes: Vec<u8>) -> Self {
        Self {
            origin: format!("{container}:{resource_path}"),
            default_key: resource_stem(resource_path),
            key_override: None,
            data: UnitData::Bytes(bytes),
        }
    }

    /// Replace the default key. `None` or an empty key keeps the default.
    pub fn with_key_override(mut self, key: Option<String>) -> Self {
        self.key_override = key.filter(|k| !k.is_empty());
        self
    }

    /// The key the unit resolves to: override first, then the default.
    pub fn key(&self) -> &str {
        self.key_override.as_deref().unwrap_or(&self.default_key)
    }

    /// Label identifying the unit in diagnostics.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn data(&self) -> &UnitData {
        &self.data
    }

    /// The file path, for file-backed units.
    pub fn path(&self) -> Option<&Path> {
        match &self.data {
            UnitData::File(p) => Some(p),
            UnitData::Bytes(_) => None,
        }
    }

    /// Open a seekable reader over the unit's bytes.
    pub fn open(&self) -> std::io::Result<Box<dyn ReadSeek + '_>> {
        match &self.data {
            UnitData::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            UnitData::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn file_unit_defaults_to_stem() {
        let unit = SourceUnit::from_file("/mods/SlotImages/Headwear.PNG");
        assert_eq!(unit.key(), "Headwear");
        assert_eq!(unit.origin(), "/mods/SlotImages/Headwear.PNG");
    }

    #[test]
    fn override_wins_over_default() {
        let unit = SourceUnit::from_file("a/b.png").with_key_override(Some("custom".into()));
        assert_eq!(unit.key(), "custom");
        let unit = SourceUnit::from_file("a/b.png").with_key_override(None);
        assert_eq!(unit.key(), "b");
        let unit = SourceUnit::from_file("a/b.png").with_key_override(Some(String::new()));
        assert_eq!(unit.key(), "b");
    }

    #[test]
    fn resource_unit_strips_last_extension_only() {
        let unit = SourceUnit::from_resource("MyMod", "MyMod.Images.slot.png", vec![1, 2, 3]);
        assert_eq!(unit.key(), "MyMod.Images.slot");
        assert_eq!(unit.origin(), "MyMod:MyMod.Images.slot.png");

        let mut buf = Vec::new();
        unit.open().unwrap().read_to_end(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
    }
}
