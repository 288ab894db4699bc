//! Scoped access to a loaded bundle archive.

use std::io::Read;

use modassets_core::{ExtractError, ReadSeek};
use zip::ZipArchive;

use crate::prefab::Prefab;

/// A bundle archive held open for the duration of one extraction.
///
/// The archive is released when the handle drops, on success and on every
/// error path alike.
pub struct LoadedBundle<'a> {
    name: String,
    archive: ZipArchive<&'a mut dyn ReadSeek>,
}

/// One prefab member read from a bundle.
#[derive(Debug)]
pub struct PrefabEntry {
    /// Archive member path (for diagnostics)
    pub member: String,
    /// Parsed prefab, or the reason it could not be read
    pub prefab: Result<Prefab, String>,
}

impl<'a> LoadedBundle<'a> {
    /// Open a bundle from a reader. Fails if the data is not a bundle archive.
    pub fn open(name: impl Into<String>, reader: &'a mut dyn ReadSeek) -> Result<Self, ExtractError> {
        let name = name.into();
        let archive = ZipArchive::new(reader).map_err(|e| {
            ExtractError::invalid_format(format!("failed to load bundle {name}: {e}"))
        })?;
        log::debug!("Loaded rig layout bundle {name} ({} members)", archive.len());
        Ok(Self { name, archive })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read every `.json` member as a prefab, in archive order.
    ///
    /// A member that cannot be read or parsed is returned with its error
    /// rather than failing the bundle.
    pub fn prefabs(&mut self) -> Result<Vec<PrefabEntry>, ExtractError> {
        let mut entries = Vec::new();
        for index in 0..self.archive.len() {
            let mut file = self.archive.by_index(index).map_err(|e| {
                ExtractError::invalid_format(format!("bundle {} member {index}: {e}", self.name))
            })?;
            if file.is_dir() {
                continue;
            }
            let member = file.name().to_string();
            let is_json = member
                .rsplit_once('.')
                .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("json"));
            if !is_json {
                continue;
            }

            let mut contents = String::new();
            let prefab = match file.read_to_string(&mut contents) {
                Ok(_) => serde_json::from_str::<Prefab>(&contents).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            entries.push(PrefabEntry { member, prefab });
        }
        Ok(entries)
    }
}

impl Drop for LoadedBundle<'_> {
    fn drop(&mut self) {
        log::debug!("Unloaded rig layout bundle {}", self.name);
    }
}
