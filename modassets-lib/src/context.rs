//! The three registration facades over one set of host tables.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use modassets_core::AssetKind;

use crate::coordinator::RegistrationReport;
use crate::host::HostResources;
use crate::layouts::RigLayoutManager;
use crate::settings::Settings;
use crate::slots::SlotImageManager;
use crate::voices::VoiceManager;

/// Process-wide registration context.
///
/// Holds exactly one manager per asset kind. Use [`AssetContext::global`] for
/// the shared instance other mods register into, or construct one over your
/// own [`HostResources`] (tests, tools).
pub struct AssetContext {
    host: HostResources,
    voices: VoiceManager,
    layouts: RigLayoutManager,
    slots: SlotImageManager,
}

impl Default for AssetContext {
    fn default() -> Self {
        Self::new(HostResources::new())
    }
}

impl AssetContext {
    pub fn new(host: HostResources) -> Self {
        Self {
            voices: VoiceManager::with_host(&host),
            layouts: RigLayoutManager::with_host(&host),
            slots: SlotImageManager::with_host(&host),
            host,
        }
    }

    /// The shared context, created on first use.
    pub fn global() -> &'static AssetContext {
        static GLOBAL: OnceLock<AssetContext> = OnceLock::new();
        GLOBAL.get_or_init(AssetContext::default)
    }

    pub fn host(&self) -> &HostResources {
        &self.host
    }

    pub fn voices(&self) -> &VoiceManager {
        &self.voices
    }

    pub fn rig_layouts(&self) -> &RigLayoutManager {
        &self.layouts
    }

    pub fn slot_images(&self) -> &SlotImageManager {
        &self.slots
    }

    /// Register a directory with the manager for `kind`.
    pub fn register_directory(&self, kind: AssetKind, path: &Path) -> RegistrationReport {
        match kind {
            AssetKind::Voice => self.voices.register_directory(path),
            AssetKind::RigLayout => self.layouts.register_directory(path),
            AssetKind::SlotImage => self.slots.register_directory(path),
        }
    }

    /// Register a mod's `RigLayouts`, `SlotImages` and `Voices` subdirectories,
    /// in that order.
    pub fn register_mod_directory(
        &self,
        mod_dir: &Path,
    ) -> Vec<(AssetKind, PathBuf, RegistrationReport)> {
        AssetKind::all()
            .iter()
            .map(|&kind| {
                let dir = mod_dir.join(kind.default_subdir());
                let report = self.register_directory(kind, &dir);
                (kind, dir, report)
            })
            .collect()
    }

    /// Startup sequence: the configured mod directory, then every extra
    /// directory from settings.
    ///
    /// A missing plugins directory is only a warning; the extra directories
    /// are still registered.
    pub fn register_from_settings(
        &self,
        settings: &Settings,
    ) -> Vec<(AssetKind, PathBuf, RegistrationReport)> {
        let plugins = settings.plugins_dir();
        if !plugins.is_dir() {
            log::warn!("Plugins directory not found: {}", plugins.display());
        }

        let mut results = self.register_mod_directory(&settings.mod_root());
        for &kind in AssetKind::all() {
            for dir in settings.extra_directories(kind) {
                let report = self.register_directory(kind, dir);
                results.push((kind, dir.clone(), report));
            }
        }
        results
    }
}
