//! Settings for the host stand-in: where the plugins live and which extra
//! directories to register at startup.
//!
//! The settings file is `~/.config/modassets/settings.toml`.

use std::path::{Path, PathBuf};

use modassets_core::AssetKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mod directory registered at startup when none is configured.
pub const DEFAULT_MOD_DIRECTORY: &str = "WTT-ClientCommonLib";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub host: HostSettings,
    #[serde(default)]
    pub extra: ExtraDirectories,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostSettings {
    /// Plugins directory; defaults to `<cwd>/BepInEx/plugins`
    pub plugins_dir: Option<PathBuf>,
    #[serde(default = "default_mod_directory")]
    pub mod_directory: String,
}

fn default_mod_directory() -> String {
    DEFAULT_MOD_DIRECTORY.to_string()
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            plugins_dir: None,
            mod_directory: default_mod_directory(),
        }
    }
}

/// Directories registered after the mod directory, per kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtraDirectories {
    #[serde(default)]
    pub voices: Vec<PathBuf>,
    #[serde(default)]
    pub layouts: Vec<PathBuf>,
    #[serde(default)]
    pub images: Vec<PathBuf>,
}

impl Settings {
    /// Configured plugins directory, or `<cwd>/BepInEx/plugins`.
    pub fn plugins_dir(&self) -> PathBuf {
        self.host.plugins_dir.clone().unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("BepInEx")
                .join("plugins")
        })
    }

    /// `plugins_dir/mod_directory`.
    pub fn mod_root(&self) -> PathBuf {
        self.plugins_dir().join(&self.host.mod_directory)
    }

    pub fn extra_directories(&self, kind: AssetKind) -> &[PathBuf] {
        match kind {
            AssetKind::Voice => &self.extra.voices,
            AssetKind::RigLayout => &self.extra.layouts,
            AssetKind::SlotImage => &self.extra.images,
        }
    }
}

/// Returns `~/.config/modassets/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("modassets").join("settings.toml")
}

/// Load settings from a specific file.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load settings from disk, returning defaults if missing or corrupt.
pub fn load_settings() -> Settings {
    let path = settings_path();
    if !path.exists() {
        return Settings::default();
    }
    load_settings_from(&path).unwrap_or_else(|e| {
        log::warn!("{e}; using default settings");
        Settings::default()
    })
}

/// Save settings atomically (write to temp, then rename).
pub fn save_settings_to(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(std::io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    save_settings_to(settings, &settings_path())
}

/// Pretty-printed TOML for display.
pub fn settings_string(settings: &Settings) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(settings)
}
