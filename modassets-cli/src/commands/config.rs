use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use modassets_lib::{AssetKind, settings};

use crate::error::CliError;

/// Show the effective settings and where they come from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings::settings_path();
    let settings = match settings::load_settings_from(&path) {
        Ok(s) => {
            log::info!(
                "Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
            s
        }
        Err(settings::SettingsError::Io { .. }) if !path.exists() => {
            log::info!(
                "Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
            );
            settings::Settings::default()
        }
        Err(e) => return Err(CliError::config(e.to_string())),
    };

    log::info!("");
    log::info!("  Plugins directory: {}", settings.plugins_dir().display());
    log::info!("  Mod root:          {}", settings.mod_root().display());
    for &kind in AssetKind::all() {
        for dir in settings.extra_directories(kind) {
            log::info!("  Extra {:<11} {}", kind.display_name(), dir.display());
        }
    }
    log::info!("");
    let rendered =
        settings::settings_string(&settings).map_err(|e| CliError::config(e.to_string()))?;
    log::info!("{rendered}");
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}

/// Write default settings to the settings file.
pub(crate) fn run_config_init(force: bool) -> Result<(), CliError> {
    let path = settings::settings_path();
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    settings::save_settings(&settings::Settings::default())?;
    log::info!(
        "Wrote {}",
        path.display().if_supports_color(Stdout, |t| t.cyan())
    );
    Ok(())
}
