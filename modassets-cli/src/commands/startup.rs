use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use modassets_lib::{AssetContext, settings};

use crate::commands::{print_report, print_summary};
use crate::error::CliError;

/// Run the host startup sequence from settings, with CLI overrides.
pub(crate) fn run_startup(
    plugins_dir: Option<PathBuf>,
    mod_directory: Option<String>,
) -> Result<(), CliError> {
    let mut settings = settings::load_settings();
    if let Some(dir) = plugins_dir {
        settings.host.plugins_dir = Some(dir);
    }
    if let Some(name) = mod_directory {
        settings.host.mod_directory = name;
    }

    log::info!(
        "{} {}",
        "Registering".if_supports_color(Stdout, |t| t.bold()),
        settings.mod_root().display(),
    );

    let ctx = AssetContext::global();
    for (kind, dir, report) in ctx.register_from_settings(&settings) {
        print_report(kind, &dir, &report);
    }
    print_summary(ctx);
    Ok(())
}
