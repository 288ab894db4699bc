pub(crate) mod config;
pub(crate) mod register;
pub(crate) mod startup;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use modassets_lib::{AssetContext, AssetKind, RegistrationOutcome, RegistrationReport};

/// Log one line per registration call.
pub(crate) fn print_report(kind: AssetKind, path: &Path, report: &RegistrationReport) {
    let status = match report.outcome {
        RegistrationOutcome::Scanned => "scanned".if_supports_color(Stdout, |t| t.green()).to_string(),
        RegistrationOutcome::AlreadyRegistered => {
            "already registered".if_supports_color(Stdout, |t| t.dimmed()).to_string()
        }
        RegistrationOutcome::Invalid => "invalid".if_supports_color(Stdout, |t| t.red()).to_string(),
    };
    log::info!(
        "  {:<11} {} [{}] {} admitted, {} duplicates, {} failed",
        kind.display_name(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
        report.admitted,
        report.duplicates,
        report.failed,
    );
}

/// Log the contents of the host tables.
pub(crate) fn print_summary(ctx: &AssetContext) {
    let host = ctx.host();
    log::info!("");
    log::info!(
        "{}",
        "Host resource tables".if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("  {}: {} entries", host.voice_keys().name(), host.voice_keys().len());
    log::info!(
        "  {}: {} entries",
        host.cached_resources().name(),
        host.cached_resources().len()
    );
    for key in host.cached_resources().keys() {
        log::debug!("    {key}");
    }
}
