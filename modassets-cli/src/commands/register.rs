use std::path::{Path, PathBuf};

use modassets_lib::{AssetContext, AssetKind, RegistrationOutcome};

use crate::commands::{print_report, print_summary};
use crate::error::CliError;

/// Register directories of one kind.
pub(crate) fn run_register(kind: AssetKind, dirs: &[PathBuf]) -> Result<(), CliError> {
    let ctx = AssetContext::global();
    let mut any_valid = false;
    for dir in dirs {
        let report = ctx.register_directory(kind, dir);
        any_valid |= report.outcome != RegistrationOutcome::Invalid;
        print_report(kind, dir, &report);
    }
    print_summary(ctx);

    if any_valid {
        Ok(())
    } else {
        Err(CliError::registration(format!(
            "no valid {kind} directory given"
        )))
    }
}

/// Register a single slot image file.
pub(crate) fn run_image(file: &Path, key: Option<&str>) -> Result<(), CliError> {
    let ctx = AssetContext::global();
    let report = ctx.slot_images().register_slot_image(file, key);
    print_report(AssetKind::SlotImage, file, &report);
    print_summary(ctx);

    match report.outcome {
        RegistrationOutcome::Invalid => Err(CliError::registration(format!(
            "invalid or missing image file: {}",
            file.display()
        ))),
        _ if report.failed > 0 => Err(CliError::registration(format!(
            "could not decode {}",
            file.display()
        ))),
        _ => Ok(()),
    }
}
