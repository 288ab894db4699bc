//! modassets CLI
//!
//! Stand-in host for the asset registries: runs the startup registration
//! sequence or registers individual directories and images, then reports
//! what landed in the host tables.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use modassets_lib::AssetKind;

mod commands;
mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "modassets")]
#[command(about = "Register mod voice, rig layout and slot image assets", long_about = None)]
struct Cli {
    /// Show debug diagnostics (duplicates, bundle loads, each added key)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the mod directory and configured extra directories
    Startup {
        /// Plugins directory (overrides settings)
        #[arg(long)]
        plugins_dir: Option<PathBuf>,

        /// Mod directory name under the plugins directory (overrides settings)
        #[arg(long)]
        mod_directory: Option<String>,
    },

    /// Register one or more directories of a single asset kind
    Register {
        /// Asset kind (voices, layouts, images)
        kind: AssetKind,

        /// Directories to register, in order
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
    },

    /// Register a single slot image file
    Image {
        /// Image file (.png, .jpg, .jpeg, .bmp)
        file: PathBuf,

        /// Slot key (defaults to the file name without extension)
        #[arg(long)]
        key: Option<String>,
    },

    /// Show or locate the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Print the settings file path
    Path,
    /// Write a default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), CliError> = match cli.command {
        Commands::Startup {
            plugins_dir,
            mod_directory,
        } => commands::startup::run_startup(plugins_dir, mod_directory),
        Commands::Register { kind, dirs } => commands::register::run_register(kind, &dirs),
        Commands::Image { file, key } => commands::register::run_image(&file, key.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Init { force } => commands::config::run_config_init(force),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
