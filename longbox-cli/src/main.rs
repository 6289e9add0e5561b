//! longbox CLI
//!
//! Command-line interface for tagging, renaming and filing comic archives.

mod cli_types;
mod commands;
mod error;
mod interrupt;
mod prompt;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use longbox_lib::settings::{load_settings_from, settings_path};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Plain messages at the default level; timestamps and levels with
/// `--verbose`. `RUST_LOG` still wins when set.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if !verbose {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.parse_default_env();
    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let path = cli.config.clone().unwrap_or_else(settings_path);
    let settings = load_settings_from(&path);
    log::debug!("Settings from {}", path.display());

    match cli.command {
        Commands::Import(args) => commands::import::run_import(settings, args, cli.quiet),
        Commands::Inspect { file } => commands::inspect::run_inspect(&settings, &file),
        Commands::Convert {
            input,
            output,
            force,
        } => commands::convert::run_convert(&input, &output, force),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings, &path),
            ConfigAction::Path => {
                commands::config::run_config_path(&path);
                Ok(())
            }
            ConfigAction::Init => commands::config::run_config_init(&path),
        },
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(e.exit_code());
    }
}
