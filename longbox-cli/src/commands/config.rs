use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use longbox_core::{Provider, Vocabulary};
use longbox_lib::Settings;
use longbox_lib::settings::save_settings_to;

use crate::CliError;

/// Show the current settings with secrets masked.
pub(crate) fn run_config_show(settings: &Settings, path: &Path) -> Result<(), CliError> {
    log::info!(
        "{}",
        "longbox Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    for provider in Provider::all() {
        let status = if settings.providers.is_configured(*provider) {
            "configured".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "not set".if_supports_color(Stdout, |t| t.yellow()).to_string()
        };
        log::info!(
            "  {} {}",
            format!("{}:", provider.title()).if_supports_color(Stdout, |t| t.cyan()),
            status,
        );
    }
    log::info!("");

    let toml = settings
        .masked()
        .to_toml()
        .map_err(|e| CliError::config(format!("Failed to render settings: {e}")))?;
    for line in toml.lines() {
        log::info!("{line}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(path: &Path) {
    log::info!("{}", path.display());
}

/// Write the default settings, leaving an existing file alone.
pub(crate) fn run_config_init(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        log::warn!(
            "{} already exists, not overwriting",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
        return Ok(());
    }
    save_settings_to(&Settings::default(), path)
        .map_err(|e| CliError::config(format!("Failed to write {}: {e}", path.display())))?;
    log::info!(
        "{} Settings written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
