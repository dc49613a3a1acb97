use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mhw_sharpness_scraper::{Settings, settings_path};

use crate::error::CliError;

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Show the effective settings and where they came from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "mhw-sharpness Settings".if_supports_color(Stdout, |t| t.bold()),
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
    log::info!("");

    let settings = Settings::load_from(&path)?;
    for line in settings.to_toml()?.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}
