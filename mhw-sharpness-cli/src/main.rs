//! mhw-sharpness CLI
//!
//! Harvests weapon statistics from mhw-db.com and mhwg.org, matches the two
//! listings weapon by weapon and merges mhwg.org sharpness onto mhw-db.com
//! records.

mod cli_types;
mod commands;
mod error;
mod events;
mod logging;
mod spinner;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            ExitCode::from(e.exit_code())
        }
    }
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Run {
            categories,
            out_dir,
            timeout,
        } => commands::run::run_harvest(categories, out_dir, timeout, cli.quiet),
        Commands::Extract {
            source,
            category,
            file,
        } => commands::extract::run_extract(source, category, &file),
        Commands::Categories => {
            commands::categories::run_categories();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Show => commands::config::run_config_show(),
        },
    }
}
