//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mhw_sharpness_core::WeaponCategory;
use mhw_sharpness_scraper::SourceRole;

#[derive(Parser)]
#[command(name = "mhw-sharpness")]
#[command(
    about = "Harvest Monster Hunter World weapon stats and merge sharpness across sources",
    long_about = None
)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Harvest both sources, reconcile them and write the outputs
    Run {
        /// Weapon categories or aliases (e.g., gs,ls,cb); defaults to all
        #[arg(short, long, value_delimiter = ',')]
        categories: Option<Vec<WeaponCategory>>,

        /// Directory for name-mapping.json, merged.json and reconcile.log
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Per-request timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Extract weapons from a saved category document and print them as JSON
    Extract {
        /// Which source the document came from (reference or alternate)
        #[arg(short, long)]
        source: SourceRole,

        /// Weapon category of the document
        #[arg(short, long)]
        category: WeaponCategory,

        /// Path to the saved document
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List weapon categories with their aliases and listing pages
    Categories,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the effective settings
    Show,
}
