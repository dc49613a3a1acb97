use std::path::Path;

use mhw_sharpness_core::WeaponCategory;
use mhw_sharpness_scraper::{Settings, SourceRole};

use crate::error::CliError;

/// Extract a saved category document offline and print the weapons as JSON.
pub(crate) fn run_extract(
    role: SourceRole,
    category: WeaponCategory,
    file: &Path,
) -> Result<(), CliError> {
    let document = std::fs::read_to_string(file)?;
    let source = role.source(&Settings::default());

    let weapons = source.extract(&document, category)?;
    log::debug!(
        "{}: {} {} weapons from {}",
        source.name(),
        weapons.len(),
        category.short_name(),
        file.display()
    );

    let json = serde_json::to_string_pretty(&weapons)?;
    println!("{json}");
    Ok(())
}
