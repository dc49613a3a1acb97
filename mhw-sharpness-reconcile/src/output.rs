//! JSON exports: the name mapping and the merged sharpness records.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mhw_sharpness_core::{SharpnessByColor, Weapon};

use crate::error::ReconcileError;
use crate::reconcile::MappedName;

pub const MAPPING_FILE: &str = "name-mapping.json";
pub const MERGED_FILE: &str = "merged.json";
pub const REPORT_FILE: &str = "reconcile.log";

/// One reference weapon carrying the alternate source's sharpness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub id: u32,
    pub name: String,
    pub sharpness: SharpnessByColor,
}

impl MergedRecord {
    /// `None` when the weapon has no reference id.
    pub fn from_weapon(weapon: &Weapon) -> Option<Self> {
        Some(Self {
            id: weapon.id()?,
            name: weapon.name().to_string(),
            sharpness: weapon.sharpness().to_colors(),
        })
    }
}

/// Build merged records for the given reference weapons, in order.
pub fn merged_records<'a>(weapons: impl IntoIterator<Item = &'a Weapon>) -> Vec<MergedRecord> {
    weapons
        .into_iter()
        .filter_map(MergedRecord::from_weapon)
        .collect()
}

/// Write `name-mapping.json`: alternate name to reference name(s).
pub fn write_mapping(
    path: &Path,
    mapping: &BTreeMap<String, MappedName>,
) -> Result<(), ReconcileError> {
    write_json(path, mapping)
}

/// Write `merged.json`.
pub fn write_merged(path: &Path, records: &[MergedRecord]) -> Result<(), ReconcileError> {
    write_json(path, records)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ReconcileError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ReconcileError::io(parent, e))?;
    }
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|e| ReconcileError::io(path, e))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
