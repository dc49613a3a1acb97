//! Name mapping and sharpness merge between the reference and alternate
//! harvests.
//!
//! Each category is reconciled on its own. Every alternate weapon is scored
//! against every reference weapon of the same category; a single best match
//! maps its name, a tie maps it to the list of tied names. A second pass
//! then copies sharpness from each uniquely matched alternate weapon onto
//! its reference weapon and hands the reference id back to the alternate
//! record.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use mhw_sharpness_core::{Weapon, WeaponCategory};

use crate::matcher::best_match_indices;
use crate::output::MergedRecord;

pub type WeaponsByCategory = BTreeMap<WeaponCategory, Vec<Weapon>>;

/// Where an alternate weapon's name maps to.
///
/// Serializes as a bare string or as an array of candidate names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappedName {
    Single(String),
    Ambiguous(Vec<String>),
}

/// Options controlling the reconciliation pass.
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    /// Restrict to these categories, or empty for every harvested one.
    pub categories: Vec<WeaponCategory>,
}

/// Statistics from a reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub categories: usize,
    pub mapped: usize,
    pub ambiguous: usize,
    pub unmatched: usize,
    pub merged: usize,
    pub duplicates: usize,
}

/// A weapon that could not be merged cleanly (used for the run report).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeDetail {
    Ambiguous {
        category: WeaponCategory,
        alternate: String,
        candidates: Vec<String>,
    },
    Unmatched {
        category: WeaponCategory,
        alternate: String,
    },
    Duplicate {
        category: WeaponCategory,
        alternate: String,
        reference: String,
    },
}

/// Result of reconciliation including stats and per-weapon details.
#[derive(Debug, Clone, Default)]
pub struct ReconcileResult {
    pub mapping: BTreeMap<String, MappedName>,
    pub merged: Vec<MergedRecord>,
    pub stats: ReconcileStats,
    pub details: Vec<MergeDetail>,
}

/// Reconcile `alternate` onto `reference`.
///
/// Reference weapons that receive a merge get the alternate sharpness;
/// alternate weapons that merge get the reference id.
pub fn reconcile(
    reference: &mut WeaponsByCategory,
    alternate: &mut WeaponsByCategory,
    options: &ReconcileOptions,
) -> ReconcileResult {
    let mut result = ReconcileResult::default();

    let categories: Vec<WeaponCategory> = alternate
        .keys()
        .copied()
        .filter(|c| options.categories.is_empty() || options.categories.contains(c))
        .collect();

    for category in categories {
        let Some(alternates) = alternate.get_mut(&category) else {
            continue;
        };
        let references: &mut [Weapon] = match reference.get_mut(&category) {
            Some(weapons) => weapons,
            None => &mut [],
        };
        reconcile_category(category, references, alternates, &mut result);
        result.stats.categories += 1;
    }

    log::info!(
        "Reconciled {} categories: {} mapped, {} ambiguous, {} unmatched, {} merged",
        result.stats.categories,
        result.stats.mapped,
        result.stats.ambiguous,
        result.stats.unmatched,
        result.stats.merged
    );
    result
}

fn reconcile_category(
    category: WeaponCategory,
    references: &mut [Weapon],
    alternates: &mut [Weapon],
    result: &mut ReconcileResult,
) {
    // Name mapping
    let matches: Vec<Vec<usize>> = alternates
        .iter()
        .map(|alt| best_match_indices(alt, references))
        .collect();

    for (alt, best) in alternates.iter().zip(&matches) {
        let mapped = match best.as_slice() {
            [] => {
                log::warn!("{}: no {} to match against", alt.name(), category);
                result.stats.unmatched += 1;
                result.details.push(MergeDetail::Unmatched {
                    category,
                    alternate: alt.name().to_string(),
                });
                continue;
            }
            [single] => MappedName::Single(references[*single].name().to_string()),
            tied => MappedName::Ambiguous(
                tied.iter()
                    .map(|&i| references[i].name().to_string())
                    .collect(),
            ),
        };

        let slot = match result.mapping.entry(alt.name().to_string()) {
            Entry::Vacant(slot) => slot,
            Entry::Occupied(_) => {
                log::warn!("{}: name appears more than once, keeping the first", alt.name());
                continue;
            }
        };
        if let MappedName::Ambiguous(candidates) = &mapped {
            log::debug!("{}: {} equally good matches", alt.name(), candidates.len());
            result.stats.ambiguous += 1;
            result.details.push(MergeDetail::Ambiguous {
                category,
                alternate: alt.name().to_string(),
                candidates: candidates.clone(),
            });
        } else {
            result.stats.mapped += 1;
        }
        slot.insert(mapped);
    }

    // Sharpness merge
    let mut claimed = HashSet::new();
    for (alt, best) in alternates.iter_mut().zip(&matches) {
        let &[index] = best.as_slice() else {
            continue;
        };
        let target = &mut references[index];
        if !claimed.insert(index) {
            log::warn!(
                "{}: {} already merged from another weapon",
                alt.name(),
                target.name()
            );
            result.stats.duplicates += 1;
            result.details.push(MergeDetail::Duplicate {
                category,
                alternate: alt.name().to_string(),
                reference: target.name().to_string(),
            });
            continue;
        }

        target.replace_sharpness(alt.sharpness().clone());
        if let Some(id) = target.id() {
            alt.assign_id(id);
        }
        match MergedRecord::from_weapon(target) {
            Some(record) => {
                result.merged.push(record);
                result.stats.merged += 1;
            }
            None => log::warn!("{}: reference weapon has no id", target.name()),
        }
    }

    log::debug!(
        "{}: {} alternate, {} reference weapons",
        category,
        alternates.len(),
        references.len()
    );
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
