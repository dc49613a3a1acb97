//! Reference source: the mhw-db.com JSON API.
//!
//! One query per category returns a JSON array of weapon objects. Records
//! are decoded into loosely-typed structs first so that a missing or
//! unexpected field can be reported against the weapon it belongs to.

use serde::Deserialize;
use serde_json::Value;

use mhw_sharpness_core::{
    ElementInfo, FormatError, Sharpness, Slots, Weapon, WeaponCategory, WeaponSpecial,
};

use super::{SourceRole, WeaponSource};
use crate::error::ScrapeError;
use crate::lexicon::api;

pub const DEFAULT_BASE_URL: &str = "https://mhw-db.com";

#[derive(Debug, Deserialize)]
struct ApiWeapon {
    id: Option<u32>,
    name: Option<String>,
    attributes: Option<ApiAttributes>,
    #[serde(default)]
    elements: Vec<ApiElement>,
    #[serde(default)]
    slots: Vec<ApiSlot>,
    #[serde(default)]
    sharpness: Option<ApiSharpness>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiAttributes {
    attack: Option<i32>,
    affinity: Option<i32>,
    defense: Option<i32>,
    elderseal: Option<String>,
    phial_type: Option<String>,
    shelling_type: Option<String>,
    boost_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiElement {
    #[serde(rename = "type")]
    element_type: Option<String>,
    hidden: Option<bool>,
    damage: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ApiSlot {
    rank: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSharpness {
    red: Option<u16>,
    orange: Option<u16>,
    yellow: Option<u16>,
    green: Option<u16>,
    blue: Option<u16>,
    white: Option<u16>,
}

impl ApiSharpness {
    /// Ranks in color order, stopping at the first color the record omits.
    fn ranks(&self) -> Vec<u16> {
        [
            self.red,
            self.orange,
            self.yellow,
            self.green,
            self.blue,
            self.white,
        ]
        .into_iter()
        .map_while(|v| v)
        .map(|v| v.saturating_mul(api::SHARPNESS_SCALE))
        .collect()
    }
}

/// Extract every weapon of `category` from a decoded API response.
pub fn extract_weapons(
    document: &Value,
    category: WeaponCategory,
) -> Result<Vec<Weapon>, FormatError> {
    let records = document
        .as_array()
        .ok_or_else(|| FormatError::document("expected a JSON array of weapons"))?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| extract_weapon(record, index, category))
        .collect()
}

fn extract_weapon(
    record: &Value,
    index: usize,
    category: WeaponCategory,
) -> Result<Weapon, FormatError> {
    // Name first, so every later error can point at the weapon.
    let label = record
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} #{}", category.short_name(), index));

    let raw = ApiWeapon::deserialize(record)
        .map_err(|e| FormatError::malformed(&label, "record", e.to_string()))?;

    let name = raw.name.ok_or_else(|| FormatError::missing(&label, "name"))?;
    let id = raw.id.ok_or_else(|| FormatError::missing(&name, "id"))?;
    let attributes = raw
        .attributes
        .ok_or_else(|| FormatError::missing(&name, "attributes"))?;
    let attack = attributes
        .attack
        .ok_or_else(|| FormatError::missing(&name, "attack"))?;

    let elderseal = match attributes.elderseal.as_deref() {
        Some(token) => api::elderseal(&name, token)?,
        None => Default::default(),
    };

    let elements = raw
        .elements
        .iter()
        .map(|e| extract_element(&name, e))
        .collect::<Result<Vec<_>, _>>()?;

    let slot_ranks = raw
        .slots
        .iter()
        .map(|s| s.rank.ok_or_else(|| FormatError::missing(&name, "slot rank")))
        .collect::<Result<Vec<_>, _>>()?;
    let slots = Slots::from_ranks(&slot_ranks).ok_or_else(|| {
        FormatError::malformed(&name, "slots", format!("invalid slot ranks {slot_ranks:?}"))
    })?;

    let sharpness = Sharpness::from_ranks(raw.sharpness.unwrap_or_default().ranks())
        .ok_or_else(|| {
            FormatError::malformed(&name, "sharpness", "more than six ranks or a rank above 400")
        })?;

    let special = extract_special(&name, category, &attributes)?;

    Ok(Weapon::new(name, category, attack)
        .with_id(id)
        .with_affinity(attributes.affinity.unwrap_or(0))
        .with_defense(attributes.defense.unwrap_or(0))
        .with_elderseal(elderseal)
        .with_elements(elements)
        .with_slots(slots)
        .with_sharpness(sharpness)
        .with_special(special))
}

fn extract_element(weapon: &str, element: &ApiElement) -> Result<ElementInfo, FormatError> {
    let token = element
        .element_type
        .as_deref()
        .ok_or_else(|| FormatError::missing(weapon, "element type"))?;
    Ok(ElementInfo {
        element_type: api::element_type(weapon, token)?,
        hidden: element
            .hidden
            .ok_or_else(|| FormatError::missing(weapon, "element hidden"))?,
        value: element
            .damage
            .ok_or_else(|| FormatError::missing(weapon, "element damage"))?,
    })
}

fn extract_special(
    weapon: &str,
    category: WeaponCategory,
    attributes: &ApiAttributes,
) -> Result<WeaponSpecial, FormatError> {
    Ok(match category {
        WeaponCategory::ChargeBlade => {
            let token = required(weapon, &attributes.phial_type, "phial type")?;
            WeaponSpecial::ChargeBlade {
                phial: api::charge_blade_phial(weapon, token)?,
            }
        }
        WeaponCategory::SwitchAxe => {
            let token = required(weapon, &attributes.phial_type, "phial type")?;
            let (phial, value) = api::switch_axe_phial(weapon, token)?;
            WeaponSpecial::SwitchAxe { phial, value }
        }
        WeaponCategory::Gunlance => {
            let token = required(weapon, &attributes.shelling_type, "shelling type")?;
            let (shelling, level) = api::shelling(weapon, token)?;
            WeaponSpecial::Gunlance { shelling, level }
        }
        WeaponCategory::InsectGlaive => {
            let token = required(weapon, &attributes.boost_type, "kinsect bonus")?;
            WeaponSpecial::InsectGlaive {
                kinsect: api::kinsect_bonus(weapon, token)?,
            }
        }
        // The API has no melody data.
        WeaponCategory::HuntingHorn => WeaponSpecial::HuntingHorn {
            melodies: Vec::new(),
        },
        _ => WeaponSpecial::None,
    })
}

fn required<'a>(
    weapon: &str,
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, FormatError> {
    value
        .as_deref()
        .map(str::trim)
        .ok_or_else(|| FormatError::missing(weapon, field))
}

/// The mhw-db.com API.
#[derive(Debug, Clone)]
pub struct MhwDb {
    base_url: String,
}

impl MhwDb {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for MhwDb {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl WeaponSource for MhwDb {
    fn name(&self) -> &'static str {
        "mhw-db.com"
    }

    fn role(&self) -> SourceRole {
        SourceRole::Reference
    }

    fn category_url(&self, category: WeaponCategory) -> String {
        format!(
            "{}/weapons?q={{%22type%22:%22{}%22}}&p={{%22crafting%22:false,%22assets%22:false}}",
            self.base_url,
            category.short_name()
        )
    }

    fn extract(
        &self,
        document: &str,
        category: WeaponCategory,
    ) -> Result<Vec<Weapon>, ScrapeError> {
        let value: Value = serde_json::from_str(document)?;
        Ok(extract_weapons(&value, category)?)
    }
}

#[cfg(test)]
#[path = "../tests/mhwdb_tests.rs"]
mod tests;
