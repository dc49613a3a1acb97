//! Alternate source: the mhwg.org weapon listing pages.
//!
//! Each page is one long table. A weapon row is anchored by its icon
//! (`img.wp_img`), followed by the name, an attack cell (`td.b`), a cell
//! mixing elements/affinity/defense/elderseal one per line, an optional
//! category-specific cell, the sharpness gauge (`div.kireage` holding
//! `span.krN` runs) and finally the slot cell. The walk below follows that
//! order with a single forward cursor.

use mhw_sharpness_core::{
    EldersealLevel, ElementInfo, FormatError, Melody, SHARPNESS_COLORS, Sharpness, Weapon,
    WeaponCategory, WeaponSpecial,
};

use super::{SourceRole, WeaponSource};
use crate::error::ScrapeError;
use crate::lexicon::{first_number, html};
use crate::markup::{self, Scanner, Tag};

pub const DEFAULT_BASE_URL: &str = "http://mhwg.org";

/// Page that every melody link on hunting horn rows points at.
const MELODY_LINK_PREFIX: &str = "/data/4243.html#";

/// Sharpness classes at or above this value are decoration, not ranks.
const SHARPNESS_END_CLASS: usize = 7;

/// Extract every weapon of `category` from a listing page.
pub fn extract_weapons(
    document: &str,
    category: WeaponCategory,
) -> Result<Vec<Weapon>, FormatError> {
    let mut scanner = Scanner::new(document);
    let mut weapons = Vec::new();

    while scanner.find(|t| t.is("img") && t.has_class("wp_img")).is_some() {
        let weapon = extract_weapon(&mut scanner, category)?;
        log::trace!("mhwg: {weapon}");
        weapons.push(weapon);
    }

    Ok(weapons)
}

fn extract_weapon(
    scanner: &mut Scanner<'_>,
    category: WeaponCategory,
) -> Result<Weapon, FormatError> {
    let anchor = format!("weapon row at byte {}", scanner.position());

    // Name
    let name_cell = scanner
        .until("</td>")
        .ok_or_else(|| FormatError::missing(&anchor, "name"))?;
    let name = weapon_name(name_cell).ok_or_else(|| FormatError::missing(&anchor, "name"))?;

    // Attack
    let attack_tag = scanner
        .find(|t| t.is("td") && t.has_class("b"))
        .ok_or_else(|| FormatError::missing(&name, "attack"))?;
    let attack_text = scanner
        .content(&attack_tag)
        .ok_or_else(|| FormatError::missing(&name, "attack"))?;
    let attack = attack_text
        .trim()
        .parse()
        .map_err(|_| FormatError::unrecognized(&name, "attack", attack_text.trim()))?;

    // Elements, affinity, defense, elderseal
    scanner
        .find(|t| t.is("td") && t.has_any_class())
        .ok_or_else(|| FormatError::missing(&name, "element cell"))?;
    let element_cell = scanner
        .until("</td>")
        .ok_or_else(|| FormatError::malformed(&name, "element cell", "unterminated cell"))?;
    let misc = element_cell_values(&name, element_cell)?;

    let special = extract_special(scanner, &name, category)?;
    let sharpness = extract_sharpness(scanner, &name)?;

    // Slots
    let slot_tag = scanner
        .find(|t| t.is("td") && t.has_any_class())
        .ok_or_else(|| FormatError::missing(&name, "slots"))?;
    let slot_text = scanner
        .content(&slot_tag)
        .ok_or_else(|| FormatError::missing(&name, "slots"))?;
    let slots = html::slots(&name, slot_text)?;

    Ok(Weapon::new(name, category, attack)
        .with_affinity(misc.affinity)
        .with_defense(misc.defense)
        .with_elderseal(misc.elderseal)
        .with_elements(misc.elements)
        .with_slots(slots)
        .with_sharpness(sharpness)
        .with_special(special))
}

/// The name cell either links to the weapon's detail page or is bare text.
fn weapon_name(cell: &str) -> Option<String> {
    let mut cursor = 0;
    let link = markup::find(cell, &mut cursor, |t| {
        t.is("a") && t.href_starts_with("/ida/")
    });
    let name = match link {
        Some(link) => markup::content_of(cell, &link)?,
        None => cell,
    };
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[derive(Debug, Default)]
struct ElementCell {
    affinity: i32,
    defense: i32,
    elderseal: EldersealLevel,
    elements: Vec<ElementInfo>,
}

fn is_elderseal(tag: &Tag) -> bool {
    tag.is("span") && tag.has_class("c_p") && tag.has_class("b")
}

fn is_element(tag: &Tag) -> bool {
    tag.is("span") && tag.class_with_prefix("type_").is_some()
}

/// Read the element cell line by line. The cell ends at the first line
/// that is none of element, elderseal, affinity or defense.
fn element_cell_values(weapon: &str, cell: &str) -> Result<ElementCell, FormatError> {
    let mut values = ElementCell::default();

    for line in cell.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let mut cursor = 0;
        match markup::find(line, &mut cursor, |t| is_elderseal(t) || is_element(t)) {
            Some(tag) if is_elderseal(&tag) => {
                let content = markup::content_of(line, &tag)
                    .ok_or_else(|| FormatError::missing(weapon, "elderseal"))?;
                values.elderseal = html::elderseal(weapon, content)?;
            }
            Some(tag) => {
                let content = markup::content_of(line, &tag)
                    .ok_or_else(|| FormatError::missing(weapon, "element"))?;
                values.elements.push(html::element(weapon, content)?);
            }
            None if line.starts_with("会心") => values.affinity = affinity(weapon, line)?,
            None if line.starts_with("防御") => {
                values.defense = first_number(line)
                    .ok_or_else(|| FormatError::unrecognized(weapon, "defense", line))?;
            }
            None => break,
        }
    }

    Ok(values)
}

/// `会心<span class="c_r">-20</span>%`: the value is the first tag's content.
fn affinity(weapon: &str, line: &str) -> Result<i32, FormatError> {
    let tag = markup::next_tag(line, 0)
        .filter(|t| t.is("span"))
        .ok_or_else(|| FormatError::missing(weapon, "affinity"))?;
    let content = markup::content_of(line, &tag)
        .ok_or_else(|| FormatError::missing(weapon, "affinity"))?
        .trim();
    content
        .trim_end_matches('%')
        .parse()
        .map_err(|_| FormatError::unrecognized(weapon, "affinity", content))
}

/// Content of the next `td` with class `type_0`.
fn type_cell<'a>(
    scanner: &mut Scanner<'a>,
    weapon: &str,
    field: &'static str,
) -> Result<&'a str, FormatError> {
    let tag = scanner
        .find(|t| t.is("td") && t.has_class("type_0"))
        .ok_or_else(|| FormatError::missing(weapon, field))?;
    scanner
        .content(&tag)
        .ok_or_else(|| FormatError::missing(weapon, field))
}

fn extract_special(
    scanner: &mut Scanner<'_>,
    weapon: &str,
    category: WeaponCategory,
) -> Result<WeaponSpecial, FormatError> {
    Ok(match category {
        WeaponCategory::ChargeBlade => WeaponSpecial::ChargeBlade {
            phial: html::charge_blade_phial(weapon, type_cell(scanner, weapon, "phial type")?)?,
        },
        WeaponCategory::SwitchAxe => {
            // Switch axe phial cells are colored per phial (`type_N`).
            let tag = scanner
                .find(|t| t.is("td") && t.class_with_prefix("type_").is_some())
                .ok_or_else(|| FormatError::missing(weapon, "phial type"))?;
            let content = scanner
                .content(&tag)
                .ok_or_else(|| FormatError::missing(weapon, "phial type"))?;
            let (phial, value) = html::switch_axe_phial(weapon, content)?;
            WeaponSpecial::SwitchAxe { phial, value }
        }
        WeaponCategory::Gunlance => {
            let (shelling, level) =
                html::shelling(weapon, type_cell(scanner, weapon, "shelling type")?)?;
            WeaponSpecial::Gunlance { shelling, level }
        }
        WeaponCategory::InsectGlaive => WeaponSpecial::InsectGlaive {
            kinsect: html::kinsect_bonus(weapon, type_cell(scanner, weapon, "kinsect bonus")?)?,
        },
        WeaponCategory::HuntingHorn => WeaponSpecial::HuntingHorn {
            melodies: extract_melodies(scanner, weapon)?,
        },
        _ => WeaponSpecial::None,
    })
}

/// Three note icons directly follow the melody link, colored inline.
fn extract_melodies(
    scanner: &mut Scanner<'_>,
    weapon: &str,
) -> Result<Vec<Melody>, FormatError> {
    scanner
        .find(|t| t.is("a") && t.href_starts_with(MELODY_LINK_PREFIX))
        .ok_or_else(|| FormatError::missing(weapon, "melodies"))?;

    (0..3)
        .map(|_| {
            let note = scanner
                .next_tag()
                .ok_or_else(|| FormatError::missing(weapon, "melody note"))?;
            let style = note
                .attr("style")
                .ok_or_else(|| FormatError::missing(weapon, "melody style"))?;
            let properties = markup::parse_style(style)
                .ok_or_else(|| FormatError::unrecognized(weapon, "melody style", style))?;
            let color = properties
                .get("color")
                .ok_or_else(|| FormatError::missing(weapon, "melody color"))?;
            html::melody(weapon, color)
        })
        .collect()
}

/// Walk the `krN` spans of the sharpness gauge. Each span's length in
/// characters is the width of rank N; empty ranks in between stay 0.
///
/// The walk is confined to the gauge's cell. The cell may hold a second
/// gauge (sharpness with Handicraft) which starts with another `kr7` and
/// ends the walk.
fn extract_sharpness(scanner: &mut Scanner<'_>, weapon: &str) -> Result<Sharpness, FormatError> {
    scanner
        .find(|t| t.is("div") && t.has_class("kireage"))
        .ok_or_else(|| FormatError::missing(weapon, "sharpness"))?;
    let gauge = scanner
        .until("</td>")
        .ok_or_else(|| FormatError::malformed(weapon, "sharpness", "unterminated cell"))?;

    let mut cursor = 0;
    markup::find(gauge, &mut cursor, |t| t.is("span") && t.has_class("kr7"))
        .ok_or_else(|| FormatError::missing(weapon, "sharpness"))?;

    let mut ranks = [0u16; SHARPNESS_COLORS.len()];
    for _ in 0..SHARPNESS_END_CLASS {
        let tag = markup::find(gauge, &mut cursor, |t| {
            t.is("span") && t.class_with_prefix("kr").is_some()
        });
        let Some(tag) = tag else {
            break;
        };
        let class = tag.class_with_prefix("kr").unwrap_or_default();
        let rank: usize = class[2..]
            .parse()
            .map_err(|_| FormatError::unrecognized(weapon, "sharpness rank", class))?;
        if rank >= SHARPNESS_END_CLASS {
            break;
        }

        let content = markup::content_of(gauge, &tag)
            .ok_or_else(|| FormatError::missing(weapon, "sharpness rank"))?;
        let value = html::sharpness_rank_value(content);
        match ranks.get_mut(rank) {
            Some(slot) => *slot = value,
            None if value == 0 => {}
            None => {
                return Err(FormatError::malformed(
                    weapon,
                    "sharpness",
                    format!(
                        "rank {class} is beyond {}",
                        SHARPNESS_COLORS[html::MAX_SHARPNESS_CLASS]
                    ),
                ));
            }
        }
    }

    Sharpness::from_ranks(ranks)
        .ok_or_else(|| {
            FormatError::malformed(weapon, "sharpness", "more than six ranks or a rank above 400")
        })
}

/// The mhwg.org listing site.
#[derive(Debug, Clone)]
pub struct Mhwg {
    base_url: String,
}

impl Mhwg {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for Mhwg {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl WeaponSource for Mhwg {
    fn name(&self) -> &'static str {
        "mhwg.org"
    }

    fn role(&self) -> SourceRole {
        SourceRole::Alternate
    }

    fn category_url(&self, category: WeaponCategory) -> String {
        format!("{}/data/{}.html", self.base_url, category.listing_page())
    }

    fn extract(
        &self,
        document: &str,
        category: WeaponCategory,
    ) -> Result<Vec<Weapon>, ScrapeError> {
        Ok(extract_weapons(document, category)?)
    }
}

#[cfg(test)]
#[path = "../tests/mhwg_tests.rs"]
mod tests;
