//! English tokens used by the reference API.

use mhw_sharpness_core::{
    ChargeBladePhial, EldersealLevel, ElementType, FormatError, KinsectBonus, ShellingType,
    SwitchAxePhial,
};

use super::split_numeric_suffix;

/// Factor from the API's per-rank sharpness units to the canonical scale.
pub const SHARPNESS_SCALE: u16 = 4;

pub fn element_type(weapon: &str, token: &str) -> Result<ElementType, FormatError> {
    Ok(match token {
        "fire" => ElementType::Fire,
        "water" => ElementType::Water,
        "thunder" => ElementType::Thunder,
        "ice" => ElementType::Ice,
        "dragon" => ElementType::Dragon,
        "poison" => ElementType::Poison,
        "sleep" => ElementType::Sleep,
        "paralysis" => ElementType::Paralysis,
        "blast" => ElementType::Blast,
        "stun" => ElementType::Stun,
        _ => return Err(FormatError::unrecognized(weapon, "element type", token)),
    })
}

pub fn elderseal(weapon: &str, token: &str) -> Result<EldersealLevel, FormatError> {
    Ok(match token {
        "low" => EldersealLevel::Low,
        "average" => EldersealLevel::Average,
        "high" => EldersealLevel::High,
        _ => return Err(FormatError::unrecognized(weapon, "elderseal", token)),
    })
}

pub fn charge_blade_phial(weapon: &str, token: &str) -> Result<ChargeBladePhial, FormatError> {
    Ok(match token {
        "Impact Phial" => ChargeBladePhial::Impact,
        "Power Element Phial" => ChargeBladePhial::Elemental,
        _ => return Err(FormatError::unrecognized(weapon, "phial type", token)),
    })
}

/// `"Poison Phial 300"`, `"Power Phial"`, ...
pub fn switch_axe_phial(weapon: &str, token: &str) -> Result<(SwitchAxePhial, i32), FormatError> {
    let (name, value) = split_numeric_suffix(token)
        .map_err(|e| FormatError::malformed(weapon, "phial type", format!("'{token}': {e}")))?;
    let phial = match name {
        "Power Phial" => SwitchAxePhial::Power,
        "Power Element Phial" => SwitchAxePhial::PowerElement,
        "Dragon Phial" => SwitchAxePhial::Dragon,
        "Exhaust Phial" => SwitchAxePhial::Exhaust,
        "Para Phial" => SwitchAxePhial::Paralysis,
        "Poison Phial" => SwitchAxePhial::Poison,
        _ => return Err(FormatError::unrecognized(weapon, "phial type", token)),
    };
    Ok((phial, value))
}

/// `"Normal Lv2"`: exactly a shelling name and a level.
pub fn shelling(weapon: &str, token: &str) -> Result<(ShellingType, i32), FormatError> {
    let parts: Vec<&str> = token.split_whitespace().collect();
    let [kind, level] = parts.as_slice() else {
        return Err(FormatError::unrecognized(weapon, "shelling type", token));
    };
    let shelling = match *kind {
        "Normal" => ShellingType::Normal,
        "Long" => ShellingType::Long,
        "Wide" => ShellingType::Wide,
        _ => return Err(FormatError::unrecognized(weapon, "shelling type", token)),
    };
    let digits = level
        .get(..2)
        .filter(|p| p.eq_ignore_ascii_case("lv"))
        .map(|_| &level[2..])
        .ok_or_else(|| FormatError::unrecognized(weapon, "shelling level", token))?;
    let level = digits
        .parse()
        .map_err(|e| FormatError::malformed(weapon, "shelling level", format!("'{token}': {e}")))?;
    Ok((shelling, level))
}

pub fn kinsect_bonus(weapon: &str, token: &str) -> Result<KinsectBonus, FormatError> {
    Ok(match token {
        "Sever Boost" => KinsectBonus::Sever,
        "Blunt Boost" => KinsectBonus::Blunt,
        "Element Boost" => KinsectBonus::Element,
        "Speed Boost" => KinsectBonus::Speed,
        "Health Boost" => KinsectBonus::Health,
        "Stamina Boost" => KinsectBonus::Stamina,
        _ => return Err(FormatError::unrecognized(weapon, "kinsect bonus", token)),
    })
}
