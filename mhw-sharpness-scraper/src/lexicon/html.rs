//! Japanese glyphs and CSS conventions used by the alternate listing site.

use mhw_sharpness_core::{
    ChargeBladePhial, EldersealLevel, ElementInfo, ElementType, FormatError, KinsectBonus, Melody,
    ShellingType, Slots, SwitchAxePhial,
};

use super::split_numeric_suffix;

/// Canonical sharpness units per character of a `krN` span. The site draws
/// each rank as a run of characters, one per 10 units.
pub const SHARPNESS_MULTIPLIER: u16 = 10;

/// Highest `krN` class that denotes a real sharpness rank.
pub const MAX_SHARPNESS_CLASS: usize = 5;

/// An element cell entry such as `火240` or `(睡眠120)` (hidden).
pub fn element(weapon: &str, raw: &str) -> Result<ElementInfo, FormatError> {
    let raw = raw.trim();
    let (hidden, inner) = match (raw.strip_prefix('('), raw.ends_with(')')) {
        (Some(rest), true) => (true, &rest[..rest.len() - 1]),
        (None, false) => (false, raw),
        _ => {
            return Err(FormatError::malformed(
                weapon,
                "element",
                format!("unbalanced parentheses in '{raw}'"),
            ));
        }
    };

    if !inner.contains(|c: char| c.is_ascii_digit()) {
        return Err(FormatError::unrecognized(weapon, "element", raw));
    }
    let (glyph, value) = split_numeric_suffix(inner)
        .map_err(|e| FormatError::malformed(weapon, "element", format!("'{raw}': {e}")))?;

    let element_type = match glyph {
        "火" => ElementType::Fire,
        "水" => ElementType::Water,
        "雷" => ElementType::Thunder,
        "氷" => ElementType::Ice,
        "龍" => ElementType::Dragon,
        "毒" => ElementType::Poison,
        "睡眠" => ElementType::Sleep,
        "麻痺" => ElementType::Paralysis,
        "爆破" => ElementType::Blast,
        "気絶" => ElementType::Stun,
        _ => return Err(FormatError::unrecognized(weapon, "element type", glyph)),
    };

    Ok(ElementInfo {
        element_type,
        hidden,
        value,
    })
}

/// Elderseal span content: `龍封力[小]` and similar.
pub fn elderseal(weapon: &str, content: &str) -> Result<EldersealLevel, FormatError> {
    if content.contains('小') {
        Ok(EldersealLevel::Low)
    } else if content.contains('中') {
        Ok(EldersealLevel::Average)
    } else if content.contains('大') {
        Ok(EldersealLevel::High)
    } else {
        Err(FormatError::unrecognized(weapon, "elderseal", content))
    }
}

pub fn charge_blade_phial(weapon: &str, content: &str) -> Result<ChargeBladePhial, FormatError> {
    match content.trim() {
        "榴弾" => Ok(ChargeBladePhial::Impact),
        "強属性" => Ok(ChargeBladePhial::Elemental),
        other => Err(FormatError::unrecognized(weapon, "phial type", other)),
    }
}

pub fn switch_axe_phial(weapon: &str, content: &str) -> Result<(SwitchAxePhial, i32), FormatError> {
    let content = content.trim();
    match content {
        "強撃" => return Ok((SwitchAxePhial::Power, 0)),
        "強属性" => return Ok((SwitchAxePhial::PowerElement, 0)),
        _ => {}
    }

    let (glyph, value) = split_numeric_suffix(content)
        .map_err(|e| FormatError::malformed(weapon, "phial type", format!("'{content}': {e}")))?;
    let phial = match glyph {
        "毒" => SwitchAxePhial::Poison,
        "減気" => SwitchAxePhial::Exhaust,
        "滅龍" => SwitchAxePhial::Dragon,
        "麻痺" => SwitchAxePhial::Paralysis,
        _ => return Err(FormatError::unrecognized(weapon, "phial type", content)),
    };
    Ok((phial, value))
}

/// `通常Lv2`, `放射3`, ... The level is the first number; a missing number
/// leaves it at 0.
pub fn shelling(weapon: &str, content: &str) -> Result<(ShellingType, i32), FormatError> {
    let content = content.trim();
    let shelling = if content.starts_with("通常") {
        ShellingType::Normal
    } else if content.starts_with("放射") {
        ShellingType::Long
    } else if content.starts_with("拡散") {
        ShellingType::Wide
    } else {
        return Err(FormatError::unrecognized(weapon, "shelling type", content));
    };
    let (_, level) = split_numeric_suffix(content)
        .map_err(|e| FormatError::malformed(weapon, "shelling level", format!("'{content}': {e}")))?;
    Ok((shelling, level))
}

pub fn kinsect_bonus(weapon: &str, content: &str) -> Result<KinsectBonus, FormatError> {
    match content.trim() {
        "攻撃強化【切断】" => Ok(KinsectBonus::Sever),
        "攻撃強化【打撃】" => Ok(KinsectBonus::Blunt),
        "攻撃強化【属性】" => Ok(KinsectBonus::Element),
        "スピード強化" => Ok(KinsectBonus::Speed),
        "回復強化【体力】" => Ok(KinsectBonus::Health),
        "回復強化【スタミナ】" => Ok(KinsectBonus::Stamina),
        other => Err(FormatError::unrecognized(weapon, "kinsect bonus", other)),
    }
}

/// Note color from a melody icon's inline style.
pub fn melody(weapon: &str, color: &str) -> Result<Melody, FormatError> {
    match color.trim().to_lowercase().as_str() {
        "#f3f3f3" => Ok(Melody::White),
        "#e0002a" => Ok(Melody::Red),
        "blue" => Ok(Melody::Blue),
        "#c778c7" => Ok(Melody::Purple),
        "#00cc00" => Ok(Melody::Green),
        "#ef810f" => Ok(Melody::Orange),
        "#99f8f8" => Ok(Melody::Cyan),
        "#eeee00" => Ok(Melody::Yellow),
        _ => Err(FormatError::unrecognized(weapon, "melody color", color)),
    }
}

/// Slot cell such as `②①-` or `- - -`.
pub fn slots(weapon: &str, content: &str) -> Result<Slots, FormatError> {
    let mut ranks = Vec::with_capacity(3);
    for c in content.chars().filter(|c| !c.is_whitespace() && *c != '-') {
        let rank = match c {
            '①' => 1,
            '②' => 2,
            '③' => 3,
            _ => return Err(FormatError::unrecognized(weapon, "slot", c.to_string())),
        };
        ranks.push(rank);
    }
    Slots::from_ranks(&ranks).ok_or_else(|| {
        FormatError::malformed(weapon, "slots", format!("too many slots in '{content}'"))
    })
}

/// Canonical value of one sharpness rank span.
pub fn sharpness_rank_value(content: &str) -> u16 {
    (content.chars().count() as u16).saturating_mul(SHARPNESS_MULTIPLIER)
}
