//! Category-specific weapon attributes.
//!
//! Only five categories carry extra data. Rather than a type per category,
//! a weapon holds a single [`WeaponSpecial`] payload tagged by category.

use serde::{Deserialize, Serialize};

use crate::WeaponCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeBladePhial {
    Impact,
    Elemental,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwitchAxePhial {
    Power,
    PowerElement,
    Dragon,
    Exhaust,
    Paralysis,
    Poison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShellingType {
    Normal,
    Long,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KinsectBonus {
    Sever,
    Blunt,
    Element,
    Speed,
    Health,
    Stamina,
}

/// Hunting horn note, named after the color the games draw it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Melody {
    White,
    Red,
    Blue,
    Purple,
    Green,
    Orange,
    Cyan,
    Yellow,
}

/// Extra attributes for the categories that have them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeaponSpecial {
    #[default]
    None,
    ChargeBlade {
        phial: ChargeBladePhial,
    },
    SwitchAxe {
        phial: SwitchAxePhial,
        /// Phial strength; 0 for phials without a number.
        value: i32,
    },
    Gunlance {
        shelling: ShellingType,
        level: i32,
    },
    InsectGlaive {
        kinsect: KinsectBonus,
    },
    /// Notes are informational only. The reference source has no notes
    /// for most horns, so they never take part in identity.
    HuntingHorn {
        melodies: Vec<Melody>,
    },
}

/// The part of a [`WeaponSpecial`] that takes part in weapon identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialIdentity {
    None,
    ChargeBlade(ChargeBladePhial),
    SwitchAxe(SwitchAxePhial, i32),
    Gunlance(ShellingType, i32),
    InsectGlaive(KinsectBonus),
}

impl WeaponSpecial {
    pub fn identity(&self) -> SpecialIdentity {
        match *self {
            Self::None | Self::HuntingHorn { .. } => SpecialIdentity::None,
            Self::ChargeBlade { phial } => SpecialIdentity::ChargeBlade(phial),
            Self::SwitchAxe { phial, value } => SpecialIdentity::SwitchAxe(phial, value),
            Self::Gunlance { shelling, level } => SpecialIdentity::Gunlance(shelling, level),
            Self::InsectGlaive { kinsect } => SpecialIdentity::InsectGlaive(kinsect),
        }
    }

    /// Whether this payload is the one `category` is expected to carry.
    pub fn fits(&self, category: WeaponCategory) -> bool {
        matches!(
            (self, category),
            (Self::None, _)
                | (Self::ChargeBlade { .. }, WeaponCategory::ChargeBlade)
                | (Self::SwitchAxe { .. }, WeaponCategory::SwitchAxe)
                | (Self::Gunlance { .. }, WeaponCategory::Gunlance)
                | (Self::InsectGlaive { .. }, WeaponCategory::InsectGlaive)
                | (Self::HuntingHorn { .. }, WeaponCategory::HuntingHorn)
        )
    }

    pub fn melodies(&self) -> &[Melody] {
        match self {
            Self::HuntingHorn { melodies } => melodies,
            _ => &[],
        }
    }
}
