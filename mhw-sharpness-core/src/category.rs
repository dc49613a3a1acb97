use serde::{Deserialize, Serialize};

/// Weapon categories covered by both data sources.
///
/// This enum centralizes category identity (the reference API's type slug,
/// display names, CLI aliases and the alternate site's page number) so the
/// extractors never match on ad-hoc strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    GreatSword,
    LongSword,
    SwordAndShield,
    DualBlades,
    Hammer,
    HuntingHorn,
    Lance,
    Gunlance,
    SwitchAxe,
    ChargeBlade,
    InsectGlaive,
}

/// All categories in declaration order. The alternate site numbers its
/// listing pages in this same order, so the discriminant is the page offset.
const ALL_CATEGORIES: &[WeaponCategory] = &[
    WeaponCategory::GreatSword,
    WeaponCategory::LongSword,
    WeaponCategory::SwordAndShield,
    WeaponCategory::DualBlades,
    WeaponCategory::Hammer,
    WeaponCategory::HuntingHorn,
    WeaponCategory::Lance,
    WeaponCategory::Gunlance,
    WeaponCategory::SwitchAxe,
    WeaponCategory::ChargeBlade,
    WeaponCategory::InsectGlaive,
];

/// First page number of the alternate site's weapon listings.
const FIRST_LISTING_PAGE: u32 = 4000;

impl WeaponCategory {
    /// Canonical short name. Doubles as the `type` token of the reference API.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::GreatSword => "great-sword",
            Self::LongSword => "long-sword",
            Self::SwordAndShield => "sword-and-shield",
            Self::DualBlades => "dual-blades",
            Self::Hammer => "hammer",
            Self::HuntingHorn => "hunting-horn",
            Self::Lance => "lance",
            Self::Gunlance => "gunlance",
            Self::SwitchAxe => "switch-axe",
            Self::ChargeBlade => "charge-blade",
            Self::InsectGlaive => "insect-glaive",
        }
    }

    /// Full display name for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GreatSword => "Great Sword",
            Self::LongSword => "Long Sword",
            Self::SwordAndShield => "Sword and Shield",
            Self::DualBlades => "Dual Blades",
            Self::Hammer => "Hammer",
            Self::HuntingHorn => "Hunting Horn",
            Self::Lance => "Lance",
            Self::Gunlance => "Gunlance",
            Self::SwitchAxe => "Switch Axe",
            Self::ChargeBlade => "Charge Blade",
            Self::InsectGlaive => "Insect Glaive",
        }
    }

    /// All accepted names for this category (case-insensitive matching).
    ///
    /// The first entry is always the short name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::GreatSword => &["great-sword", "gs", "greatsword", "great sword"],
            Self::LongSword => &["long-sword", "ls", "longsword", "long sword"],
            Self::SwordAndShield => &["sword-and-shield", "sns", "sword and shield", "sword"],
            Self::DualBlades => &["dual-blades", "db", "dualblades", "dual blades"],
            Self::Hammer => &["hammer", "hm"],
            Self::HuntingHorn => &["hunting-horn", "hh", "huntinghorn", "horn"],
            Self::Lance => &["lance", "ln"],
            Self::Gunlance => &["gunlance", "gl", "gun lance"],
            Self::SwitchAxe => &["switch-axe", "sa", "switchaxe", "swaxe"],
            Self::ChargeBlade => &["charge-blade", "cb", "chargeblade"],
            Self::InsectGlaive => &["insect-glaive", "ig", "insectglaive", "glaive"],
        }
    }

    /// Page number of this category's listing on the alternate site
    /// (`/data/<page>.html`).
    pub fn listing_page(&self) -> u32 {
        FIRST_LISTING_PAGE + *self as u32
    }

    /// All 11 categories.
    pub fn all() -> &'static [WeaponCategory] {
        ALL_CATEGORIES
    }
}

impl std::fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `WeaponCategory`.
#[derive(Debug, Clone)]
pub struct CategoryParseError(pub String);

impl std::fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown weapon category: '{}'", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

impl std::str::FromStr for WeaponCategory {
    type Err = CategoryParseError;

    /// Matches against `short_name()` and all entries in `aliases()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|category| category.aliases().iter().any(|alias| *alias == lower))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
