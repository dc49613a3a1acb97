use serde::{Deserialize, Serialize};

/// Element or status type carried by a weapon.
///
/// Variant order is the canonical element ordering: weapons store their
/// elements sorted by it so that comparisons are positional.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    #[default]
    None,
    Fire,
    Water,
    Thunder,
    Ice,
    Dragon,
    Poison,
    Sleep,
    Paralysis,
    Blast,
    Stun,
}

impl ElementType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Thunder => "thunder",
            Self::Ice => "ice",
            Self::Dragon => "dragon",
            Self::Poison => "poison",
            Self::Sleep => "sleep",
            Self::Paralysis => "paralysis",
            Self::Blast => "blast",
            Self::Stun => "stun",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One element entry of a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementInfo {
    pub element_type: ElementType,
    /// Hidden elements only activate with the Free Element skill.
    pub hidden: bool,
    pub value: i32,
}

impl ElementInfo {
    pub fn new(element_type: ElementType, value: i32) -> Self {
        Self {
            element_type,
            hidden: false,
            value,
        }
    }

    pub fn hidden(element_type: ElementType, value: i32) -> Self {
        Self {
            element_type,
            hidden: true,
            value,
        }
    }
}

impl std::fmt::Display for ElementInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hidden {
            write!(f, "({} {})", self.element_type, self.value)
        } else {
            write!(f, "{} {}", self.element_type, self.value)
        }
    }
}

/// Sort elements into canonical order. The sort is stable, so entries of
/// the same type keep their source order.
pub fn sort_elements(elements: &mut [ElementInfo]) {
    elements.sort_by_key(|e| e.element_type);
}

/// Elderseal strength.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EldersealLevel {
    #[default]
    None,
    Low,
    Average,
    High,
}

impl std::fmt::Display for EldersealLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Average => "average",
            Self::High => "high",
        };
        f.write_str(name)
    }
}
