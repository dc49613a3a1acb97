use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::element::{EldersealLevel, ElementInfo, sort_elements};
use crate::sharpness::Sharpness;
use crate::special::{SpecialIdentity, WeaponSpecial};
use crate::WeaponCategory;

/// Number of decoration slots a weapon can have.
pub const SLOT_COUNT: usize = 3;

/// Decoration slot ranks (0 = no slot, 1-3 = slot size), right-padded
/// with empty slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slots([u8; SLOT_COUNT]);

impl Slots {
    /// Build from up to three ranks. Returns `None` for more than three
    /// slots or a rank above 3.
    pub fn from_ranks(ranks: &[u8]) -> Option<Self> {
        if ranks.len() > SLOT_COUNT || ranks.iter().any(|&r| r > 3) {
            return None;
        }
        let mut slots = [0; SLOT_COUNT];
        slots[..ranks.len()].copy_from_slice(ranks);
        Some(Self(slots))
    }

    pub fn ranks(&self) -> &[u8; SLOT_COUNT] {
        &self.0
    }
}

impl std::fmt::Display for Slots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}-{b}-{c}")
    }
}

/// A weapon record in source-independent form.
///
/// Records are built once by an extractor and stay immutable apart from
/// [`assign_id`](Self::assign_id) and
/// [`replace_sharpness`](Self::replace_sharpness), which the reconciler
/// uses to carry data across sources.
///
/// Equality and hashing go through [`WeaponIdentity`]: name, id,
/// sharpness and horn melodies never take part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u32>,
    name: String,
    category: WeaponCategory,
    attack: i32,
    #[serde(default)]
    affinity: i32,
    #[serde(default)]
    defense: i32,
    #[serde(default)]
    elderseal: EldersealLevel,
    #[serde(default)]
    elements: Vec<ElementInfo>,
    #[serde(default)]
    slots: Slots,
    #[serde(default)]
    sharpness: Sharpness,
    #[serde(default)]
    special: WeaponSpecial,
}

impl Weapon {
    pub fn new(name: impl Into<String>, category: WeaponCategory, attack: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            category,
            attack,
            affinity: 0,
            defense: 0,
            elderseal: EldersealLevel::None,
            elements: Vec::new(),
            slots: Slots::default(),
            sharpness: Sharpness::default(),
            special: WeaponSpecial::None,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_affinity(mut self, affinity: i32) -> Self {
        self.affinity = affinity;
        self
    }

    pub fn with_defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_elderseal(mut self, elderseal: EldersealLevel) -> Self {
        self.elderseal = elderseal;
        self
    }

    /// Set the elements, stored in canonical order.
    pub fn with_elements(mut self, elements: impl IntoIterator<Item = ElementInfo>) -> Self {
        self.elements = elements.into_iter().collect();
        sort_elements(&mut self.elements);
        self
    }

    pub fn with_slots(mut self, slots: Slots) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_sharpness(mut self, sharpness: Sharpness) -> Self {
        self.sharpness = sharpness;
        self
    }

    pub fn with_special(mut self, special: WeaponSpecial) -> Self {
        debug_assert!(special.fits(self.category), "special payload mismatch");
        self.special = special;
        self
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> WeaponCategory {
        self.category
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn affinity(&self) -> i32 {
        self.affinity
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn elderseal(&self) -> EldersealLevel {
        self.elderseal
    }

    pub fn elements(&self) -> &[ElementInfo] {
        &self.elements
    }

    pub fn slots(&self) -> Slots {
        self.slots
    }

    pub fn sharpness(&self) -> &Sharpness {
        &self.sharpness
    }

    pub fn special(&self) -> &WeaponSpecial {
        &self.special
    }

    /// Record the reference source's identifier for this weapon.
    pub fn assign_id(&mut self, id: u32) {
        self.id = Some(id);
    }

    /// Replace the sharpness with another source's measurement.
    pub fn replace_sharpness(&mut self, sharpness: Sharpness) {
        self.sharpness = sharpness;
    }

    /// The fields that decide whether two records describe the same weapon.
    pub fn identity(&self) -> WeaponIdentity<'_> {
        WeaponIdentity {
            category: self.category,
            attack: self.attack,
            affinity: self.affinity,
            defense: self.defense,
            elderseal: self.elderseal,
            slots: self.slots,
            elements: &self.elements,
            special: self.special.identity(),
        }
    }
}

/// Identity key of a [`Weapon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeaponIdentity<'a> {
    pub category: WeaponCategory,
    pub attack: i32,
    pub affinity: i32,
    pub defense: i32,
    pub elderseal: EldersealLevel,
    pub slots: Slots,
    pub elements: &'a [ElementInfo],
    pub special: SpecialIdentity,
}

impl PartialEq for Weapon {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Weapon {}

impl Hash for Weapon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, atk {})", self.name, self.category, self.attack)
    }
}

#[cfg(test)]
#[path = "tests/weapon_tests.rs"]
mod tests;
