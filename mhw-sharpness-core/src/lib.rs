//! Source-independent weapon model shared by the extractors and the
//! reconciler.

pub mod category;
pub mod element;
pub mod error;
pub mod sharpness;
pub mod special;
pub mod weapon;

pub use category::{CategoryParseError, WeaponCategory};
pub use element::{EldersealLevel, ElementInfo, ElementType};
pub use error::FormatError;
pub use sharpness::{MAX_RANK_VALUE, SHARPNESS_COLORS, Sharpness, SharpnessByColor};
pub use special::{
    ChargeBladePhial, KinsectBonus, Melody, ShellingType, SpecialIdentity, SwitchAxePhial,
    WeaponSpecial,
};
pub use weapon::{SLOT_COUNT, Slots, Weapon, WeaponIdentity};
