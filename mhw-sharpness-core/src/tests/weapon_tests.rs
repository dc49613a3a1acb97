use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use super::*;
use crate::{ChargeBladePhial, ElementType, MAX_RANK_VALUE, Melody, SwitchAxePhial};

fn hash_of(weapon: &Weapon) -> u64 {
    let mut hasher = DefaultHasher::new();
    weapon.hash(&mut hasher);
    hasher.finish()
}

fn dual_element(first: ElementInfo, second: ElementInfo) -> Weapon {
    Weapon::new("Twin Nails", WeaponCategory::DualBlades, 266).with_elements([first, second])
}

#[test]
fn element_order_is_canonical() {
    let fire = ElementInfo::new(ElementType::Fire, 10);
    let water = ElementInfo::new(ElementType::Water, 5);

    let a = dual_element(fire, water);
    let b = dual_element(water, fire);

    assert_eq!(a.elements(), b.elements());
    assert_eq!(a.elements()[0].element_type, ElementType::Fire);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn name_id_and_sharpness_are_not_identity() {
    let a = Weapon::new("Buster Sword I", WeaponCategory::GreatSword, 384)
        .with_id(1)
        .with_sharpness(Sharpness::from_ranks([100, 50, 50]).unwrap());
    let b = Weapon::new("バスターソードI", WeaponCategory::GreatSword, 384)
        .with_sharpness(Sharpness::from_ranks([20, 0, 30, 10, 50]).unwrap());

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn identity_fields_distinguish_weapons() {
    let base = Weapon::new("Iron Katana I", WeaponCategory::LongSword, 330);
    let variants = [
        base.clone().with_affinity(10),
        base.clone().with_defense(10),
        base.clone().with_elderseal(EldersealLevel::Low),
        base.clone().with_slots(Slots::from_ranks(&[1]).unwrap()),
        base.clone().with_elements([ElementInfo::new(ElementType::Ice, 90)]),
        base.clone().with_elements([ElementInfo::hidden(ElementType::Ice, 90)]),
        Weapon::new("Iron Katana I", WeaponCategory::LongSword, 331),
        Weapon::new("Iron Katana I", WeaponCategory::GreatSword, 330),
    ];
    for variant in &variants {
        assert_ne!(&base, variant);
    }
    let distinct: HashSet<_> = variants.iter().collect();
    assert_eq!(distinct.len(), variants.len());
}

#[test]
fn special_fields_are_identity_except_melodies() {
    let cb = |phial| {
        Weapon::new("Hack Blade I", WeaponCategory::ChargeBlade, 360)
            .with_special(WeaponSpecial::ChargeBlade { phial })
    };
    assert_eq!(cb(ChargeBladePhial::Impact), cb(ChargeBladePhial::Impact));
    assert_ne!(cb(ChargeBladePhial::Impact), cb(ChargeBladePhial::Elemental));

    let sa = |value| {
        Weapon::new("Proto Commission Axe", WeaponCategory::SwitchAxe, 550).with_special(
            WeaponSpecial::SwitchAxe {
                phial: SwitchAxePhial::Poison,
                value,
            },
        )
    };
    assert_ne!(sa(300), sa(330));

    let hh = |melodies| {
        Weapon::new("Metal Bagpipe I", WeaponCategory::HuntingHorn, 420)
            .with_special(WeaponSpecial::HuntingHorn { melodies })
    };
    assert_eq!(
        hh(vec![Melody::White, Melody::Red, Melody::Blue]),
        hh(Vec::new())
    );
}

#[test]
fn post_construction_updates() {
    let mut weapon = Weapon::new("Bone Hammer I", WeaponCategory::Hammer, 520);
    let before = hash_of(&weapon);

    weapon.assign_id(42);
    weapon.replace_sharpness(Sharpness::from_ranks([90, 60, 100]).unwrap());

    assert_eq!(weapon.id(), Some(42));
    assert_eq!(weapon.sharpness().ranks(), &[90, 60, 100]);
    assert_eq!(hash_of(&weapon), before);
}

#[test]
fn slots_pad_right() {
    let slots = Slots::from_ranks(&[2]).unwrap();
    assert_eq!(slots.ranks(), &[2, 0, 0]);
    assert_eq!(slots.to_string(), "2-0-0");
    assert!(Slots::from_ranks(&[1, 1, 1, 1]).is_none());
    assert!(Slots::from_ranks(&[4]).is_none());
}

#[test]
fn sharpness_drops_trailing_empty_ranks() {
    let sharpness = Sharpness::from_ranks([20, 0, 30, 10, 50, 0]).unwrap();
    assert_eq!(sharpness.ranks(), &[20, 0, 30, 10, 50]);
    assert_eq!(sharpness.total(), 110);

    let colors = sharpness.to_colors();
    assert_eq!(colors.orange, Some(0));
    assert_eq!(colors.blue, Some(50));
    assert_eq!(colors.white, None);

    assert!(Sharpness::from_ranks([1, 1, 1, 1, 1, 1, 1]).is_none());
}

#[test]
fn sharpness_rank_above_scale_is_rejected() {
    assert!(Sharpness::from_ranks([MAX_RANK_VALUE]).is_some());
    assert!(Sharpness::from_ranks([100, MAX_RANK_VALUE + 1]).is_none());
}
