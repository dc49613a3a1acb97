use super::*;

#[test]
fn all_has_11_variants() {
    assert_eq!(WeaponCategory::all().len(), 11);
}

#[test]
fn canonical_names_round_trip() {
    for &category in WeaponCategory::all() {
        let parsed: WeaponCategory = category.short_name().parse().unwrap();
        assert_eq!(parsed, category, "round-trip failed for {:?}", category);
    }
}

#[test]
fn aliases_resolve_correctly() {
    let cases = [
        ("gs", WeaponCategory::GreatSword),
        ("sns", WeaponCategory::SwordAndShield),
        ("db", WeaponCategory::DualBlades),
        ("hh", WeaponCategory::HuntingHorn),
        ("gl", WeaponCategory::Gunlance),
        ("swaxe", WeaponCategory::SwitchAxe),
        ("cb", WeaponCategory::ChargeBlade),
        ("glaive", WeaponCategory::InsectGlaive),
        ("long sword", WeaponCategory::LongSword),
    ];
    for (input, expected) in cases {
        let parsed: WeaponCategory = input.parse().unwrap();
        assert_eq!(parsed, expected, "alias '{}' should parse to {:?}", input, expected);
    }
}

#[test]
fn case_insensitive_parsing() {
    let parsed: WeaponCategory = "Great-Sword".parse().unwrap();
    assert_eq!(parsed, WeaponCategory::GreatSword);
    let parsed: WeaponCategory = " IG ".parse().unwrap();
    assert_eq!(parsed, WeaponCategory::InsectGlaive);
}

#[test]
fn unknown_string_returns_err() {
    let result: Result<WeaponCategory, _> = "bow".parse();
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().to_string(), "unknown weapon category: 'bow'");
}

#[test]
fn short_name_is_first_alias() {
    for &category in WeaponCategory::all() {
        assert_eq!(category.aliases()[0], category.short_name());
    }
}

#[test]
fn listing_pages_follow_canonical_order() {
    assert_eq!(WeaponCategory::GreatSword.listing_page(), 4000);
    assert_eq!(WeaponCategory::HuntingHorn.listing_page(), 4005);
    assert_eq!(WeaponCategory::InsectGlaive.listing_page(), 4010);

    for (index, category) in WeaponCategory::all().iter().enumerate() {
        assert_eq!(category.listing_page(), 4000 + index as u32);
    }
}
