use super::*;
use mhw_sharpness_core::{ElementInfo, ElementType, Sharpness, SharpnessByColor};

fn sharp(ranks: &[u16]) -> Sharpness {
    Sharpness::from_ranks(ranks.iter().copied()).unwrap()
}

fn by_category(weapons: Vec<Weapon>) -> WeaponsByCategory {
    let mut map = WeaponsByCategory::new();
    for weapon in weapons {
        map.entry(weapon.category()).or_default().push(weapon);
    }
    map
}

fn reference_set() -> WeaponsByCategory {
    by_category(vec![
        Weapon::new("Buster Sword I", WeaponCategory::GreatSword, 384)
            .with_id(1)
            .with_sharpness(sharp(&[100, 48, 52])),
        Weapon::new("Flame Blade I", WeaponCategory::GreatSword, 480)
            .with_id(3)
            .with_affinity(-10)
            .with_elements([ElementInfo::new(ElementType::Fire, 240)])
            .with_sharpness(sharp(&[80, 60, 40, 20])),
        Weapon::new("Chrome Razor I", WeaponCategory::LongSword, 400).with_id(20),
        Weapon::new("Chrome Razor II", WeaponCategory::LongSword, 400).with_id(21),
    ])
}

#[test]
fn unique_match_maps_and_merges() {
    let mut reference = reference_set();
    let mut alternate = by_category(vec![
        Weapon::new("バスターソードI", WeaponCategory::GreatSword, 384)
            .with_sharpness(sharp(&[100, 50, 50])),
    ]);

    let result = reconcile(&mut reference, &mut alternate, &ReconcileOptions::default());

    assert_eq!(
        result.mapping["バスターソードI"],
        MappedName::Single("Buster Sword I".to_string())
    );
    assert_eq!(result.stats.mapped, 1);
    assert_eq!(result.stats.merged, 1);
    assert_eq!(result.stats.categories, 1);

    let buster = &reference[&WeaponCategory::GreatSword][0];
    assert_eq!(buster.sharpness().ranks(), &[100, 50, 50]);
    assert_eq!(alternate[&WeaponCategory::GreatSword][0].id(), Some(1));

    assert_eq!(
        result.merged,
        vec![MergedRecord {
            id: 1,
            name: "Buster Sword I".to_string(),
            sharpness: SharpnessByColor {
                red: Some(100),
                orange: Some(50),
                yellow: Some(50),
                ..Default::default()
            },
        }]
    );
}

#[test]
fn tie_maps_to_list_and_does_not_merge() {
    let mut reference = reference_set();
    let mut alternate = by_category(vec![
        Weapon::new("クロムレイザーI", WeaponCategory::LongSword, 400).with_sharpness(sharp(&[50])),
    ]);

    let result = reconcile(&mut reference, &mut alternate, &ReconcileOptions::default());

    assert_eq!(
        result.mapping["クロムレイザーI"],
        MappedName::Ambiguous(vec![
            "Chrome Razor I".to_string(),
            "Chrome Razor II".to_string()
        ])
    );
    assert_eq!(result.stats.ambiguous, 1);
    assert_eq!(result.stats.merged, 0);
    assert!(result.merged.is_empty());
    assert_eq!(alternate[&WeaponCategory::LongSword][0].id(), None);
    assert!(
        reference[&WeaponCategory::LongSword]
            .iter()
            .all(|w| w.sharpness().is_empty())
    );
}

#[test]
fn category_without_reference_weapons_is_unmatched() {
    let mut reference = reference_set();
    let mut alternate = by_category(vec![Weapon::new("アイアンランスI", WeaponCategory::Lance, 200)]);

    let result = reconcile(&mut reference, &mut alternate, &ReconcileOptions::default());

    assert!(result.mapping.is_empty());
    assert_eq!(result.stats.unmatched, 1);
    assert!(!reference.contains_key(&WeaponCategory::Lance));
    assert_eq!(
        result.details,
        vec![MergeDetail::Unmatched {
            category: WeaponCategory::Lance,
            alternate: "アイアンランスI".to_string()
        }]
    );
}

#[test]
fn second_claim_on_a_reference_is_a_duplicate() {
    let mut reference = reference_set();
    let mut alternate = by_category(vec![
        Weapon::new("バスターソードI", WeaponCategory::GreatSword, 384)
            .with_sharpness(sharp(&[100, 50, 50])),
        Weapon::new("バスターソードI改", WeaponCategory::GreatSword, 384)
            .with_sharpness(sharp(&[10])),
    ]);

    let result = reconcile(&mut reference, &mut alternate, &ReconcileOptions::default());

    assert_eq!(result.stats.mapped, 2);
    assert_eq!(result.stats.merged, 1);
    assert_eq!(result.stats.duplicates, 1);
    assert_eq!(
        reference[&WeaponCategory::GreatSword][0].sharpness().ranks(),
        &[100, 50, 50]
    );
    assert_eq!(alternate[&WeaponCategory::GreatSword][1].id(), None);
    assert!(matches!(
        &result.details[0],
        MergeDetail::Duplicate { alternate, .. } if alternate == "バスターソードI改"
    ));
}

#[test]
fn matching_ignores_list_position() {
    let mut reference = reference_set();
    let mut alternate = by_category(vec![
        Weapon::new("フレイムブレイドI", WeaponCategory::GreatSword, 480)
            .with_affinity(-10)
            .with_elements([ElementInfo::new(ElementType::Fire, 240)]),
        Weapon::new("バスターソードI", WeaponCategory::GreatSword, 384),
    ]);

    let result = reconcile(&mut reference, &mut alternate, &ReconcileOptions::default());

    assert_eq!(
        result.mapping["フレイムブレイドI"],
        MappedName::Single("Flame Blade I".to_string())
    );
    assert_eq!(
        result.mapping["バスターソードI"],
        MappedName::Single("Buster Sword I".to_string())
    );
}

#[test]
fn category_filter_skips_other_categories() {
    let mut reference = reference_set();
    let mut alternate = by_category(vec![
        Weapon::new("バスターソードI", WeaponCategory::GreatSword, 384),
        Weapon::new("クロムレイザーI", WeaponCategory::LongSword, 400),
    ]);
    let options = ReconcileOptions {
        categories: vec![WeaponCategory::LongSword],
    };

    let result = reconcile(&mut reference, &mut alternate, &options);

    assert_eq!(result.stats.categories, 1);
    assert!(result.mapping.contains_key("クロムレイザーI"));
    assert!(!result.mapping.contains_key("バスターソードI"));
}

#[test]
fn mapping_serializes_as_string_or_list() {
    let mut mapping = BTreeMap::new();
    mapping.insert("a".to_string(), MappedName::Single("A".to_string()));
    mapping.insert(
        "b".to_string(),
        MappedName::Ambiguous(vec!["B1".to_string(), "B2".to_string()]),
    );

    let json = serde_json::to_string(&mapping).unwrap();
    assert_eq!(json, r#"{"a":"A","b":["B1","B2"]}"#);
}

#[test]
fn repeated_alternate_name_keeps_first_mapping() {
    let mut reference = reference_set();
    let mut alternate = by_category(vec![
        Weapon::new("ブレイドI", WeaponCategory::GreatSword, 384),
        Weapon::new("ブレイドI", WeaponCategory::LongSword, 400),
    ]);

    let result = reconcile(&mut reference, &mut alternate, &ReconcileOptions::default());

    assert_eq!(result.mapping.len(), 1);
    assert_eq!(
        result.mapping["ブレイドI"],
        MappedName::Single("Buster Sword I".to_string())
    );
    assert_eq!(result.stats.mapped, 1);
    assert_eq!(result.stats.ambiguous, 0);
    assert!(result.details.is_empty());
}
