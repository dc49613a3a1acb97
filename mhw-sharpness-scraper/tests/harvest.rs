use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc;

use mhw_sharpness_core::WeaponCategory;
use mhw_sharpness_scraper::*;

const GREAT_SWORD_JSON: &str = include_str!("fixtures/great-sword.json");
const GREAT_SWORD_HTML: &str = include_str!("fixtures/great-sword.html");

/// Serves canned documents by URL; unknown URLs answer 404.
#[derive(Default)]
struct MemoryFetcher {
    documents: HashMap<String, String>,
    requests: AtomicUsize,
}

impl MemoryFetcher {
    fn with(mut self, url: String, body: &str) -> Self {
        self.documents.insert(url, body.to_string());
        self
    }
}

impl DocumentFetcher for MemoryFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}

fn great_sword_fetcher(reference: &MhwDb, alternate: &Mhwg) -> MemoryFetcher {
    MemoryFetcher::default()
        .with(
            reference.category_url(WeaponCategory::GreatSword),
            GREAT_SWORD_JSON,
        )
        .with(
            alternate.category_url(WeaponCategory::GreatSword),
            GREAT_SWORD_HTML,
        )
}

#[tokio::test]
async fn harvests_both_sources() {
    let reference = MhwDb::default();
    let alternate = Mhwg::default();
    let fetcher = great_sword_fetcher(&reference, &alternate);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let (ref_harvest, alt_harvest) = harvest_both(
        &fetcher,
        &reference,
        &alternate,
        &[WeaponCategory::GreatSword],
        &tx,
    )
    .await
    .unwrap();

    assert_eq!(ref_harvest.role, SourceRole::Reference);
    assert_eq!(alt_harvest.role, SourceRole::Alternate);
    assert_eq!(ref_harvest.weapon_count(), 3);
    assert_eq!(alt_harvest.weapon_count(), 3);
    assert_eq!(fetcher.requests.load(Ordering::SeqCst), 2);

    let flame = &alt_harvest.category(WeaponCategory::GreatSword)[2];
    assert_eq!(flame.name(), "フレイムブレイドI");
    assert_eq!(flame.sharpness().ranks(), &[80, 60, 40, 20]);
    assert_eq!(flame.identity(), ref_harvest.category(WeaponCategory::GreatSword)[2].identity());

    drop(tx);
    let mut completed = 0;
    while let Some(event) = rx.recv().await {
        if let HarvestEvent::CategoryCompleted { weapons, .. } = event {
            assert_eq!(weapons, 3);
            completed += 1;
        }
    }
    assert_eq!(completed, 2);
}

#[tokio::test]
async fn unharvested_category_is_empty() {
    let reference = MhwDb::default();
    let alternate = Mhwg::default();
    let fetcher = great_sword_fetcher(&reference, &alternate);
    let (tx, _rx) = mpsc::unbounded_channel();

    let harvest = harvest_source(&fetcher, &reference, &[WeaponCategory::GreatSword], &tx)
        .await
        .unwrap();
    assert!(harvest.category(WeaponCategory::Lance).is_empty());
}

#[tokio::test]
async fn one_failed_category_fails_the_source() {
    let reference = MhwDb::default();
    let alternate = Mhwg::default();
    let fetcher = great_sword_fetcher(&reference, &alternate);
    let (tx, _rx) = mpsc::unbounded_channel();

    let err = harvest_source(
        &fetcher,
        &reference,
        &[WeaponCategory::GreatSword, WeaponCategory::Lance],
        &tx,
    )
    .await
    .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn format_error_surfaces_through_the_join() {
    let reference = MhwDb::default();
    let alternate = Mhwg::default();
    let fetcher = great_sword_fetcher(&reference, &alternate).with(
        reference.category_url(WeaponCategory::GreatSword),
        r#"[{ "id": 1, "name": "Broken Sword", "attributes": {} }]"#,
    );
    let (tx, _rx) = mpsc::unbounded_channel();

    let err = harvest_both(
        &fetcher,
        &reference,
        &alternate,
        &[WeaponCategory::GreatSword],
        &tx,
    )
    .await
    .unwrap_err();

    match err {
        ScrapeError::Format(format) => {
            assert_eq!(format.weapon(), Some("Broken Sword"));
            assert_eq!(format.field(), Some("attack"));
        }
        other => panic!("expected a format error, got {other:?}"),
    }
}

#[test]
fn configured_sources_use_configured_urls() {
    let settings = Settings {
        reference_base_url: "http://localhost:8080/".to_string(),
        ..Default::default()
    };
    let source = SourceRole::Reference.source(&settings);
    assert!(
        source
            .category_url(WeaponCategory::Lance)
            .starts_with("http://localhost:8080/weapons?")
    );
    assert_eq!("alt".parse::<SourceRole>().unwrap(), SourceRole::Alternate);
    assert!("nope".parse::<SourceRole>().is_err());
}
