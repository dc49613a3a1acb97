//! Concurrent harvesting of both sources.
//!
//! Each (source, category) pair is an independent task: fetch the category
//! document, then extract it. Tasks within a source are joined with
//! `try_join_all` and the two sources are joined with `try_join!`, so the
//! first failure anywhere aborts the whole harvest.

use std::collections::BTreeMap;
use std::time::Instant;

use futures::future::try_join_all;
use tokio::sync::mpsc;

use mhw_sharpness_core::{Weapon, WeaponCategory};

use crate::error::ScrapeError;
use crate::fetch::DocumentFetcher;
use crate::sources::{SourceRole, WeaponSource};
use crate::timing::Timings;

/// Progress events emitted while harvesting.
#[derive(Debug, Clone)]
pub enum HarvestEvent {
    CategoryStarted {
        source: &'static str,
        category: WeaponCategory,
    },
    CategoryCompleted {
        source: &'static str,
        category: WeaponCategory,
        weapons: usize,
    },
}

/// Weapons of one category from one source.
#[derive(Debug, Clone)]
pub struct CategoryHarvest {
    pub category: WeaponCategory,
    pub weapons: Vec<Weapon>,
    pub timings: Timings,
}

/// Everything one source produced, keyed by category.
#[derive(Debug, Clone)]
pub struct Harvest {
    pub source: &'static str,
    pub role: SourceRole,
    pub weapons: BTreeMap<WeaponCategory, Vec<Weapon>>,
    pub timings: Timings,
}

impl Harvest {
    /// Weapons of `category`, empty when the category was not harvested.
    pub fn category(&self, category: WeaponCategory) -> &[Weapon] {
        self.weapons.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.values().map(Vec::len).sum()
    }
}

/// Fetch and extract a single category.
pub async fn harvest_category<F: DocumentFetcher>(
    fetcher: &F,
    source: &dyn WeaponSource,
    category: WeaponCategory,
    events: &mpsc::UnboundedSender<HarvestEvent>,
) -> Result<CategoryHarvest, ScrapeError> {
    let _ = events.send(HarvestEvent::CategoryStarted {
        source: source.name(),
        category,
    });

    let url = source.category_url(category);
    let started = Instant::now();
    let document = fetcher.fetch(&url).await?;
    let network = started.elapsed();

    let started = Instant::now();
    let weapons = source.extract(&document, category)?;
    let processing = started.elapsed();

    log::debug!(
        "{}: {} {} weapons (fetch {:?}, extract {:?})",
        source.name(),
        weapons.len(),
        category.short_name(),
        network,
        processing
    );
    let _ = events.send(HarvestEvent::CategoryCompleted {
        source: source.name(),
        category,
        weapons: weapons.len(),
    });

    Ok(CategoryHarvest {
        category,
        weapons,
        timings: Timings::new(network, processing),
    })
}

/// Harvest every category in `categories` from one source concurrently.
pub async fn harvest_source<F: DocumentFetcher>(
    fetcher: &F,
    source: &dyn WeaponSource,
    categories: &[WeaponCategory],
    events: &mpsc::UnboundedSender<HarvestEvent>,
) -> Result<Harvest, ScrapeError> {
    let parts = try_join_all(
        categories
            .iter()
            .map(|&category| harvest_category(fetcher, source, category, events)),
    )
    .await?;

    let timings = parts.iter().map(|p| p.timings).sum();
    let weapons = parts
        .into_iter()
        .map(|part| (part.category, part.weapons))
        .collect();

    let harvest = Harvest {
        source: source.name(),
        role: source.role(),
        weapons,
        timings,
    };
    log::info!(
        "Harvested {} weapons from {}",
        harvest.weapon_count(),
        harvest.source
    );
    Ok(harvest)
}

/// Harvest the reference and alternate sources side by side.
///
/// Returns `(reference, alternate)`.
pub async fn harvest_both<F: DocumentFetcher>(
    fetcher: &F,
    reference: &dyn WeaponSource,
    alternate: &dyn WeaponSource,
    categories: &[WeaponCategory],
    events: &mpsc::UnboundedSender<HarvestEvent>,
) -> Result<(Harvest, Harvest), ScrapeError> {
    tokio::try_join!(
        harvest_source(fetcher, reference, categories, events),
        harvest_source(fetcher, alternate, categories, events),
    )
}
