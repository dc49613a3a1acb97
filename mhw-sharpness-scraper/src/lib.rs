pub mod error;
pub mod fetch;
pub mod harvest;
pub mod lexicon;
pub mod markup;
pub mod settings;
pub mod sources;
pub mod timing;

pub use error::ScrapeError;
pub use fetch::{DocumentFetcher, HttpFetcher};
pub use harvest::{
    CategoryHarvest, Harvest, HarvestEvent, harvest_both, harvest_category, harvest_source,
};
pub use settings::{Settings, settings_path};
pub use sources::{MhwDb, Mhwg, SourceRole, WeaponSource};
pub use timing::Timings;
