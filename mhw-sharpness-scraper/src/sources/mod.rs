//! Per-source weapon extractors.
//!
//! A source knows where its category documents live and how to turn one
//! document into canonical weapons. Fetching is left to the caller, so
//! extraction can run on saved pages as well as live responses.

pub mod mhwdb;
pub mod mhwg;

use mhw_sharpness_core::{Weapon, WeaponCategory};

use crate::error::ScrapeError;
use crate::settings::Settings;

pub use mhwdb::MhwDb;
pub use mhwg::Mhwg;

/// Which side of the reconciliation a source plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceRole {
    /// Keeps its ids in the merged output.
    Reference,
    /// Contributes sharpness and gets name-mapped onto the reference.
    Alternate,
}

impl SourceRole {
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Reference => "mhw-db",
            Self::Alternate => "mhwg",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Reference => &["mhw-db", "mhwdb", "reference", "ref", "api"],
            Self::Alternate => &["mhwg", "alternate", "alt", "html"],
        }
    }

    /// Build the source for this role from the configured base URLs.
    pub fn source(&self, settings: &Settings) -> Box<dyn WeaponSource> {
        match self {
            Self::Reference => Box::new(MhwDb::new(&settings.reference_base_url)),
            Self::Alternate => Box::new(Mhwg::new(&settings.alternate_base_url)),
        }
    }
}

impl std::fmt::Display for SourceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

impl std::str::FromStr for SourceRole {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        [Self::Reference, Self::Alternate]
            .into_iter()
            .find(|role| role.aliases().contains(&lower.as_str()))
            .ok_or_else(|| ScrapeError::Config(format!("unknown source: '{s}'")))
    }
}

/// A data source that publishes one document per weapon category.
pub trait WeaponSource: Send + Sync {
    /// Host name, for logs and reports.
    fn name(&self) -> &'static str;

    fn role(&self) -> SourceRole;

    /// Where the listing for `category` can be fetched.
    fn category_url(&self, category: WeaponCategory) -> String;

    /// Extract every weapon of `category` from a fetched document.
    ///
    /// Either the whole document is extracted or an error is returned;
    /// partial lists are never produced.
    fn extract(&self, document: &str, category: WeaponCategory)
    -> Result<Vec<Weapon>, ScrapeError>;
}
