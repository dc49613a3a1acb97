//! Cross-source matching and merging of harvested weapons.

pub mod error;
pub mod matcher;
pub mod output;
pub mod reconcile;
pub mod report;

pub use error::ReconcileError;
pub use matcher::{best_match_indices, best_matches, max_score, score};
pub use output::{
    MERGED_FILE, MAPPING_FILE, MergedRecord, REPORT_FILE, merged_records, write_mapping,
    write_merged,
};
pub use reconcile::{
    MappedName, MergeDetail, ReconcileOptions, ReconcileResult, ReconcileStats, WeaponsByCategory,
    reconcile,
};
pub use report::RunReport;
