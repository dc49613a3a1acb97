use thiserror::Error;

use mhw_sharpness_reconcile::ReconcileError;
use mhw_sharpness_scraper::ScrapeError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Harvest or extraction failed
    #[error("{0}")]
    Scrape(#[from] ScrapeError),

    /// Writing outputs failed
    #[error("{0}")]
    Reconcile(#[from] ReconcileError),

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    /// Process exit code: 1 for malformed source data, 2 for network
    /// failures, 3 for everything else.
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::Scrape(e) if e.is_format() => 1,
            Self::Scrape(e) if e.is_transport() => 2,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhw_sharpness_core::FormatError;

    #[test]
    fn exit_codes_follow_error_family() {
        let format = CliError::from(ScrapeError::from(FormatError::missing("Hack Blade I", "attack")));
        assert_eq!(format.exit_code(), 1);
        assert!(format.to_string().contains("Hack Blade I"));

        let timeout = CliError::from(ScrapeError::Timeout {
            url: "http://mhwg.org/data/4000.html".to_string(),
        });
        assert_eq!(timeout.exit_code(), 2);

        let status = CliError::from(ScrapeError::HttpStatus {
            url: "https://mhw-db.com/weapons".to_string(),
            status: 503,
        });
        assert_eq!(status.exit_code(), 2);

        let config = CliError::from(ScrapeError::Config("bad".to_string()));
        assert_eq!(config.exit_code(), 3);
        assert_eq!(CliError::runtime("no runtime").exit_code(), 3);
    }
}
