use mhw_sharpness_core::FormatError;

/// Errors that can occur while harvesting weapons from a source.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Server error (HTTP {status}) from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScrapeError {
    /// Map a reqwest failure for `url`, separating timeouts from other
    /// transport problems.
    pub fn from_request(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }

    /// True for failures reported by the network layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::HttpStatus { .. }
        )
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_) | Self::Json(_))
    }
}
