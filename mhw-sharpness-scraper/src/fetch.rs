use std::time::Duration;

use crate::error::ScrapeError;

/// Something that can turn a URL into the text of a document.
#[allow(async_fn_in_trait)]
pub trait DocumentFetcher: Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Plain HTTP GET with a per-request timeout. No retries.
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, ScrapeError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mhw-sharpness/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScrapeError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        log::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ScrapeError::from_request(url, e))?;
        resp.text()
            .await
            .map_err(|e| ScrapeError::from_request(url, e))
    }
}
