//! Fetching source bodies over HTTP.

use std::time::Duration;

use crate::{Error, Result};

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Retrieves the body behind a URL.
pub trait Fetcher {
    /// Fetch `url` and return its body as text.
    ///
    /// A non-success status is an error.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher backed by `reqwest`.
///
/// No retries and no authentication.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        log::debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
