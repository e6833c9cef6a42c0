use std::sync::Arc;

use reqwest::Client;

use crate::error::FetchError;

use super::fetcher::HttpFetcher;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("fetchpool/", env!("CARGO_PKG_VERSION"));

/// Per-request settings shared by every fetch of an [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Treat non-2xx responses as failures instead of successful fetches.
    pub error_for_status: bool,
    /// Download the response body. When false the body is left empty.
    pub read_body: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            error_for_status: false,
            read_body: true,
        }
    }
}

/// Builder for configuring and instantiating an [`HttpFetcher`].
#[derive(Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
    client: Option<Client>,
}

impl FetcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_seconds = Some(timeout_seconds);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Sets whether a non-2xx status fails the item.
    pub fn error_for_status(mut self, enabled: bool) -> Self {
        self.config.error_for_status = enabled;
        self
    }

    pub fn read_body(mut self, enabled: bool) -> Self {
        self.config.read_body = enabled;
        self
    }

    /// Uses an existing client instead of building one.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<HttpFetcher, FetchError> {
        log::debug!("building fetcher: {:?}", self.config);
        let client = match self.client {
            Some(client) => client,
            None => Client::builder().build()?,
        };
        Ok(HttpFetcher::with_client(client, Arc::new(self.config)))
    }
}
