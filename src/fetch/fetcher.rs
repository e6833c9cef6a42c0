use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header::USER_AGENT, Client, Url};

use crate::{
    error::FetchError,
    outcome::{FailureKind, OperationError},
    provider::OperationProvider,
};

use super::builder::{FetcherBuilder, FetcherConfig};
use super::response::FetchResponse;

/// HTTP GET provider.
///
/// Cloning is cheap: the client and the configuration are both shared.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: Arc<FetcherConfig>,
}

impl HttpFetcher {
    /// Creates a fetcher with default settings.
    pub fn new() -> Result<Self, FetchError> {
        FetcherBuilder::new().build()
    }

    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::new()
    }

    pub fn with_client(client: Client, config: Arc<FetcherConfig>) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Parses `url` and fetches it.
    pub async fn fetch(&self, url: &str) -> Result<FetchResponse, OperationError> {
        let parsed = Url::parse(url).map_err(|err| {
            OperationError::new(FailureKind::Transport, format!("invalid URL {url:?}"))
                .with_cause(err.to_string())
        })?;
        self.fetch_url(parsed).await
    }

    pub async fn fetch_url(&self, url: Url) -> Result<FetchResponse, OperationError> {
        log::debug!("GET {url}");
        let mut request = self
            .client
            .get(url.clone())
            .header(USER_AGENT, self.config.user_agent.as_str());
        if let Some(sec) = self.config.timeout_seconds {
            request = request.timeout(Duration::from_secs(sec));
        }

        let response = request.send().await?;
        let status = response.status();
        log::debug!("GET {url} -> {status}");

        if self.config.error_for_status && !status.is_success() {
            return Err(OperationError::new(
                FailureKind::Status,
                format!("HTTP status {status} for {url}"),
            )
            .with_status(status.as_u16()));
        }

        let final_url = response.url().to_string();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = if self.config.read_body {
            response.bytes().await?
        } else {
            Bytes::new()
        };

        Ok(FetchResponse {
            url: final_url,
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

#[async_trait]
impl<S> OperationProvider<S> for HttpFetcher
where
    S: AsRef<str> + Sync,
{
    type Output = FetchResponse;
    type Error = OperationError;

    async fn run(&self, url: &S) -> Result<FetchResponse, OperationError> {
        self.fetch(url.as_ref()).await
    }
}
