//! HTTP fetch provider built on `reqwest`.
//!
//! [`HttpFetcher`] is the reference [`OperationProvider`](crate::provider::OperationProvider):
//! one GET per URL, shared connection pool, response captured as
//! [`FetchResponse`]. [`fetch_with_concurrency`] wires it into the executor.

#[path = "fetch/builder.rs"]
mod builder;

#[path = "fetch/fetcher.rs"]
mod fetcher;

#[path = "fetch/response.rs"]
mod response;

pub use builder::{FetcherBuilder, FetcherConfig, DEFAULT_USER_AGENT};
pub use fetcher::HttpFetcher;
pub use response::FetchResponse;

use crate::{error::FetchError, executor, limit::ConcurrencyLimit, outcome::Outcome};

/// Fetches every URL with at most `max_concurrency` requests in flight.
///
/// Returns one outcome per URL, in input order. Fails only if the limit is
/// invalid or the HTTP client cannot be built; no request is sent then.
pub async fn fetch_with_concurrency<S, L>(
    urls: &[S],
    max_concurrency: L,
) -> Result<Vec<Outcome<FetchResponse>>, FetchError>
where
    S: AsRef<str> + Sync,
    L: TryInto<ConcurrencyLimit>,
    L::Error: Into<FetchError>,
{
    let limit = max_concurrency.try_into().map_err(Into::into)?;
    let fetcher = HttpFetcher::new()?;
    executor::execute(fetcher, urls, limit).await
}

#[cfg(test)]
#[path = "fetch/tests.rs"]
mod tests;
