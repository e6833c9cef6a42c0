//! Bounded-concurrency execution of independent async operations.
//!
//! [`BoundedExecutor`] runs one operation per work item through an
//! [`OperationProvider`], keeping at most N in flight. Results come back as
//! one [`Outcome`] per input position, in input order, with per-item failures
//! captured rather than propagated. [`HttpFetcher`] is the bundled provider for
//! fetching URLs, and [`fetch_with_concurrency`] combines the two.
//!
//! ```no_run
//! # async fn demo() -> Result<(), fetchpool::error::FetchError> {
//! let urls = ["https://example.com", "https://example.org"];
//! let results = fetchpool::fetch_with_concurrency(&urls, 2).await?;
//! for (url, outcome) in urls.iter().zip(&results) {
//!     match outcome {
//!         fetchpool::Outcome::Success(res) => println!("{url}: {}", res.status),
//!         fetchpool::Outcome::Failure(err) => println!("{url}: {err}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod fetch;
pub mod limit;
pub mod outcome;
pub mod provider;

pub use executor::{execute, BoundedExecutor, ExecutionSummary};
pub use fetch::{fetch_with_concurrency, FetchResponse, FetcherBuilder, HttpFetcher};
pub use limit::ConcurrencyLimit;
pub use outcome::{FailureKind, OperationError, Outcome};
pub use provider::{provider_fn, OperationProvider, ProviderFn};

/// Initializes `env_logger` from `RUST_LOG`. Safe to call more than once.
#[cfg(feature = "logging")]
pub fn init_env_logger() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
