use std::panic::AssertUnwindSafe;

use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;

use crate::{
    error::FetchError,
    limit::ConcurrencyLimit,
    outcome::{OperationError, Outcome},
    provider::OperationProvider,
};

use super::{collect_slots, empty_slots, record, ExecutionSummary};

/// Runs work items through a provider with at most `limit` operations in flight.
///
/// Results come back index-aligned with the input, whatever order the
/// operations settle in. Per-item failures (including panics) are captured
/// as [`Outcome::Failure`] and never stop the other items.
pub struct BoundedExecutor<P> {
    pub(super) provider: P,
    pub(super) limit: ConcurrencyLimit,
}

impl<P> BoundedExecutor<P> {
    /// Creates an executor, validating the limit before anything can be dispatched.
    pub fn new<L>(provider: P, limit: L) -> Result<Self, FetchError>
    where
        L: TryInto<ConcurrencyLimit>,
        L::Error: Into<FetchError>,
    {
        let limit = limit.try_into().map_err(Into::into)?;
        Ok(Self { provider, limit })
    }

    pub fn limit(&self) -> ConcurrencyLimit {
        self.limit
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Executes every item on the calling task.
    ///
    /// Items are dispatched in input order. Once the in-flight set holds
    /// `limit` operations, dispatch waits for whichever one settles first
    /// before starting the next item. The call returns only after every
    /// dispatched operation has settled.
    pub async fn execute<I>(&self, items: &[I]) -> Vec<Outcome<P::Output>>
    where
        I: Sync,
        P: OperationProvider<I>,
    {
        if items.is_empty() {
            return Vec::new();
        }

        let limit = self.limit.get();
        log::debug!("executing {} items with limit {limit}", items.len());

        let mut slots = empty_slots(items.len());
        let mut in_flight = FuturesUnordered::new();

        for (index, item) in items.iter().enumerate() {
            log::debug!("dispatching item {index}");
            in_flight.push(self.settle(index, item));

            if in_flight.len() >= limit {
                if let Some((settled, outcome)) = in_flight.next().await {
                    record(&mut slots, settled, outcome);
                }
            }
        }

        while let Some((settled, outcome)) = in_flight.next().await {
            record(&mut slots, settled, outcome);
        }

        let outcomes = collect_slots(slots);
        log::info!("{}", ExecutionSummary::from_outcomes(&outcomes));
        outcomes
    }

    async fn settle<I>(&self, index: usize, item: &I) -> (usize, Outcome<P::Output>)
    where
        I: Sync,
        P: OperationProvider<I>,
    {
        let outcome = match AssertUnwindSafe(self.provider.run(item))
            .catch_unwind()
            .await
        {
            Ok(result) => Outcome::from(result),
            Err(payload) => Outcome::Failure(OperationError::from_panic(payload)),
        };
        (index, outcome)
    }
}

/// Validates `max_concurrency`, then executes `items` through `provider`.
///
/// Fails only when the limit is invalid, in which case the provider is
/// never invoked. Otherwise every item gets an outcome at its own position.
pub async fn execute<P, I, L>(
    provider: P,
    items: &[I],
    max_concurrency: L,
) -> Result<Vec<Outcome<P::Output>>, FetchError>
where
    I: Sync,
    P: OperationProvider<I>,
    L: TryInto<ConcurrencyLimit>,
    L::Error: Into<FetchError>,
{
    let executor = BoundedExecutor::new(provider, max_concurrency)?;
    Ok(executor.execute(items).await)
}
