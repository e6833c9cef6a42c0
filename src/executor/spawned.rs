use std::future::{poll_fn, Future};
use std::panic::AssertUnwindSafe;
use std::pin::pin;
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use tokio::sync::{oneshot, Semaphore};
use tokio::task::JoinError;

use crate::{
    outcome::{OperationError, Outcome},
    provider::OperationProvider,
};

use super::bounded::BoundedExecutor;
use super::{collect_slots, empty_slots, record, ExecutionSummary};

impl<P> BoundedExecutor<P> {
    /// Executes every item as its own tokio task.
    ///
    /// A semaphore with `limit` permits gates dispatch: a permit is acquired
    /// before an item is spawned and released when its operation settles.
    /// Dispatch waits until each task has actually started before moving to
    /// the next item, so start order matches input order on a multi-threaded
    /// runtime too. Results are written by position, same as
    /// [`BoundedExecutor::execute`].
    ///
    /// Dropping the returned future detaches the tasks already spawned; they
    /// still run to completion, only their results are discarded.
    pub async fn execute_spawned<I>(&self, items: Vec<I>) -> Vec<Outcome<P::Output>>
    where
        I: Send + Sync + 'static,
        P: OperationProvider<I> + Clone + 'static,
        P::Output: 'static,
        P::Error: 'static,
    {
        if items.is_empty() {
            return Vec::new();
        }

        let limit = self.limit.get();
        log::debug!("spawning {} items with limit {limit}", items.len());

        let semaphore = Arc::new(Semaphore::new(limit));
        let mut slots = empty_slots(items.len());
        let mut in_flight = FuturesUnordered::new();

        for (index, item) in items.into_iter().enumerate() {
            let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
                log::error!("dispatch gate closed before item {index}");
                break;
            };

            let provider = self.provider.clone();
            let (started_tx, started_rx) = oneshot::channel();
            log::debug!("dispatching item {index}");
            in_flight.push(tokio::spawn(async move {
                let operation = AssertUnwindSafe(provider.run(&item)).catch_unwind();
                let outcome = match signal_first_poll(operation, started_tx).await {
                    Ok(result) => Outcome::from(result),
                    Err(payload) => Outcome::Failure(OperationError::from_panic(payload)),
                };
                drop(permit);
                (index, outcome)
            }));
            let _ = started_rx.await;

            while let Some(Some(joined)) = in_flight.next().now_or_never() {
                settle_joined(&mut slots, joined);
            }
        }

        while let Some(joined) = in_flight.next().await {
            settle_joined(&mut slots, joined);
        }

        let outcomes = collect_slots(slots);
        log::info!("{}", ExecutionSummary::from_outcomes(&outcomes));
        outcomes
    }
}

/// Drives `operation`, notifying `started` once it has been polled for the first time.
async fn signal_first_poll<F: Future>(operation: F, started: oneshot::Sender<()>) -> F::Output {
    let mut operation = pin!(operation);
    let mut started = Some(started);
    poll_fn(|cx| {
        let poll = operation.as_mut().poll(cx);
        if let Some(tx) = started.take() {
            let _ = tx.send(());
        }
        poll
    })
    .await
}

fn settle_joined<T>(
    slots: &mut [Option<Outcome<T>>],
    joined: Result<(usize, Outcome<T>), JoinError>,
) {
    match joined {
        Ok((index, outcome)) => record(slots, index, outcome),
        Err(err) => log::error!("operation task did not complete: {err}"),
    }
}
