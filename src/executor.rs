#[path = "executor/bounded.rs"]
mod bounded;

#[path = "executor/spawned.rs"]
mod spawned;

#[path = "executor/summary.rs"]
mod summary;

pub use bounded::{execute, BoundedExecutor};
pub use summary::ExecutionSummary;

use crate::outcome::{FailureKind, OperationError, Outcome};

/// Turns the per-position slots into the result sequence.
///
/// Every dispatched operation is drained before this runs, so an empty slot
/// only appears if a spawned task was lost by the runtime.
fn collect_slots<T>(slots: Vec<Option<Outcome<T>>>) -> Vec<Outcome<T>> {
    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.unwrap_or_else(|| {
                log::error!("item {index} never settled");
                Outcome::Failure(OperationError::new(
                    FailureKind::Other,
                    format!("operation for item {index} did not settle"),
                ))
            })
        })
        .collect()
}

fn record<T>(slots: &mut [Option<Outcome<T>>], index: usize, outcome: Outcome<T>) {
    match &outcome {
        Outcome::Success(_) => log::debug!("item {index} settled: success"),
        Outcome::Failure(err) => log::warn!("item {index} failed ({}): {err}", err.kind),
    }
    debug_assert!(slots[index].is_none(), "slot {index} written twice");
    slots[index] = Some(outcome);
}

fn empty_slots<T>(len: usize) -> Vec<Option<Outcome<T>>> {
    let mut slots = Vec::with_capacity(len);
    slots.resize_with(len, || None);
    slots
}
