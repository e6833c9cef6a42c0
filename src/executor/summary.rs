use std::fmt;

use serde::Serialize;

use crate::outcome::Outcome;

/// Counts of settled outcomes for one execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl ExecutionSummary {
    pub fn from_outcomes<T>(outcomes: &[Outcome<T>]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for ExecutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items settled: {} succeeded, {} failed",
            self.total, self.succeeded, self.failed
        )
    }
}
