//! Batch observer trait.

use crate::ScenarioResult;

/// Callbacks invoked by [`BatchRunner::run`](crate::BatchRunner::run).
///
/// All methods have default no-op implementations.
pub trait BatchObserver {
    fn on_batch_start(&mut self, _scenarios: usize) {}

    /// Called once per scenario, in input order.
    fn on_scenario_end(&mut self, _result: &ScenarioResult) {}

    fn on_batch_end(&mut self, _results: &[ScenarioResult]) {}
}

/// A [`BatchObserver`] that does nothing.
pub struct NoopBatchObserver;

impl BatchObserver for NoopBatchObserver {}
