//! Start-time sweep runner.
//!
//! Every scenario is an independent search: its own frontier, label store
//! and predecessor arena.  The lattice, solver and oracle are shared
//! read-only, which is what makes the sweep embarrassingly parallel.

use std::time::{Duration, Instant};

use log::{debug, warn};

use fp_core::hours_to_secs;
use fp_lattice::Lattice;
use fp_oracle::CostOracle;
use fp_solver::{PathProfile, PathSolver, SolveOutcome, SolveRequest, replay_path};

use crate::{BatchError, BatchObserver, BatchResult};

// ── ScenarioResult ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioStatus {
    Optimal,
    NoPath,
}

impl ScenarioStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioStatus::Optimal => "optimal",
            ScenarioStatus::NoPath  => "no_path",
        }
    }
}

/// Outcome of one start time.
#[derive(Clone, Debug)]
pub struct ScenarioResult {
    /// Start time in hours on the oracle's time axis.
    pub start_hour: f64,
    pub status:     ScenarioStatus,
    pub outcome:    SolveOutcome,
    /// Leg-by-leg replay of the path; `None` when no path was found.
    pub profile:    Option<PathProfile>,
    /// Wall-clock time of the search alone.
    pub runtime:    Duration,
}

impl ScenarioResult {
    pub fn total_cost(&self) -> Option<f64> {
        self.outcome.is_found().then_some(self.outcome.total_cost)
    }

    pub fn fuel_burned(&self) -> Option<f64> {
        self.profile.as_ref().map(|p| p.fuel_burned)
    }

    pub fn flight_time_secs(&self) -> Option<f64> {
        self.outcome.flight_time_secs
    }
}

// ── BatchRunner ───────────────────────────────────────────────────────────────

/// Runs one search per start hour, all sharing a lattice, solver and oracle.
///
/// `base` supplies start node, goal and initial resource; its start time is
/// replaced per scenario.
pub struct BatchRunner<'a> {
    lattice: &'a Lattice,
    solver:  &'a dyn PathSolver,
    oracle:  &'a dyn CostOracle,
    base:    SolveRequest,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        lattice: &'a Lattice,
        solver:  &'a dyn PathSolver,
        oracle:  &'a dyn CostOracle,
        base:    SolveRequest,
    ) -> Self {
        Self { lattice, solver, oracle, base }
    }

    /// Whole hours `first..=last`.
    pub fn hourly(first: u32, last: u32) -> Vec<f64> {
        (first..=last).map(f64::from).collect()
    }

    /// Solve every start hour and return results in input order.
    ///
    /// Scenarios without a path are recorded and the sweep continues.  A
    /// solver error (an oracle contract violation, an invalid request)
    /// aborts the batch.
    ///
    /// With the `parallel` feature the scenarios run on the Rayon pool and
    /// `observer` is notified in input order once all of them finished.
    pub fn run(
        &self,
        start_hours: &[f64],
        observer: &mut dyn BatchObserver,
    ) -> BatchResult<Vec<ScenarioResult>> {
        if let Some(&bad) = start_hours.iter().find(|h| !h.is_finite()) {
            return Err(BatchError::InvalidStartHour(bad));
        }

        observer.on_batch_start(start_hours.len());

        #[cfg(feature = "parallel")]
        let results = {
            use rayon::prelude::*;

            let results = start_hours
                .par_iter()
                .map(|&h| self.run_one(h))
                .collect::<BatchResult<Vec<_>>>()?;
            for r in &results {
                observer.on_scenario_end(r);
            }
            results
        };

        #[cfg(not(feature = "parallel"))]
        let results = {
            let mut results = Vec::with_capacity(start_hours.len());
            for &h in start_hours {
                let r = self.run_one(h)?;
                observer.on_scenario_end(&r);
                results.push(r);
            }
            results
        };

        observer.on_batch_end(&results);
        Ok(results)
    }

    /// Solve a single start hour.
    pub fn run_one(&self, start_hour: f64) -> BatchResult<ScenarioResult> {
        let scenario_err = |source| BatchError::Scenario { start_hour, source };

        let request = SolveRequest {
            start_time_secs: hours_to_secs(start_hour),
            ..self.base
        };

        let t0 = Instant::now();
        let outcome = self
            .solver
            .solve(self.lattice, &request, self.oracle)
            .map_err(scenario_err)?;
        let runtime = t0.elapsed();

        let (status, profile) = if outcome.is_found() {
            let profile = replay_path(
                self.lattice,
                &outcome.path,
                self.oracle,
                request.initial_resource,
                request.start_time_secs,
            )
            .map_err(scenario_err)?;
            (ScenarioStatus::Optimal, Some(profile))
        } else {
            (ScenarioStatus::NoPath, None)
        };

        match status {
            ScenarioStatus::Optimal => debug!(
                "t={start_hour:>5.1}h  cost {:>10.2}  states {:>7}  {:?}",
                outcome.total_cost,
                outcome.states_expanded(),
                runtime
            ),
            ScenarioStatus::NoPath => warn!(
                "t={start_hour:>5.1}h  no feasible path ({} states expanded)",
                outcome.states_expanded()
            ),
        }

        Ok(ScenarioResult { start_hour, status, outcome, profile, runtime })
    }
}
