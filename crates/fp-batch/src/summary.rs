//! Aggregate statistics over a finished batch.

use std::fmt;
use std::time::Duration;

use crate::{ScenarioResult, ScenarioStatus};

#[derive(Clone, Debug, PartialEq)]
pub struct BatchSummary {
    pub scenarios:      usize,
    pub optimal:        usize,
    pub no_path:        usize,
    /// `(start_hour, cost)` of the cheapest scenario; earliest hour on ties.
    pub cheapest:       Option<(f64, f64)>,
    pub mean_cost:      Option<f64>,
    pub mean_fuel:      Option<f64>,
    pub total_states:   u64,
    pub total_runtime:  Duration,
}

pub fn summarize(results: &[ScenarioResult]) -> BatchSummary {
    let solved: Vec<&ScenarioResult> = results
        .iter()
        .filter(|r| r.status == ScenarioStatus::Optimal)
        .collect();

    let cheapest = solved
        .iter()
        .map(|r| (r.start_hour, r.outcome.total_cost))
        .fold(None, |best: Option<(f64, f64)>, cur| match best {
            Some(b) if b.1 <= cur.1 => Some(b),
            _ => Some(cur),
        });

    let mean = |values: Vec<f64>| {
        (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
    };

    BatchSummary {
        scenarios:     results.len(),
        optimal:       solved.len(),
        no_path:       results.len() - solved.len(),
        cheapest,
        mean_cost:     mean(solved.iter().map(|r| r.outcome.total_cost).collect()),
        mean_fuel:     mean(solved.iter().filter_map(|r| r.fuel_burned()).collect()),
        total_states:  results.iter().map(|r| r.outcome.states_expanded()).sum(),
        total_runtime: results.iter().map(|r| r.runtime).sum(),
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenarios:     {} ({} optimal, {} no path)", self.scenarios, self.optimal, self.no_path)?;
        if let Some((hour, cost)) = self.cheapest {
            writeln!(f, "cheapest:      t={hour:.1}h  €{cost:.2}")?;
        }
        if let Some(cost) = self.mean_cost {
            writeln!(f, "mean cost:     €{cost:.2}")?;
        }
        if let Some(fuel) = self.mean_fuel {
            writeln!(f, "mean fuel:     {fuel:.0} kg")?;
        }
        writeln!(f, "states:        {}", self.total_states)?;
        write!(f, "search time:   {:?}", self.total_runtime)
    }
}
