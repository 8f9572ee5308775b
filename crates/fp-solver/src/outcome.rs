//! Search results and diagnostics.

use fp_core::NodeId;

/// One point of the time-expanded state space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchState {
    pub node:      NodeId,
    /// Absolute time in seconds.
    pub time_secs: f64,
    pub resource:  f64,
    /// Cost accumulated since the start.
    pub cost:      f64,
}

/// Counters collected over one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the frontier, including discarded ones.
    pub states_expanded:    u64,
    pub states_pushed:      u64,
    /// Pops discarded because a retained label dominated them.
    pub dominated:          u64,
    /// Successors dropped for falling below the dry floor.
    pub resource_exhausted: u64,
    /// Successors dropped for passing the latest arrival.
    pub late_arrivals:      u64,
    /// Goal pops discarded for arriving before the earliest arrival.
    pub early_arrivals:     u64,
    /// Labels held by the store when the search ended. Always 0 for
    /// `StaticDijkstra`, which keeps no label store.
    pub labels_retained:    u64,
}

/// Result of a search.
///
/// A failed search is not an error: it returns an empty `path` with
/// `total_cost == 0.0` and the diagnostics gathered until the frontier ran
/// dry.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveOutcome {
    /// Node ids from start to goal; empty when no path was found.
    pub path:               Vec<NodeId>,
    pub total_cost:         f64,
    /// Absolute arrival time at the goal.
    pub arrival_time_secs:  Option<f64>,
    /// Arrival time minus the request's start time.
    pub flight_time_secs:   Option<f64>,
    pub remaining_resource: Option<f64>,
    pub stats:              SearchStats,
}

impl SolveOutcome {
    pub(crate) fn found(path: Vec<NodeId>, goal: &SearchState, start_time_secs: f64, stats: SearchStats) -> Self {
        Self {
            path,
            total_cost:         goal.cost,
            arrival_time_secs:  Some(goal.time_secs),
            flight_time_secs:   Some(goal.time_secs - start_time_secs),
            remaining_resource: Some(goal.resource),
            stats,
        }
    }

    pub(crate) fn not_found(stats: SearchStats) -> Self {
        Self {
            path:               Vec::new(),
            total_cost:         0.0,
            arrival_time_secs:  None,
            flight_time_secs:   None,
            remaining_resource: None,
            stats,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    #[inline]
    pub fn states_expanded(&self) -> u64 {
        self.stats.states_expanded
    }

    /// Resource burned over the path, given the request's initial resource.
    pub fn resource_used(&self, initial_resource: f64) -> Option<f64> {
        self.remaining_resource.map(|r| initial_resource - r)
    }
}
