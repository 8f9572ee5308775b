//! Plain data row types written by output backends.

use fp_core::{NodeId, secs_to_hours};
use fp_batch::ScenarioResult;
use fp_lattice::Lattice;
use fp_solver::SearchState;

/// One scenario of a start-time sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioRow {
    pub start_hour:      f64,
    /// `"optimal"` or `"no_path"`.
    pub status:          &'static str,
    pub total_cost:      Option<f64>,
    pub fuel_burned_kg:  Option<f64>,
    pub flight_time_h:   Option<f64>,
    pub states_expanded: u64,
    pub runtime_ms:      f64,
}

impl ScenarioRow {
    pub fn from_result(r: &ScenarioResult) -> Self {
        Self {
            start_hour:      r.start_hour,
            status:          r.status.as_str(),
            total_cost:      r.total_cost(),
            fuel_burned_kg:  r.fuel_burned(),
            flight_time_h:   r.flight_time_secs().map(secs_to_hours),
            states_expanded: r.outcome.states_expanded(),
            runtime_ms:      r.runtime.as_secs_f64() * 1_000.0,
        }
    }
}

/// One popped state, in pop order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionRow {
    /// 1-based pop number.
    pub seq:       u64,
    pub node:      u32,
    pub cost:      f64,
    pub time_secs: f64,
    pub resource:  f64,
}

impl ExpansionRow {
    pub fn new(seq: u64, state: &SearchState) -> Self {
        Self {
            seq,
            node:      state.node.0,
            cost:      state.cost,
            time_secs: state.time_secs,
            resource:  state.resource,
        }
    }
}

/// One waypoint of a solution path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointRow {
    pub seq:  u32,
    pub node: u32,
    pub lat:  f64,
    pub lon:  f64,
}

/// Waypoint rows for `path`; nodes outside `lattice` are skipped.
pub fn path_rows(lattice: &Lattice, path: &[NodeId]) -> Vec<WaypointRow> {
    path.iter()
        .filter_map(|&n| lattice.position(n).map(|p| (n, p)))
        .enumerate()
        .map(|(i, (n, p))| WaypointRow { seq: i as u32, node: n.0, lat: p.lat, lon: p.lon })
        .collect()
}
