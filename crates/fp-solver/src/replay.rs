//! Re-evaluate a path leg by leg.
//!
//! Used to report fuel burn and flight time for a solved path, and by tests
//! to check that a path the solver returned is actually feasible.

use fp_core::{NodeId, hours_to_secs, secs_to_hours};
use fp_lattice::Lattice;
use fp_oracle::{CostOracle, EdgeCost, EdgeQuery};

use crate::{SolverError, SolverResult};

/// One evaluated leg.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LegProfile {
    pub from:            NodeId,
    pub to:              NodeId,
    pub start_time_secs: f64,
    pub resource_before: f64,
    pub edge:            EdgeCost,
}

impl LegProfile {
    pub fn resource_after(&self) -> f64 {
        self.resource_before - self.edge.resource_consumed
    }
}

/// Totals over a replayed path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathProfile {
    pub legs:             Vec<LegProfile>,
    pub fuel_burned:      f64,
    pub flight_time_secs: f64,
    pub total_cost:       f64,
    /// Lowest resource held at any point along the path.
    pub min_resource:     f64,
    pub final_resource:   f64,
}

/// Walk `path` from `initial_resource` at `start_time_secs`, pricing each leg
/// at the time and resource it is actually entered with.
///
/// A path with fewer than two nodes has no legs.  Every consecutive pair must
/// be a lattice edge.
pub fn replay_path(
    lattice:          &Lattice,
    path:             &[NodeId],
    oracle:           &dyn CostOracle,
    initial_resource: f64,
    start_time_secs:  f64,
) -> SolverResult<PathProfile> {
    if let Some(&missing) = path.iter().find(|n| !lattice.contains(**n)) {
        return Err(SolverError::NodeNotFound(missing));
    }

    let mut legs = Vec::with_capacity(path.len().saturating_sub(1));
    let mut time = start_time_secs;
    let mut resource = initial_resource;
    let mut cost = 0.0;
    let mut min_resource = initial_resource;

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if !lattice.has_edge(from, to) {
            return Err(SolverError::NotAnEdge { from, to });
        }
        let edge = oracle
            .edge_cost(EdgeQuery {
                from,
                to,
                from_pos:   lattice.node_pos[from.index()],
                to_pos:     lattice.node_pos[to.index()],
                resource,
                time_hours: secs_to_hours(time),
            })?
            .validate()?;

        legs.push(LegProfile { from, to, start_time_secs: time, resource_before: resource, edge });
        time += hours_to_secs(edge.elapsed_hours);
        resource -= edge.resource_consumed;
        cost += edge.cost;
        min_resource = min_resource.min(resource);
    }

    Ok(PathProfile {
        legs,
        fuel_burned:      initial_resource - resource,
        flight_time_secs: time - start_time_secs,
        total_cost:       cost,
        min_resource,
        final_resource:   resource,
    })
}
