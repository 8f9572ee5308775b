//! Static-weight Dijkstra baseline.
//!
//! Every edge is priced once, at the request's initial resource and start
//! time, and the resulting fixed weights are searched with plain Dijkstra.
//! The dry floor and arrival window are ignored.  When the oracle does not
//! depend on time or resource this gives the same cost as
//! [`TimeExpandedSolver`](crate::TimeExpandedSolver) with a single time bin.

use fp_core::{EdgeId, NodeId, hours_to_secs, secs_to_hours};
use fp_lattice::Lattice;
use fp_oracle::{CostOracle, EdgeQuery};

use crate::frontier::Frontier;
use crate::observer::SearchObserver;
use crate::{PathSolver, SearchState, SearchStats, SolveOutcome, SolveRequest, SolverError, SolverResult};

#[derive(Clone, Copy, Debug, Default)]
pub struct StaticDijkstra;

impl PathSolver for StaticDijkstra {
    fn solve_observed(
        &self,
        lattice:  &Lattice,
        request:  &SolveRequest,
        oracle:   &dyn CostOracle,
        observer: &mut dyn SearchObserver,
    ) -> SolverResult<SolveOutcome> {
        for node in [request.start, request.goal] {
            if !lattice.contains(node) {
                return Err(SolverError::NodeNotFound(node));
            }
        }
        observer.on_search_start(request);

        let n = lattice.node_count();
        let time_hours = secs_to_hours(request.start_time_secs);
        // dist[v] = best known cost to v; elapsed/consumed follow the same edge.
        let mut dist      = vec![f64::INFINITY; n];
        let mut elapsed_h = vec![0.0; n];
        let mut consumed  = vec![0.0; n];
        let mut prev_edge = vec![EdgeId::INVALID; n];
        let mut settled   = vec![false; n];
        let mut stats = SearchStats::default();

        let mut frontier: Frontier<NodeId> = Frontier::new();
        dist[request.start.index()] = 0.0;
        frontier.push(0.0, request.start);
        stats.states_pushed = 1;

        while let Some((cost, node)) = frontier.pop() {
            // Skip stale heap entries.
            if settled[node.index()] {
                continue;
            }
            settled[node.index()] = true;
            stats.states_expanded += 1;

            let state = SearchState {
                node,
                time_secs: request.start_time_secs + hours_to_secs(elapsed_h[node.index()]),
                resource:  request.initial_resource - consumed[node.index()],
                cost,
            };
            observer.on_pop(&state);

            if node == request.goal {
                let path = reconstruct(lattice, &prev_edge, node);
                let outcome = SolveOutcome::found(path, &state, request.start_time_secs, stats);
                observer.on_search_end(&outcome);
                return Ok(outcome);
            }

            let from_pos = lattice.node_pos[node.index()];
            for edge in lattice.out_edges(node) {
                let to = lattice.edge_to[edge.index()];
                if settled[to.index()] {
                    continue;
                }
                let c = oracle
                    .edge_cost(EdgeQuery {
                        from:     node,
                        to,
                        from_pos,
                        to_pos:   lattice.node_pos[to.index()],
                        resource: request.initial_resource,
                        time_hours,
                    })?
                    .validate()?;

                let new_cost = cost + c.cost;
                if new_cost < dist[to.index()] {
                    dist[to.index()]      = new_cost;
                    elapsed_h[to.index()] = elapsed_h[node.index()] + c.elapsed_hours;
                    consumed[to.index()]  = consumed[node.index()] + c.resource_consumed;
                    prev_edge[to.index()] = edge;
                    frontier.push(new_cost, to);
                    stats.states_pushed += 1;
                }
            }
        }

        let outcome = SolveOutcome::not_found(stats);
        observer.on_search_end(&outcome);
        Ok(outcome)
    }
}

fn reconstruct(lattice: &Lattice, prev_edge: &[EdgeId], goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut cur = goal;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = lattice.edge_from[e.index()];
        path.push(cur);
    }
    path.reverse();
    path
}
