//! The time-expanded label-setting search.
//!
//! # Algorithm
//!
//! States are `(node, time, resource)` with an accumulated cost.  The
//! frontier pops the cheapest state (FIFO among equal costs) and
//!
//! 1. **goal check**: at the goal, the state is returned unless it arrived
//!    before the earliest acceptable time, in which case it is discarded;
//! 2. **dominance**: the state's `(cost, resource)` is offered to the label
//!    set of `(node, floor(time / bin))`; a dominated state is discarded;
//! 3. **expansion**: every out-edge is priced by the oracle at the state's
//!    own (time, resource).  Successors below the dry floor or past the
//!    latest arrival are dropped before they are pushed.
//!
//! The goal check runs before dominance so a goal state is never retained as
//! a label.  Costs are only ever known on demand, so the search never builds
//! the time-expanded graph explicitly.

use log::{debug, info};

use fp_core::{NodeId, hours_to_secs, secs_to_hours, time_bin};
use fp_lattice::Lattice;
use fp_oracle::{CostOracle, EdgeQuery};

use crate::frontier::Frontier;
use crate::label::{Label, LabelStore};
use crate::observer::{NoopObserver, PruneReason, SearchObserver};
use crate::{SearchState, SearchStats, SolveOutcome, SolveRequest, SolverConfig, SolverResult};

// ── PathSolver trait ──────────────────────────────────────────────────────────

/// Pluggable search strategy over a [`Lattice`].
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: a batch sweep shares one solver
/// across Rayon workers.  All per-search state lives on the stack of
/// [`solve_observed`](Self::solve_observed).
pub trait PathSolver: Send + Sync {
    /// Run one search, reporting progress to `observer`.
    fn solve_observed(
        &self,
        lattice:  &Lattice,
        request:  &SolveRequest,
        oracle:   &dyn CostOracle,
        observer: &mut dyn SearchObserver,
    ) -> SolverResult<SolveOutcome>;

    /// Run one search without an observer.
    fn solve(
        &self,
        lattice: &Lattice,
        request: &SolveRequest,
        oracle:  &dyn CostOracle,
    ) -> SolverResult<SolveOutcome> {
        self.solve_observed(lattice, request, oracle, &mut NoopObserver)
    }
}

// ── TimeExpandedSolver ────────────────────────────────────────────────────────

/// Arena slot: a pushed state and the slot it was expanded from.
#[derive(Copy, Clone)]
struct StateRecord {
    state:  SearchState,
    parent: Option<usize>,
}

/// Label-setting search over `(node, time, resource)` with Pareto pruning
/// per `(node, time bin)`.
#[derive(Clone, Debug, Default)]
pub struct TimeExpandedSolver {
    pub config: SolverConfig,
}

impl TimeExpandedSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl PathSolver for TimeExpandedSolver {
    fn solve_observed(
        &self,
        lattice:  &Lattice,
        request:  &SolveRequest,
        oracle:   &dyn CostOracle,
        observer: &mut dyn SearchObserver,
    ) -> SolverResult<SolveOutcome> {
        let config = &self.config;
        config.validate()?;
        request.validate(lattice, config)?;

        let window = config.arrival_window.map(|w| w.resolve(request.start_time_secs));

        // The arena doubles as the predecessor map: frontier entries index it.
        let mut arena: Vec<StateRecord> = Vec::new();
        let mut frontier: Frontier<usize> = Frontier::new();
        let mut labels = LabelStore::new();
        let mut stats = SearchStats::default();

        observer.on_search_start(request);
        debug!(
            "search {} -> {} at t={:.2}h, resource {:.0}, floor {:.0}, bin {}s",
            request.start,
            request.goal,
            secs_to_hours(request.start_time_secs),
            request.initial_resource,
            config.dry_floor,
            config.time_bin_secs
        );

        arena.push(StateRecord {
            state: SearchState {
                node:      request.start,
                time_secs: request.start_time_secs,
                resource:  request.initial_resource,
                cost:      0.0,
            },
            parent: None,
        });
        frontier.push(0.0, 0);
        stats.states_pushed = 1;

        while let Some((_, idx)) = frontier.pop() {
            let s = arena[idx].state;
            stats.states_expanded += 1;
            observer.on_pop(&s);

            // ── Goal check ───────────────────────────────────────────────
            if s.node == request.goal {
                if window.is_some_and(|w| w.is_too_early(s.time_secs)) {
                    stats.early_arrivals += 1;
                    observer.on_prune(&s, PruneReason::EarlyArrival);
                    continue;
                }
                stats.labels_retained = labels.len() as u64;
                let path = reconstruct(&arena, idx);
                let outcome = SolveOutcome::found(path, &s, request.start_time_secs, stats);
                info!(
                    "path found: {} nodes, cost {:.2}, flight {:.4}h, {} states expanded",
                    outcome.path.len(),
                    outcome.total_cost,
                    secs_to_hours(s.time_secs - request.start_time_secs),
                    stats.states_expanded
                );
                observer.on_search_end(&outcome);
                return Ok(outcome);
            }

            // ── Dominance ────────────────────────────────────────────────
            let bin = time_bin(s.time_secs, config.time_bin_secs);
            if !labels.insert(s.node, bin, Label::new(s.cost, s.resource)) {
                stats.dominated += 1;
                observer.on_prune(&s, PruneReason::Dominated);
                continue;
            }

            // ── Expansion ────────────────────────────────────────────────
            let from_pos = lattice.node_pos[s.node.index()];
            let time_hours = secs_to_hours(s.time_secs);
            for edge in lattice.out_edges(s.node) {
                let to = lattice.edge_to[edge.index()];
                let edge_cost = oracle
                    .edge_cost(EdgeQuery {
                        from:     s.node,
                        to,
                        from_pos,
                        to_pos:   lattice.node_pos[to.index()],
                        resource: s.resource,
                        time_hours,
                    })?
                    .validate()?;

                let next = SearchState {
                    node:      to,
                    time_secs: s.time_secs + hours_to_secs(edge_cost.elapsed_hours),
                    resource:  s.resource - edge_cost.resource_consumed,
                    cost:      s.cost + edge_cost.cost,
                };

                if next.resource < config.dry_floor {
                    stats.resource_exhausted += 1;
                    observer.on_prune(&next, PruneReason::ResourceExhausted);
                    continue;
                }
                if window.is_some_and(|w| w.is_too_late(next.time_secs)) {
                    stats.late_arrivals += 1;
                    observer.on_prune(&next, PruneReason::LateArrival);
                    continue;
                }

                arena.push(StateRecord { state: next, parent: Some(idx) });
                frontier.push(next.cost, arena.len() - 1);
                stats.states_pushed += 1;
            }
        }

        stats.labels_retained = labels.len() as u64;
        let outcome = SolveOutcome::not_found(stats);
        info!(
            "no path {} -> {}: {} states expanded ({} dominated, {} below the floor, {} late, {} early)",
            request.start,
            request.goal,
            stats.states_expanded,
            stats.dominated,
            stats.resource_exhausted,
            stats.late_arrivals,
            stats.early_arrivals
        );
        observer.on_search_end(&outcome);
        Ok(outcome)
    }
}

/// Follow parent links from `idx` back to the start.
fn reconstruct(arena: &[StateRecord], idx: usize) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut cur = Some(idx);
    while let Some(i) = cur {
        path.push(arena[i].state.node);
        cur = arena[i].parent;
    }
    path.reverse();
    path
}
