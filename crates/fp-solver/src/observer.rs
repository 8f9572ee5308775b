//! Search observer trait: the expansion-order side channel.

use crate::{SearchState, SolveOutcome, SolveRequest};

/// Why a state was dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PruneReason {
    /// A retained label at the same (node, time bin) dominated it.
    Dominated,
    /// The successor would fall below the dry floor.
    ResourceExhausted,
    /// The successor would pass the latest acceptable arrival.
    LateArrival,
    /// The goal was reached before the earliest acceptable arrival.
    EarlyArrival,
}

/// Callbacks invoked by a [`PathSolver`](crate::PathSolver) during a search.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers never influence the search.
///
/// # Example: expansion log
///
/// ```rust,ignore
/// struct ExpansionLog(Vec<NodeId>);
///
/// impl SearchObserver for ExpansionLog {
///     fn on_pop(&mut self, state: &SearchState) {
///         self.0.push(state.node);
///     }
/// }
/// ```
pub trait SearchObserver {
    fn on_search_start(&mut self, _request: &SolveRequest) {}

    /// Called for every state popped from the frontier, in pop order, before
    /// the goal and dominance checks.
    fn on_pop(&mut self, _state: &SearchState) {}

    /// Called for every dropped state.  For `ResourceExhausted` and
    /// `LateArrival` this is the rejected successor, never pushed.
    fn on_prune(&mut self, _state: &SearchState, _reason: PruneReason) {}

    /// Called once when the search returns normally (found or not).
    fn on_search_end(&mut self, _outcome: &SolveOutcome) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
