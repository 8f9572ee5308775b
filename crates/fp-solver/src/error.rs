//! Solver error type.
//!
//! Running out of resource, missing the arrival window or finding no path at
//! all are *outcomes*, not errors; see [`SolveOutcome`](crate::SolveOutcome).

use thiserror::Error;

use fp_core::NodeId;
use fp_oracle::OracleError;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("node {0} not found in lattice")]
    NodeNotFound(NodeId),

    #[error("{from} -> {to} is not a lattice edge")]
    NotAnEdge { from: NodeId, to: NodeId },

    /// The oracle failed or broke its contract; the search is aborted.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

pub type SolverResult<T> = Result<T, SolverError>;
