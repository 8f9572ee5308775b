//! Lattice error type.

use thiserror::Error;

use fp_core::NodeId;

/// Errors produced by `fp-lattice`.
#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("invalid lattice parameters: {0}")]
    InvalidParams(String),

    #[error("{node_count} waypoints cannot form rings of {angle_count} angles")]
    InvalidShape { node_count: usize, angle_count: u32 },

    #[error("node {0} not found in lattice")]
    NodeNotFound(NodeId),
}

pub type LatticeResult<T> = Result<T, LatticeError>;
