//! Oracle error type.

use thiserror::Error;

use fp_core::NodeId;

/// Errors produced by cost oracles and their table loaders.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle returned a value outside its contract (negative elapsed
    /// time, NaN, infinity, non-positive ground speed, ...).
    #[error("oracle contract violation: {0}")]
    ContractViolation(String),

    #[error("no wind samples for waypoint {0}")]
    MissingWaypoint(NodeId),

    #[error("invalid table: {0}")]
    InvalidTable(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OracleResult<T> = Result<T, OracleError>;
