//! Batch error type.

use thiserror::Error;

use fp_solver::SolverError;

/// Errors that abort a whole batch.
///
/// A scenario that finds no path is a result, not an error.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("start hour must be finite, got {0}")]
    InvalidStartHour(f64),

    #[error("scenario at start hour {start_hour}: {source}")]
    Scenario {
        start_hour: f64,
        #[source]
        source:     SolverError,
    },
}

pub type BatchResult<T> = Result<T, BatchError>;
