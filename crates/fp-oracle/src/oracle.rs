//! The edge cost contract consumed by the solver.
//!
//! An oracle answers one question: what does it cost to fly `from → to`
//! starting with `resource` left at absolute time `time_hours`?  Answers must
//! be referentially transparent.  The solver never caches them across
//! differing (time, resource) contexts.

use fp_core::{GeoPoint, NodeId};

use crate::{OracleError, OracleResult};

// ── EdgeQuery ─────────────────────────────────────────────────────────────────

/// Inputs of one edge evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeQuery {
    pub from:       NodeId,
    pub to:         NodeId,
    pub from_pos:   GeoPoint,
    pub to_pos:     GeoPoint,
    /// Remaining resource (gross weight, kg) when the edge is entered.
    pub resource:   f64,
    /// Absolute time in hours when the edge is entered.
    pub time_hours: f64,
}

// ── EdgeCost ──────────────────────────────────────────────────────────────────

/// Result of one edge evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeCost {
    /// Resource burned over the edge.
    pub resource_consumed: f64,
    pub elapsed_hours:     f64,
    /// Monetary cost of the edge.
    pub cost:              f64,
}

impl EdgeCost {
    pub fn new(resource_consumed: f64, elapsed_hours: f64, cost: f64) -> Self {
        Self { resource_consumed, elapsed_hours, cost }
    }

    /// Check the contract: all fields finite, elapsed time non-negative.
    ///
    /// Negative cost or consumption is accepted; it only voids the
    /// optimality guarantee, not the search itself.
    pub fn validate(self) -> OracleResult<Self> {
        if !(self.resource_consumed.is_finite() && self.elapsed_hours.is_finite() && self.cost.is_finite()) {
            return Err(OracleError::ContractViolation(format!("non-finite edge cost {self:?}")));
        }
        if self.elapsed_hours < 0.0 {
            return Err(OracleError::ContractViolation(format!(
                "negative elapsed time {} h",
                self.elapsed_hours
            )));
        }
        Ok(self)
    }
}

// ── CostOracle ────────────────────────────────────────────────────────────────

/// Pluggable edge cost function.
///
/// Implementations must be `Send + Sync`: a batch sweep shares one oracle
/// across Rayon workers.  Any read-only tables are owned by the
/// implementation, never global.
///
/// Plain closures `Fn(EdgeQuery) -> EdgeCost` implement this trait, which
/// keeps hand-written test oracles short.
pub trait CostOracle: Send + Sync {
    fn edge_cost(&self, query: EdgeQuery) -> OracleResult<EdgeCost>;
}

impl<F> CostOracle for F
where
    F: Fn(EdgeQuery) -> EdgeCost + Send + Sync,
{
    #[inline]
    fn edge_cost(&self, query: EdgeQuery) -> OracleResult<EdgeCost> {
        Ok(self(query))
    }
}
