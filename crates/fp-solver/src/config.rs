//! Solver configuration and per-search requests.

use fp_core::{ArrivalWindow, NodeId};
use fp_lattice::Lattice;

use crate::{SolverError, SolverResult};

// ── SolverConfig ──────────────────────────────────────────────────────────────

/// Tunables shared by every search a solver runs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Width of a dominance time bin in seconds.  Must be positive;
    /// `f64::INFINITY` puts all times in one bin.
    pub time_bin_secs: f64,
    /// Lowest resource a retained state may hold.  Reaching it exactly is
    /// allowed.
    pub dry_floor: f64,
    /// Acceptable total flight duration, relative to the request start.
    pub arrival_window: Option<ArrivalWindow>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_bin_secs:  100.0,
            dry_floor:      0.0,
            arrival_window: None,
        }
    }
}

impl SolverConfig {
    /// Express a maximum burn as a floor: `initial - max_burn`.
    pub fn with_max_burn(mut self, initial_resource: f64, max_burn: f64) -> Self {
        self.dry_floor = initial_resource - max_burn;
        self
    }

    pub fn with_arrival_window(mut self, window: ArrivalWindow) -> Self {
        self.arrival_window = Some(window);
        self
    }

    pub fn with_time_bin(mut self, time_bin_secs: f64) -> Self {
        self.time_bin_secs = time_bin_secs;
        self
    }

    pub fn validate(&self) -> SolverResult<()> {
        if !(self.time_bin_secs > 0.0) {
            return Err(SolverError::InvalidConfig(format!(
                "time_bin_secs must be positive, got {}",
                self.time_bin_secs
            )));
        }
        if !self.dry_floor.is_finite() {
            return Err(SolverError::InvalidConfig(format!(
                "dry_floor must be finite, got {}",
                self.dry_floor
            )));
        }
        if let Some(w) = self.arrival_window {
            if !w.is_valid() {
                return Err(SolverError::InvalidConfig(format!("invalid arrival window {w}")));
            }
        }
        Ok(())
    }
}

// ── SolveRequest ──────────────────────────────────────────────────────────────

/// One search: where from, where to, with how much resource, starting when.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolveRequest {
    pub start:            NodeId,
    pub goal:             NodeId,
    pub initial_resource: f64,
    /// Absolute start time in seconds.
    pub start_time_secs:  f64,
}

impl SolveRequest {
    pub fn new(start: NodeId, goal: NodeId, initial_resource: f64, start_time_secs: f64) -> Self {
        Self { start, goal, initial_resource, start_time_secs }
    }

    /// Origin to destination of a ring lattice, or `None` if `lattice` was
    /// not built from waypoints.
    pub fn across(lattice: &Lattice, initial_resource: f64, start_time_secs: f64) -> Option<Self> {
        let shape = lattice.shape()?;
        Some(Self::new(shape.origin(), shape.destination(), initial_resource, start_time_secs))
    }

    pub(crate) fn validate(&self, lattice: &Lattice, config: &SolverConfig) -> SolverResult<()> {
        for node in [self.start, self.goal] {
            if !lattice.contains(node) {
                return Err(SolverError::NodeNotFound(node));
            }
        }
        if !self.start_time_secs.is_finite() {
            return Err(SolverError::InvalidRequest(format!(
                "start time must be finite, got {}",
                self.start_time_secs
            )));
        }
        if !(self.initial_resource >= config.dry_floor) || !self.initial_resource.is_finite() {
            return Err(SolverError::InvalidRequest(format!(
                "initial resource {} is below the dry floor {}",
                self.initial_resource, config.dry_floor
            )));
        }
        Ok(())
    }
}
