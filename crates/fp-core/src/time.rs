//! Search time model.
//!
//! # Units
//!
//! The solver tracks absolute time in **seconds** (`f64`).  Cost oracles
//! speak **hours**, matching the resolution of the weather tables they
//! consult.  The two helpers [`secs_to_hours`] and [`hours_to_secs`] are the
//! only place the conversion happens.
//!
//! # Time bins
//!
//! Continuous time is bucketed for dominance pruning:
//!
//!   bin = floor(t / bin_size)
//!
//! An infinite `bin_size` collapses every time into bin 0, which degenerates
//! the search to per-node (cost, resource) dominance.

use std::fmt;

const SECS_PER_HOUR: f64 = 3_600.0;

#[inline]
pub fn secs_to_hours(secs: f64) -> f64 {
    secs / SECS_PER_HOUR
}

#[inline]
pub fn hours_to_secs(hours: f64) -> f64 {
    hours * SECS_PER_HOUR
}

// ── TimeBin ───────────────────────────────────────────────────────────────────

/// Index of a discretised time bucket.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeBin(pub i64);

impl fmt::Display for TimeBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bin{}", self.0)
    }
}

/// Bucket `time_secs` into a bin of width `bin_secs`.
///
/// `bin_secs` must be positive; `f64::INFINITY` maps every finite time to
/// bin 0.
#[inline]
pub fn time_bin(time_secs: f64, bin_secs: f64) -> TimeBin {
    debug_assert!(bin_secs > 0.0, "bin width must be positive");
    let bin = (time_secs / bin_secs).floor();
    // -0.0 and 0.0 must land in the same bin.
    TimeBin(if bin == 0.0 { 0 } else { bin as i64 })
}

// ── ArrivalWindow ─────────────────────────────────────────────────────────────

/// Acceptable total elapsed time at the destination, in seconds relative to
/// the start of the search.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalWindow {
    pub min_secs: f64,
    pub max_secs: f64,
}

/// An [`ArrivalWindow`] resolved against a concrete start time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AbsoluteWindow {
    pub earliest_secs: f64,
    pub latest_secs: f64,
}

impl ArrivalWindow {
    pub fn new(min_secs: f64, max_secs: f64) -> Self {
        Self { min_secs, max_secs }
    }

    /// Convenience constructor for flight-duration windows in hours.
    pub fn from_hours(min_hours: f64, max_hours: f64) -> Self {
        Self::new(hours_to_secs(min_hours), hours_to_secs(max_hours))
    }

    /// `true` when both bounds are finite, non-negative and ordered.
    pub fn is_valid(&self) -> bool {
        self.min_secs.is_finite()
            && self.max_secs.is_finite()
            && self.min_secs >= 0.0
            && self.min_secs <= self.max_secs
    }

    /// Shift the window onto the absolute time axis.
    #[inline]
    pub fn resolve(&self, start_secs: f64) -> AbsoluteWindow {
        AbsoluteWindow {
            earliest_secs: start_secs + self.min_secs,
            latest_secs:   start_secs + self.max_secs,
        }
    }

    /// `true` if an elapsed duration (not an absolute time) lies inside the
    /// window, bounds inclusive.
    #[inline]
    pub fn contains_elapsed(&self, elapsed_secs: f64) -> bool {
        (self.min_secs..=self.max_secs).contains(&elapsed_secs)
    }
}

impl AbsoluteWindow {
    #[inline]
    pub fn is_too_early(&self, time_secs: f64) -> bool {
        time_secs < self.earliest_secs
    }

    #[inline]
    pub fn is_too_late(&self, time_secs: f64) -> bool {
        time_secs > self.latest_secs
    }
}

impl fmt::Display for ArrivalWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4}h, {:.4}h]",
            secs_to_hours(self.min_secs),
            secs_to_hours(self.max_secs)
        )
    }
}
