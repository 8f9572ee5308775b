//! Waypoint generation.
//!
//! Rings are placed at `(ring + 1) * ring_spacing_m` along the initial
//! great-circle bearing from origin to destination.  Each ring fans out over
//! an angular spread derived from a lateral half-width:
//!
//! ```text
//! spread = atan(half_width / ring_distance)
//! bearing(angle) = initial_bearing − spread + angle · 2·spread / (angle_count − 1)
//! ```
//!
//! Generation stops at the first ring whose distance reaches the
//! destination, so the returned [`Waypoints`] may hold fewer rings than
//! requested.

use std::f64::consts::PI;

use log::debug;

use fp_core::{GeoPoint, NodeId};

use crate::{Lattice, LatticeError, LatticeResult, LatticeShape, build_adjacency};

/// Rings closer than this to the origin use a fixed 90° spread instead of
/// the `atan` conversion.
const NEAR_ORIGIN_M: f64 = 1_000.0;

// ── WidthProfile ──────────────────────────────────────────────────────────────

/// Lateral width of the corridor as a function of ring index.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum WidthProfile {
    /// Same half-width on every ring.
    Constant { half_width_m: f64 },
    /// `max_width · sin(π · ring / (rings − 1)) + base_width`: narrow at both
    /// ends, widest mid-route.
    SineBulge { max_width_m: f64, base_width_m: f64 },
}

impl WidthProfile {
    /// Half-width in metres of ring `ring` out of `ring_count` requested.
    pub fn half_width_m(&self, ring: u32, ring_count: u32) -> f64 {
        match *self {
            WidthProfile::Constant { half_width_m } => half_width_m,
            WidthProfile::SineBulge { max_width_m, base_width_m } => {
                let progress = if ring_count > 1 {
                    ring as f64 / (ring_count - 1) as f64
                } else {
                    0.0
                };
                (max_width_m * (PI * progress).sin() + base_width_m) / 2.0
            }
        }
    }

    fn is_valid(&self) -> bool {
        match *self {
            WidthProfile::Constant { half_width_m } => half_width_m.is_finite() && half_width_m >= 0.0,
            WidthProfile::SineBulge { max_width_m, base_width_m } => {
                max_width_m.is_finite()
                    && base_width_m.is_finite()
                    && max_width_m >= 0.0
                    && base_width_m >= 0.0
            }
        }
    }
}

// ── LatticeParams ─────────────────────────────────────────────────────────────

/// Requested lattice dimensions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeParams {
    /// Upper bound on rings; fewer are generated if the destination is closer.
    pub ring_count: u32,
    /// Bearings sampled per ring.
    pub angle_count: u32,
    /// Radial distance between consecutive rings, metres.
    pub ring_spacing_m: f64,
    pub width: WidthProfile,
}

impl Default for LatticeParams {
    /// 29 rings × 21 angles at 200 km spacing with an 1800 km sine bulge on a
    /// 40 km base, sized for a transatlantic corridor.
    fn default() -> Self {
        Self {
            ring_count:     29,
            angle_count:    21,
            ring_spacing_m: 200_000.0,
            width: WidthProfile::SineBulge {
                max_width_m:  1_800_000.0,
                base_width_m: 40_000.0,
            },
        }
    }
}

impl LatticeParams {
    pub fn validate(&self) -> LatticeResult<()> {
        if self.angle_count == 0 {
            return Err(LatticeError::InvalidParams("angle_count must be at least 1".into()));
        }
        if !(self.ring_spacing_m.is_finite() && self.ring_spacing_m > 0.0) {
            return Err(LatticeError::InvalidParams(format!(
                "ring_spacing_m must be positive, got {}",
                self.ring_spacing_m
            )));
        }
        if !self.width.is_valid() {
            return Err(LatticeError::InvalidParams(format!(
                "width profile must be finite and non-negative: {:?}",
                self.width
            )));
        }
        Ok(())
    }
}

// ── Waypoints ─────────────────────────────────────────────────────────────────

/// Generated waypoint coordinates in node-id order.
#[derive(Clone, Debug)]
pub struct Waypoints {
    /// `positions[id]` is the coordinate of `NodeId(id)`.
    pub positions: Vec<GeoPoint>,
    pub angle_count: u32,
}

impl Waypoints {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The largest node id, i.e. the destination.
    pub fn max_id(&self) -> NodeId {
        NodeId(self.positions.len().saturating_sub(1) as u32)
    }

    /// Actual dimensions, derived from the id range.
    pub fn shape(&self) -> LatticeResult<LatticeShape> {
        LatticeShape::from_max_id(self.max_id(), self.angle_count)
    }

    /// Wire the waypoints into a [`Lattice`] with [`build_adjacency`].
    pub fn build_lattice(&self) -> LatticeResult<Lattice> {
        build_adjacency(&self.positions, self.angle_count)
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Angular half-spread in degrees for a ring at `distance_m`.
pub(crate) fn angular_spread_deg(half_width_m: f64, distance_m: f64) -> f64 {
    if distance_m < NEAR_ORIGIN_M {
        90.0
    } else {
        (half_width_m / distance_m).atan().to_degrees()
    }
}

/// Bearing offset of sample `angle` across `[-spread, +spread]`.  A single
/// sample sits on the initial bearing.
pub(crate) fn angle_offset_deg(angle: u32, angle_count: u32, spread_deg: f64) -> f64 {
    if angle_count <= 1 {
        return 0.0;
    }
    let step = 2.0 * spread_deg / (angle_count - 1) as f64;
    -spread_deg + angle as f64 * step
}

/// Generate waypoints between `origin` and `destination`.
///
/// `NodeId(0)` is the origin and the last id the destination; both keep the
/// caller's exact coordinates.
pub fn generate(
    origin: GeoPoint,
    destination: GeoPoint,
    params: &LatticeParams,
) -> LatticeResult<Waypoints> {
    params.validate()?;

    let total_m = origin.distance_m(destination);
    let initial_bearing = origin.initial_bearing_deg(destination);

    let capacity = 2 + params.ring_count as usize * params.angle_count as usize;
    let mut positions = Vec::with_capacity(capacity);
    positions.push(origin);

    let mut rings = 0u32;
    for ring in 0..params.ring_count {
        let ring_distance_m = (ring + 1) as f64 * params.ring_spacing_m;
        if ring_distance_m >= total_m {
            break;
        }

        let half_width_m = params.width.half_width_m(ring, params.ring_count);
        let spread = angular_spread_deg(half_width_m, ring_distance_m);

        for angle in 0..params.angle_count {
            let bearing = initial_bearing + angle_offset_deg(angle, params.angle_count, spread);
            positions.push(origin.destination(bearing, ring_distance_m));
        }
        rings += 1;
    }

    positions.push(destination);

    if rings < params.ring_count {
        debug!(
            "lattice stopped after {rings} of {} rings ({:.0} km route, {:.0} km spacing)",
            params.ring_count,
            total_m / 1_000.0,
            params.ring_spacing_m / 1_000.0
        );
    }

    Ok(Waypoints { positions, angle_count: params.angle_count })
}
