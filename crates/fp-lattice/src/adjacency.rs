//! Ring-to-ring connectivity.
//!
//! ```text
//! origin ──► every node of ring 0
//! (r, k) ──► (r+1, k)      straight ahead
//!        ──► (r+1, k−1)    left diagonal   (k > 0)
//!        ──► (r+1, k+1)    right diagonal  (k < angle_count − 1)
//! last ring ──► destination
//! ```
//!
//! A lattice with zero rings links the origin straight to the destination.

use log::debug;

use fp_core::GeoPoint;

use crate::shape::ring_node_id;
use crate::{Lattice, LatticeBuilder, LatticeResult, LatticeShape};

/// Build the directed lattice over `positions` (as produced by
/// [`generate`](crate::generate)).
///
/// The ring count is derived from `positions.len()`, never passed in, so a
/// lattice whose generation stopped early is wired correctly.
pub fn build_adjacency(positions: &[GeoPoint], angle_count: u32) -> LatticeResult<Lattice> {
    let max_id = fp_core::NodeId(positions.len().saturating_sub(1) as u32);
    let shape = LatticeShape::from_max_id(max_id, angle_count)?;
    let rings = shape.ring_count;
    let angles = shape.angle_count;

    // Capacity hint: ring nodes have at most three successors.
    let edge_estimate = shape.node_count() * 3;
    let mut b = LatticeBuilder::with_capacity(positions.len(), edge_estimate);
    for &pos in positions {
        b.add_node(pos);
    }

    let origin = shape.origin();
    let destination = shape.destination();

    if rings == 0 {
        b.add_edge(origin, destination);
    } else {
        for k in 0..angles {
            b.add_edge(origin, ring_node_id(0, k, angles));
        }

        for r in 0..rings - 1 {
            for k in 0..angles {
                let src = ring_node_id(r, k, angles);
                b.add_edge(src, ring_node_id(r + 1, k, angles));
                if k > 0 {
                    b.add_edge(src, ring_node_id(r + 1, k - 1, angles));
                }
                if k + 1 < angles {
                    b.add_edge(src, ring_node_id(r + 1, k + 1, angles));
                }
            }
        }

        for k in 0..angles {
            b.add_edge(ring_node_id(rings - 1, k, angles), destination);
        }
    }

    let lattice = b.build_with_shape(shape);
    debug!(
        "lattice built: {} rings x {} angles, {} nodes, {} edges",
        rings,
        angles,
        lattice.node_count(),
        lattice.edge_count()
    );
    Ok(lattice)
}
