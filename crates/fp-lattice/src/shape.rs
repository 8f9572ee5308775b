//! Ring/angle addressing.
//!
//! The mapping between `(ring, angle)` and `NodeId` is a plain bijection on
//! the interior ids; origin and destination sit at the two ends of the id
//! range.  Everything that needs to know "where" a node is in the lattice
//! goes through this module instead of repeating the arithmetic.

use fp_core::NodeId;

use crate::{LatticeError, LatticeResult};

/// Id of the interior node at `(ring, angle)`.
#[inline]
pub fn ring_node_id(ring: u32, angle: u32, angle_count: u32) -> NodeId {
    NodeId(1 + ring * angle_count + angle)
}

/// `(ring, angle)` of an interior node id.  Inverse of [`ring_node_id`] for
/// every id `>= 1`; callers must exclude origin and destination themselves
/// (or use [`LatticeShape::role`], which does).
#[inline]
pub fn ring_address(id: NodeId, angle_count: u32) -> (u32, u32) {
    debug_assert!(id.0 >= 1 && angle_count > 0);
    let offset = id.0 - 1;
    (offset / angle_count, offset % angle_count)
}

/// Where a node sits in the lattice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeRole {
    Origin,
    Ring { ring: u32, angle: u32 },
    Destination,
}

/// The *actual* dimensions of a generated lattice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeShape {
    pub ring_count: u32,
    pub angle_count: u32,
}

impl LatticeShape {
    pub fn new(ring_count: u32, angle_count: u32) -> Self {
        Self { ring_count, angle_count }
    }

    /// Recover the shape from the destination's id: `(max_id - 1) / angles`.
    pub fn from_max_id(max_id: NodeId, angle_count: u32) -> LatticeResult<Self> {
        let node_count = max_id.index() + 1;
        if angle_count == 0 || max_id.0 == 0 || (max_id.0 - 1) % angle_count != 0 {
            return Err(LatticeError::InvalidShape { node_count, angle_count });
        }
        Ok(Self::new((max_id.0 - 1) / angle_count, angle_count))
    }

    /// Total node count including origin and destination.
    #[inline]
    pub fn node_count(&self) -> usize {
        2 + self.ring_count as usize * self.angle_count as usize
    }

    #[inline]
    pub fn origin(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn destination(&self) -> NodeId {
        NodeId(1 + self.ring_count * self.angle_count)
    }

    /// Id of `(ring, angle)`, or `None` if either index is out of range.
    pub fn node_id(&self, ring: u32, angle: u32) -> Option<NodeId> {
        (ring < self.ring_count && angle < self.angle_count)
            .then(|| ring_node_id(ring, angle, self.angle_count))
    }

    /// Classify `id`; `None` if it lies outside the lattice.
    pub fn role(&self, id: NodeId) -> Option<NodeRole> {
        let dest = self.destination();
        if id == self.origin() {
            Some(NodeRole::Origin)
        } else if id == dest {
            Some(NodeRole::Destination)
        } else if id < dest {
            let (ring, angle) = ring_address(id, self.angle_count);
            Some(NodeRole::Ring { ring, angle })
        } else {
            None
        }
    }

    /// Ids of every node in `ring`, in ascending angle order.
    pub fn ring_nodes(&self, ring: u32) -> impl Iterator<Item = NodeId> + '_ {
        let count = if ring < self.ring_count { self.angle_count } else { 0 };
        (0..count).map(move |angle| ring_node_id(ring, angle, self.angle_count))
    }
}
