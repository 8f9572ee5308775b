//! Lattice graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Edges carry no weight.  Traversal cost depends on the time and remaining
//! resource at which an edge is flown, so it is asked of the cost oracle at
//! search time instead of being stored here.

use fp_core::{EdgeId, GeoPoint, NodeId};

use crate::LatticeShape;

// ── Lattice ───────────────────────────────────────────────────────────────────

/// Directed waypoint graph in CSR format.
///
/// Immutable once built and `Sync`, so one lattice can be shared by any
/// number of concurrent searches.  Construct through [`LatticeBuilder`] or
/// [`build_adjacency`](crate::build_adjacency).
pub struct Lattice {
    /// Coordinate of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Ring/angle dimensions when the lattice came from `build_adjacency`.
    shape: Option<LatticeShape>,
}

impl Lattice {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    /// Coordinate of `node`, or `None` if it is not part of the lattice.
    #[inline]
    pub fn position(&self, node: NodeId) -> Option<GeoPoint> {
        self.node_pos.get(node.index()).copied()
    }

    /// Actual ring/angle dimensions, if this is a ring lattice.
    pub fn shape(&self) -> Option<LatticeShape> {
        self.shape
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range; no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Successor nodes of `node`, in insertion order.
    #[inline]
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges(node).map(|e| self.edge_to[e.index()])
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// `true` if the directed edge `from → to` exists.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.contains(from) && self.successors(from).any(|v| v == to)
    }
}

// ── LatticeBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Lattice`] incrementally, then call [`build`](Self::build).
///
/// Accepts nodes and directed edges in any order.  `build()` sorts edges by
/// source node (stable, so each node's successors keep insertion order),
/// and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use fp_core::GeoPoint;
/// use fp_lattice::LatticeBuilder;
///
/// let mut b = LatticeBuilder::new();
/// let a = b.add_node(GeoPoint::new(52.3, 4.8));
/// let c = b.add_node(GeoPoint::new(52.6, 1.9));
/// b.add_edge(a, c);
/// let lattice = b.build();
/// assert_eq!(lattice.node_count(), 2);
/// assert_eq!(lattice.edge_count(), 1);
/// ```
pub struct LatticeBuilder {
    nodes:     Vec<GeoPoint>,
    raw_edges: Vec<(NodeId, NodeId)>,
}

impl LatticeBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a waypoint and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge from `from` to `to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        debug_assert!(from.index() < self.nodes.len() && to.index() < self.nodes.len());
        self.raw_edges.push((from, to));
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`Lattice`] with no ring shape.
    pub fn build(self) -> Lattice {
        self.build_inner(None)
    }

    pub(crate) fn build_with_shape(self, shape: LatticeShape) -> Lattice {
        self.build_inner(Some(shape))
    }

    fn build_inner(self, shape: Option<LatticeShape>) -> Lattice {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        raw.sort_by_key(|&(from, _)| from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|&(from, _)| from).collect();
        let edge_to:   Vec<NodeId> = raw.iter().map(|&(_, to)| to).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _) in &raw {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        Lattice {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            shape,
        }
    }
}

impl Default for LatticeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
