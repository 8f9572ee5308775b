//! `fp-lattice`: waypoint lattice between an origin and a destination.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`shape`]     | `LatticeShape`, `NodeRole`, `(ring, angle) ⇄ id` helpers  |
//! | [`generate`]  | `LatticeParams`, `WidthProfile`, `generate`, `Waypoints`  |
//! | [`adjacency`] | `build_adjacency` (ring-to-ring forward connectivity)     |
//! | [`lattice`]   | `Lattice` (CSR), `LatticeBuilder`                         |
//! | [`error`]     | `LatticeError`, `LatticeResult<T>`                        |
//!
//! # Node-id convention
//!
//! ```text
//! 0                                  origin
//! 1 + ring * angle_count + angle     interior waypoint
//! 1 + ring_count * angle_count       destination (always the max id)
//! ```
//!
//! Generation stops early when a ring would reach the destination, so the
//! ring count must always be recovered from the id range
//! ([`LatticeShape::from_max_id`]) rather than taken from the request.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on parameter types.        |

pub mod adjacency;
pub mod error;
pub mod generate;
pub mod lattice;
pub mod shape;

#[cfg(test)]
mod tests;

pub use adjacency::build_adjacency;
pub use error::{LatticeError, LatticeResult};
pub use generate::{LatticeParams, WidthProfile, Waypoints, generate};
pub use lattice::{Lattice, LatticeBuilder};
pub use shape::{LatticeShape, NodeRole, ring_address, ring_node_id};
