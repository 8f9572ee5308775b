//! `fp-solver`: constrained, time-expanded shortest path over a waypoint
//! lattice.
//!
//! Edge costs depend on *when* an edge is flown and on the resource left at
//! that point, so plain Dijkstra over nodes is unsound and a search over the
//! full `(node, time, resource)` space is intractable.  [`TimeExpandedSolver`]
//! explores that space implicitly and prunes it with Pareto dominance on
//! `(cost, resource)` per `(node, time bin)`.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`config`]   | `SolverConfig`, `SolveRequest`                           |
//! | [`solver`]   | `PathSolver` trait, `TimeExpandedSolver`                 |
//! | [`dijkstra`] | `StaticDijkstra` baseline                                |
//! | [`label`]    | `Label`, `LabelStore` (Pareto sets per node and bin)     |
//! | [`frontier`] | `Frontier` min-cost queue, FIFO among equal costs        |
//! | [`observer`] | `SearchObserver`, `PruneReason`, `NoopObserver`          |
//! | [`outcome`]  | `SolveOutcome`, `SearchState`, `SearchStats`             |
//! | [`replay`]   | `replay_path`, `PathProfile`                             |
//! | [`error`]    | `SolverError`, `SolverResult<T>`                         |
//!
//! # Example
//!
//! ```
//! use fp_core::{GeoPoint, NodeId};
//! use fp_lattice::LatticeBuilder;
//! use fp_oracle::{EdgeCost, EdgeQuery};
//! use fp_solver::{PathSolver, SolveRequest, SolverConfig, TimeExpandedSolver};
//!
//! let mut b = LatticeBuilder::new();
//! let a = b.add_node(GeoPoint::new(0.0, 0.0));
//! let c = b.add_node(GeoPoint::new(0.0, 1.0));
//! b.add_edge(a, c);
//! let lattice = b.build();
//!
//! let oracle = |_: EdgeQuery| EdgeCost::new(10.0, 0.5, 42.0);
//! let solver = TimeExpandedSolver::new(SolverConfig::default());
//! let out = solver.solve(&lattice, &SolveRequest::new(a, c, 100.0, 0.0), &oracle).unwrap();
//! assert_eq!(out.path, [NodeId(0), NodeId(1)]);
//! assert_eq!(out.total_cost, 42.0);
//! ```

pub mod config;
pub mod dijkstra;
pub mod error;
pub mod frontier;
pub mod label;
pub mod observer;
pub mod outcome;
pub mod replay;
pub mod solver;


pub use config::{SolveRequest, SolverConfig};
pub use dijkstra::StaticDijkstra;
pub use error::{SolverError, SolverResult};
pub use label::{Label, LabelStore};
pub use observer::{NoopObserver, PruneReason, SearchObserver};
pub use outcome::{SearchState, SearchStats, SolveOutcome};
pub use replay::{LegProfile, PathProfile, replay_path};
pub use solver::{PathSolver, TimeExpandedSolver};
