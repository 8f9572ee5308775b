//! `fp-oracle`: edge cost oracles for the rust_fp route solver.
//!
//! The solver treats edge costs as an opaque function of (edge, remaining
//! resource, absolute time).  This crate defines that contract
//! ([`CostOracle`]) and ships one concrete implementation,
//! [`FlightCostModel`], so the workspace runs end to end.
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`oracle`]      | `CostOracle`, `EdgeQuery`, `EdgeCost`                  |
//! | [`wind`]        | `WindField`, `Wind` (CSV, synthetic, calm)             |
//! | [`performance`] | `PerformanceTable` (weight → fuel flow)               |
//! | [`ansp`]        | `AnspRegion`, `ansp_cost`                              |
//! | [`model`]       | `AircraftParams`, `FlightCostModel`                    |
//! | [`error`]       | `OracleError`, `OracleResult<T>`                       |

pub mod ansp;
pub mod error;
pub mod model;
pub mod oracle;
pub mod performance;
pub mod wind;

#[cfg(test)]
mod tests;

pub use ansp::{AnspRegion, ansp_cost};
pub use error::{OracleError, OracleResult};
pub use model::{AircraftParams, FlightCostModel, isa_temperature_k};
pub use oracle::{CostOracle, EdgeCost, EdgeQuery};
pub use performance::PerformanceTable;
pub use wind::{Wind, WindField};
