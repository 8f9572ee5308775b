//! `fp-core`: foundational types for the `rust_fp` route solver.
//!
//! This crate is a dependency of every other `fp-*` crate.  It intentionally
//! has no `fp-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `EdgeId`                                        |
//! | [`geo`]     | `GeoPoint`, great-circle distance, bearing, destination   |
//! | [`time`]    | seconds ⇄ hours, `time_bin`, `ArrivalWindow`              |
//! | [`rng`]     | `SeededRng` for reproducible synthetic inputs             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
pub use rng::SeededRng;
pub use time::{AbsoluteWindow, ArrivalWindow, TimeBin, hours_to_secs, secs_to_hours, time_bin};
