//! `fp-batch`: start-time sweeps for the rust_fp route solver.
//!
//! [`BatchRunner`] solves the same origin/destination pair for a list of
//! start hours and replays each found path to report fuel burn and flight
//! time.  [`summarize`] folds the results into a [`BatchSummary`].
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Scenarios run on the Rayon pool; results keep input order |

pub mod error;
pub mod observer;
pub mod runner;
pub mod summary;


pub use error::{BatchError, BatchResult};
pub use observer::{BatchObserver, NoopBatchObserver};
pub use runner::{BatchRunner, ScenarioResult, ScenarioStatus};
pub use summary::{BatchSummary, summarize};
