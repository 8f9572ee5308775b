//! `fp-output`: output writers for the rust_fp route solver.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                                 |
//! |-----------|---------|---------------------------------------------------------------|
//! | *(none)*  | CSV     | `scenarios.csv`, `search_history.csv`, `solution_path.csv`    |
//! | `sqlite`  | SQLite  | `output.db`                                                   |
//!
//! Both implement [`OutputWriter`].  [`SearchHistoryObserver`] drives a
//! writer from a single search (`fp_solver::SearchObserver`), and
//! [`BatchOutputObserver`] from a start-time sweep (`fp_batch::BatchObserver`).
//!
//! # Usage
//!
//! ```rust,ignore
//! use fp_output::{BatchOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = BatchOutputObserver::new(writer);
//! runner.run(&hours, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     log::error!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{BatchOutputObserver, SearchHistoryObserver};
pub use row::{ExpansionRow, ScenarioRow, WaypointRow, path_rows};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
