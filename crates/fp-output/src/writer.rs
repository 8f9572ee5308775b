//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ExpansionRow, OutputResult, ScenarioRow, WaypointRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Observers store write errors internally; retrieve them with
/// `take_error` on the observer.
pub trait OutputWriter {
    /// Write a batch of scenario results.
    fn write_scenarios(&mut self, rows: &[ScenarioRow]) -> OutputResult<()>;

    /// Append popped states to the search history.
    fn write_expansions(&mut self, rows: &[ExpansionRow]) -> OutputResult<()>;

    /// Write the waypoints of a solution path.
    fn write_path(&mut self, rows: &[WaypointRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
