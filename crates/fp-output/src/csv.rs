//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `scenarios.csv`
//! - `search_history.csv`
//! - `solution_path.csv`
//!
//! Missing values (cost of a scenario without a path, ...) are empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ExpansionRow, OutputResult, ScenarioRow, WaypointRow};

fn opt(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

/// Writes solver output to three CSV files.
pub struct CsvWriter {
    scenarios: Writer<File>,
    history:   Writer<File>,
    path:      Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut scenarios = Writer::from_path(dir.join("scenarios.csv"))?;
        scenarios.write_record([
            "start_hour",
            "status",
            "total_cost",
            "fuel_burned_kg",
            "flight_time_h",
            "states_expanded",
            "runtime_ms",
        ])?;

        let mut history = Writer::from_path(dir.join("search_history.csv"))?;
        history.write_record(["seq", "node", "cost", "time_secs", "resource"])?;

        let mut path = Writer::from_path(dir.join("solution_path.csv"))?;
        path.write_record(["seq", "node", "lat", "lon"])?;

        Ok(Self { scenarios, history, path, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_scenarios(&mut self, rows: &[ScenarioRow]) -> OutputResult<()> {
        for row in rows {
            self.scenarios.write_record(&[
                row.start_hour.to_string(),
                row.status.to_owned(),
                opt(row.total_cost),
                opt(row.fuel_burned_kg),
                opt(row.flight_time_h),
                row.states_expanded.to_string(),
                format!("{:.3}", row.runtime_ms),
            ])?;
        }
        Ok(())
    }

    fn write_expansions(&mut self, rows: &[ExpansionRow]) -> OutputResult<()> {
        for row in rows {
            self.history.write_record(&[
                row.seq.to_string(),
                row.node.to_string(),
                row.cost.to_string(),
                row.time_secs.to_string(),
                row.resource.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_path(&mut self, rows: &[WaypointRow]) -> OutputResult<()> {
        for row in rows {
            self.path.write_record(&[
                row.seq.to_string(),
                row.node.to_string(),
                row.lat.to_string(),
                row.lon.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.scenarios.flush()?;
        self.history.flush()?;
        self.path.flush()?;
        Ok(())
    }
}
