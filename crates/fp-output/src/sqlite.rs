//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `scenarios`, `search_history` and `solution_path`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ExpansionRow, OutputResult, ScenarioRow, WaypointRow};

/// Writes solver output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS scenarios (
                 start_hour      REAL    NOT NULL,
                 status          TEXT    NOT NULL,
                 total_cost      REAL,
                 fuel_burned_kg  REAL,
                 flight_time_h   REAL,
                 states_expanded INTEGER NOT NULL,
                 runtime_ms      REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS search_history (
                 seq       INTEGER NOT NULL,
                 node      INTEGER NOT NULL,
                 cost      REAL    NOT NULL,
                 time_secs REAL    NOT NULL,
                 resource  REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS solution_path (
                 seq  INTEGER NOT NULL,
                 node INTEGER NOT NULL,
                 lat  REAL    NOT NULL,
                 lon  REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_scenarios(&mut self, rows: &[ScenarioRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO scenarios \
                 (start_hour, status, total_cost, fuel_burned_kg, flight_time_h, states_expanded, runtime_ms) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.start_hour,
                    row.status,
                    row.total_cost,
                    row.fuel_burned_kg,
                    row.flight_time_h,
                    row.states_expanded as i64,
                    row.runtime_ms,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_expansions(&mut self, rows: &[ExpansionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO search_history (seq, node, cost, time_secs, resource) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.seq as i64,
                    row.node,
                    row.cost,
                    row.time_secs,
                    row.resource,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_path(&mut self, rows: &[WaypointRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO solution_path (seq, node, lat, lon) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.seq, row.node, row.lat, row.lon])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
