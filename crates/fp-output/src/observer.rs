//! Observers that bridge the solver and batch callbacks to an `OutputWriter`.
//!
//! Both store the first write error internally because observer methods have
//! no return value.  Check [`take_error`](SearchHistoryObserver::take_error)
//! once the search or the sweep returns.

use fp_batch::{BatchObserver, ScenarioResult};
use fp_lattice::Lattice;
use fp_solver::{SearchObserver, SearchState, SolveOutcome, SolveRequest};

use crate::row::{ExpansionRow, ScenarioRow, path_rows};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

const FLUSH_ROWS: usize = 4_096;

fn keep_first(slot: &mut Option<OutputError>, result: OutputResult<()>) {
    if let Err(e) = result {
        if slot.is_none() {
            *slot = Some(e);
        }
    }
}

// ── SearchHistoryObserver ─────────────────────────────────────────────────────

/// A [`SearchObserver`] that records every popped state and, when a path is
/// found, its waypoints.
///
/// Expansions are buffered and written in chunks.  The writer is not
/// finished at the end of the search so the same writer can carry on into a
/// batch; call [`into_writer`](Self::into_writer) and `finish` it yourself.
pub struct SearchHistoryObserver<'a, W: OutputWriter> {
    writer:     W,
    lattice:    &'a Lattice,
    buffer:     Vec<ExpansionRow>,
    seq:        u64,
    last_error: Option<OutputError>,
}

impl<'a, W: OutputWriter> SearchHistoryObserver<'a, W> {
    /// `lattice` resolves path nodes to coordinates.
    pub fn new(writer: W, lattice: &'a Lattice) -> Self {
        Self {
            writer,
            lattice,
            buffer:     Vec::with_capacity(FLUSH_ROWS),
            seq:        0,
            last_error: None,
        }
    }

    /// Number of pops recorded so far.
    pub fn recorded(&self) -> u64 {
        self.seq
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.  Buffered expansions are written first.
    pub fn into_writer(mut self) -> W {
        self.flush();
        self.writer
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let result = self.writer.write_expansions(&self.buffer);
        self.buffer.clear();
        keep_first(&mut self.last_error, result);
    }
}

impl<W: OutputWriter> SearchObserver for SearchHistoryObserver<'_, W> {
    fn on_search_start(&mut self, _request: &SolveRequest) {
        self.flush();
    }

    fn on_pop(&mut self, state: &SearchState) {
        self.seq += 1;
        self.buffer.push(ExpansionRow::new(self.seq, state));
        if self.buffer.len() >= FLUSH_ROWS {
            self.flush();
        }
    }

    fn on_search_end(&mut self, outcome: &SolveOutcome) {
        self.flush();
        if outcome.is_found() {
            let rows = path_rows(self.lattice, &outcome.path);
            let result = self.writer.write_path(&rows);
            keep_first(&mut self.last_error, result);
        }
    }
}

// ── BatchOutputObserver ───────────────────────────────────────────────────────

/// A [`BatchObserver`] that writes one [`ScenarioRow`] per scenario and
/// finishes the writer when the batch ends.
pub struct BatchOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> BatchOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the batch returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: OutputWriter> BatchObserver for BatchOutputObserver<W> {
    fn on_scenario_end(&mut self, result: &ScenarioResult) {
        let row = ScenarioRow::from_result(result);
        let result = self.writer.write_scenarios(&[row]);
        keep_first(&mut self.last_error, result);
    }

    fn on_batch_end(&mut self, _results: &[ScenarioResult]) {
        let result = self.writer.finish();
        keep_first(&mut self.last_error, result);
    }
}
