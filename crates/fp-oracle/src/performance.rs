//! Aircraft performance table: gross weight → cruise fuel flow.
//!
//! # CSV format
//!
//! ```csv
//! weight_kg,fuel_flow_kg_h
//! 180000,5900
//! 220000,6800
//! 260000,7900
//! ```
//!
//! Rows may come in any order.  Weights between two rows are interpolated
//! linearly; weights outside the table extrapolate the first or last
//! segment.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{OracleError, OracleResult};

#[derive(Deserialize)]
struct PerformanceRecord {
    weight_kg:      f64,
    fuel_flow_kg_h: f64,
}

/// Piecewise-linear fuel flow as a function of gross weight.
#[derive(Clone, Debug)]
pub struct PerformanceTable {
    /// `(weight_kg, fuel_flow_kg_h)`, strictly ascending by weight.
    points: Vec<(f64, f64)>,
}

impl PerformanceTable {
    /// Build from unordered `(weight_kg, fuel_flow_kg_h)` points.
    ///
    /// Needs at least two points, all finite, with distinct weights.
    pub fn new(mut points: Vec<(f64, f64)>) -> OracleResult<Self> {
        if points.len() < 2 {
            return Err(OracleError::InvalidTable(format!(
                "performance table needs at least 2 points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|(w, ff)| !w.is_finite() || !ff.is_finite()) {
            return Err(OracleError::InvalidTable("performance table has non-finite entries".into()));
        }
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(w) = points.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(OracleError::InvalidTable(format!("duplicate weight {} kg", w[0].0)));
        }
        Ok(Self { points })
    }

    pub fn from_csv(path: &Path) -> OracleResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> OracleResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let points = rdr
            .deserialize::<PerformanceRecord>()
            .map(|r| r.map(|r| (r.weight_kg, r.fuel_flow_kg_h)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(points)
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Fuel flow in kg/h at `weight_kg`.
    pub fn fuel_flow(&self, weight_kg: f64) -> f64 {
        let n = self.points.len();
        // Segment [i, i+1] that contains (or is nearest to) the weight.
        let i = self
            .points
            .partition_point(|&(w, _)| w <= weight_kg)
            .saturating_sub(1)
            .min(n - 2);
        let (wa, fa) = self.points[i];
        let (wb, fb) = self.points[i + 1];
        fa + (weight_kg - wa) * (fb - fa) / (wb - wa)
    }
}
