//! Per-waypoint wind field.
//!
//! # CSV format
//!
//! One row per (waypoint, hour).  Every waypoint must have a sample at every
//! hour that appears anywhere in the file.
//!
//! ```csv
//! waypoint_id,time_hours,u_speed_ms,v_speed_ms
//! 0,0,12.5,-3.1
//! 0,1,13.0,-2.8
//! 1,0,20.1,4.0
//! 1,1,19.7,3.6
//! ```
//!
//! `u` is the eastward and `v` the northward component, in m/s.
//!
//! Between sample hours the components are interpolated linearly; outside
//! the sampled range the nearest boundary sample is used.
//!
//! Samples keyed by position instead of waypoint id (a forecast grid) are
//! read with [`WindField::from_grid_reader`], which snaps every waypoint to
//! its nearest grid point through an R-tree.

use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use log::debug;
use rstar::{AABB, PointDistance, RTree, RTreeObject};
use serde::Deserialize;

use fp_core::{GeoPoint, NodeId, SeededRng};

use crate::{OracleError, OracleResult};

const MS_TO_KMH: f64 = 3.6;

// ── Wind ──────────────────────────────────────────────────────────────────────

/// Wind vector at one place and time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Wind {
    pub u_ms: f64,
    pub v_ms: f64,
}

impl Wind {
    pub fn speed_ms(&self) -> f64 {
        self.u_ms.hypot(self.v_ms)
    }

    /// Meteorological direction the wind blows *from*, degrees in `[0, 360)`.
    pub fn from_direction_deg(&self) -> f64 {
        (270.0 - self.v_ms.atan2(self.u_ms).to_degrees()).rem_euclid(360.0)
    }

    /// Along-track component for an aircraft flying `heading_deg`, km/h.
    /// Positive is a tailwind, negative a headwind.
    pub fn head_tail_kmh(&self, heading_deg: f64) -> f64 {
        let to_deg = (self.from_direction_deg() + 180.0).rem_euclid(360.0);
        let diff = (to_deg - heading_deg + 180.0).rem_euclid(360.0) - 180.0;
        self.speed_ms() * MS_TO_KMH * diff.to_radians().cos()
    }
}

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WindRecord {
    waypoint_id: u32,
    time_hours:  f64,
    u_speed_ms:  f64,
    v_speed_ms:  f64,
}

#[derive(Deserialize)]
struct GridRecord {
    time_hours: f64,
    latitude:   f64,
    longitude:  f64,
    u_speed_ms: f64,
    v_speed_ms: f64,
}

/// Sorted, deduplicated sample hours.
fn sample_hours(hours: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut times: Vec<f64> = hours.collect();
    times.sort_by(f64::total_cmp);
    times.dedup_by(|a, b| a.total_cmp(b).is_eq());
    times
}

fn hour_index(times: &[f64], hour: f64) -> OracleResult<usize> {
    times
        .binary_search_by(|x| x.total_cmp(&hour))
        .map_err(|_| OracleError::InvalidTable(format!("unindexed hour {hour}")))
}

// ── Grid index ────────────────────────────────────────────────────────────────

#[derive(Clone)]
struct GridSample {
    point: [f64; 2], // [lat, lon]
    wind:  Wind,
}

impl RTreeObject for GridSample {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for GridSample {
    /// Squared Euclidean distance in lat/lon space.  Good enough to pick the
    /// closest grid point; not a metric distance.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── WindField ─────────────────────────────────────────────────────────────────

/// Hourly wind samples for every waypoint of one lattice.
///
/// `samples[waypoint * times.len() + t]` holds the wind at `times[t]`.
#[derive(Clone, Debug)]
pub struct WindField {
    times:   Vec<f64>,
    samples: Vec<Wind>,
}

impl WindField {
    /// Build a field from a shared ascending time axis and per-waypoint rows.
    pub fn new(times: Vec<f64>, per_waypoint: Vec<Vec<Wind>>) -> OracleResult<Self> {
        if times.is_empty() {
            return Err(OracleError::InvalidTable("wind field needs at least one sample hour".into()));
        }
        if !times.iter().all(|t| t.is_finite()) || times.windows(2).any(|w| w[0] >= w[1]) {
            return Err(OracleError::InvalidTable("wind sample hours must be finite and strictly increasing".into()));
        }
        let mut samples = Vec::with_capacity(times.len() * per_waypoint.len());
        for (id, row) in per_waypoint.into_iter().enumerate() {
            if row.len() != times.len() {
                return Err(OracleError::InvalidTable(format!(
                    "waypoint {id} has {} samples, expected {}",
                    row.len(),
                    times.len()
                )));
            }
            samples.extend(row);
        }
        Ok(Self { times, samples })
    }

    /// Still air everywhere, at every time.
    pub fn calm(waypoint_count: usize) -> Self {
        Self {
            times:   vec![0.0],
            samples: vec![Wind::default(); waypoint_count],
        }
    }

    /// A reproducible westerly field over `hours + 1` hourly samples.
    ///
    /// Each waypoint gets its own jet strength and drifts hour by hour with a
    /// bounded random walk, so nearby start times see similar but not equal
    /// winds.
    pub fn synthetic(waypoint_count: usize, hours: u32, seed: u64) -> Self {
        let times: Vec<f64> = (0..=hours).map(f64::from).collect();
        let mut samples = Vec::with_capacity(times.len() * waypoint_count);

        for id in 0..waypoint_count {
            let mut rng = SeededRng::keyed(seed, id as u64);
            let mut u: f64 = rng.gen_range(5.0..45.0);
            let mut v: f64 = rng.gen_range(-10.0..10.0);
            for _ in &times {
                samples.push(Wind { u_ms: u, v_ms: v });
                u = (u + rng.gen_range(-2.0..2.0)).clamp(-10.0, 60.0);
                v = (v + rng.gen_range(-1.5..1.5)).clamp(-20.0, 20.0);
            }
        }

        Self { times, samples }
    }

    /// Load samples from a CSV file.
    pub fn from_csv(path: &Path) -> OracleResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Like [`from_csv`](Self::from_csv) but accepts any `Read` source.
    ///
    /// Waypoint ids must run contiguously from 0 and every (waypoint, hour)
    /// pair must appear exactly once.
    pub fn from_reader<R: Read>(reader: R) -> OracleResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let rows = rdr
            .deserialize::<WindRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        if rows.is_empty() {
            return Err(OracleError::InvalidTable("wind CSV has no rows".into()));
        }

        let times = sample_hours(rows.iter().map(|r| r.time_hours));

        let mut cells: BTreeMap<(u32, usize), Wind> = BTreeMap::new();
        for r in &rows {
            let t = hour_index(&times, r.time_hours)?;
            let wind = Wind { u_ms: r.u_speed_ms, v_ms: r.v_speed_ms };
            if cells.insert((r.waypoint_id, t), wind).is_some() {
                return Err(OracleError::InvalidTable(format!(
                    "duplicate sample for waypoint {} at hour {}",
                    r.waypoint_id, r.time_hours
                )));
            }
        }

        // Every key lies in [0, waypoints) x [0, hours), so a full count
        // means a full grid.
        let waypoint_count = cells.keys().map(|&(id, _)| u64::from(id)).max().map_or(0, |m| m + 1);
        let expected = waypoint_count.checked_mul(times.len() as u64);
        if expected != Some(cells.len() as u64) {
            return Err(OracleError::InvalidTable(format!(
                "wind CSV has {} samples, expected {} waypoints x {} hours",
                cells.len(),
                waypoint_count,
                times.len()
            )));
        }

        let per_waypoint: Vec<Vec<Wind>> = cells
            .into_values()
            .collect::<Vec<_>>()
            .chunks(times.len())
            .map(<[Wind]>::to_vec)
            .collect();

        debug!("wind field loaded: {} waypoints x {} hours", per_waypoint.len(), times.len());
        Self::new(times, per_waypoint)
    }

    /// Load gridded samples from a CSV file and attach them to `waypoints`.
    pub fn from_grid_csv(path: &Path, waypoints: &[GeoPoint]) -> OracleResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_grid_reader(file, waypoints)
    }

    /// Read samples keyed by position rather than waypoint id, e.g. a
    /// forecast model grid, and give each waypoint the sample of its nearest
    /// grid point at every hour.
    ///
    /// ```csv
    /// time_hours,latitude,longitude,u_speed_ms,v_speed_ms
    /// 0,52.0,4.0,12.5,-3.1
    /// 0,52.0,4.25,12.9,-3.0
    /// ```
    ///
    /// `waypoints[i]` is the position of `NodeId(i)`.  The grid may differ
    /// from hour to hour; a position may appear only once per hour.
    pub fn from_grid_reader<R: Read>(reader: R, waypoints: &[GeoPoint]) -> OracleResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let rows = rdr
            .deserialize::<GridRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        if rows.is_empty() {
            return Err(OracleError::InvalidTable("wind grid CSV has no rows".into()));
        }

        let times = sample_hours(rows.iter().map(|r| r.time_hours));

        let mut by_hour: Vec<Vec<GridSample>> = vec![Vec::new(); times.len()];
        let mut seen = HashSet::with_capacity(rows.len());
        for r in &rows {
            if !(r.latitude.is_finite() && r.longitude.is_finite()) {
                return Err(OracleError::InvalidTable(format!(
                    "non-finite grid position ({}, {})",
                    r.latitude, r.longitude
                )));
            }
            let t = hour_index(&times, r.time_hours)?;
            if !seen.insert((t, r.latitude.to_bits(), r.longitude.to_bits())) {
                return Err(OracleError::InvalidTable(format!(
                    "duplicate grid sample at ({}, {}) hour {}",
                    r.latitude, r.longitude, r.time_hours
                )));
            }
            by_hour[t].push(GridSample {
                point: [r.latitude, r.longitude],
                wind:  Wind { u_ms: r.u_speed_ms, v_ms: r.v_speed_ms },
            });
        }

        let mut per_waypoint = vec![Vec::with_capacity(times.len()); waypoints.len()];
        for samples in by_hour {
            let tree = RTree::bulk_load(samples);
            for (row, pos) in per_waypoint.iter_mut().zip(waypoints) {
                let nearest = tree
                    .nearest_neighbor(&[pos.lat, pos.lon])
                    .ok_or_else(|| OracleError::InvalidTable("empty wind grid hour".into()))?;
                row.push(nearest.wind);
            }
        }

        debug!(
            "wind grid loaded: {} samples over {} hours onto {} waypoints",
            rows.len(),
            times.len(),
            waypoints.len()
        );
        Self::new(times, per_waypoint)
    }

    pub fn waypoint_count(&self) -> usize {
        self.samples.len() / self.times.len()
    }

    /// First and last sample hour.
    pub fn time_range(&self) -> (f64, f64) {
        (self.times[0], self.times[self.times.len() - 1])
    }

    /// Wind at `waypoint` and absolute `time_hours`, clamped to the sampled
    /// range.
    pub fn wind_at(&self, waypoint: NodeId, time_hours: f64) -> OracleResult<Wind> {
        let n = self.times.len();
        if waypoint.index() >= self.waypoint_count() {
            return Err(OracleError::MissingWaypoint(waypoint));
        }
        let row = &self.samples[waypoint.index() * n..(waypoint.index() + 1) * n];

        let (first, last) = self.time_range();
        let t = time_hours.clamp(first, last);
        // Index of the last sample at or before `t`.
        let i = self.times.partition_point(|&x| x <= t).saturating_sub(1);
        if i + 1 >= n {
            return Ok(row[n - 1]);
        }

        let (t0, t1) = (self.times[i], self.times[i + 1]);
        let f = (t - t0) / (t1 - t0);
        let (a, b) = (row[i], row[i + 1]);
        Ok(Wind {
            u_ms: a.u_ms + f * (b.u_ms - a.u_ms),
            v_ms: a.v_ms + f * (b.v_ms - a.v_ms),
        })
    }
}
