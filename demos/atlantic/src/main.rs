//! atlantic: end-to-end run of the rust_fp route solver.
//!
//! Builds a ring lattice from Amsterdam to New York, prices its edges with
//! the reference flight cost model over a synthetic wind field, logs one
//! full search and then sweeps the departure hour.
//!
//! ```text
//! cargo run -p atlantic --release -- [config.json]
//! RUST_LOG=debug cargo run -p atlantic --release
//! ```
//!
//! Every field of the JSON config is optional; see [`RunConfig`].

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::{info, warn};
use serde::Deserialize;

use fp_batch::{BatchRunner, summarize};
use fp_core::{ArrivalWindow, GeoPoint, hours_to_secs, secs_to_hours};
use fp_lattice::{LatticeParams, generate};
use fp_oracle::{AircraftParams, FlightCostModel, PerformanceTable, WindField};
use fp_output::{BatchOutputObserver, OutputWriter, SearchHistoryObserver};
use fp_solver::{PathSolver, SolveRequest, SolverConfig, TimeExpandedSolver, replay_path};

// ── Constants ─────────────────────────────────────────────────────────────────

const AMSTERDAM: GeoPoint = GeoPoint { lat: 52.308056, lon: 4.764167 };
const NEW_YORK:  GeoPoint = GeoPoint { lat: 40.641766, lon: -73.780968 };

// Gross weight (kg) → fuel flow (kg/h) at FL340, long-haul twin.
const PERFORMANCE_CSV: &str = "\
weight_kg,fuel_flow_kg_h\n\
180000,5650\n\
200000,6050\n\
220000,6480\n\
240000,6930\n\
260000,7410\n\
280000,7920\n\
";

// ── Run configuration ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunConfig {
    origin:            GeoPoint,
    destination:       GeoPoint,
    lattice:           LatticeParams,
    aircraft:          AircraftParams,
    /// Take-off weight, kg.
    initial_weight_kg: f64,
    max_burn_kg:       f64,
    time_bin_secs:     f64,
    /// Acceptable flight duration in hours, `[min, max]`.
    window_hours:      Option<(f64, f64)>,
    /// Departure hour of the logged single search.
    single_start_hour: f64,
    first_start_hour:  u32,
    last_start_hour:   u32,
    /// Hourly wind samples are generated for `0..=wind_hours`.
    wind_hours:        u32,
    seed:              u64,
    /// Load winds from CSV instead of generating them.
    wind_csv:          Option<PathBuf>,
    /// Load winds from a lat/lon grid CSV; each waypoint takes its nearest
    /// grid point.
    wind_grid_csv:     Option<PathBuf>,
    performance_csv:   Option<PathBuf>,
    output_dir:        PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            origin:            AMSTERDAM,
            destination:       NEW_YORK,
            lattice:           LatticeParams::default(),
            aircraft:          AircraftParams::default(),
            initial_weight_kg: 257_743.0,
            max_burn_kg:       62_600.0,
            time_bin_secs:     100.0,
            window_hours:      Some((7.0, 7.5)),
            single_start_hour: 0.0,
            first_start_hour:  0,
            last_start_hour:   30,
            wind_hours:        39,
            seed:              42,
            wind_csv:          None,
            wind_grid_csv:     None,
            performance_csv:   None,
            output_dir:        PathBuf::from("output/atlantic"),
        }
    }
}

fn load_config() -> Result<RunConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(RunConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

#[cfg(not(feature = "sqlite"))]
fn open_writer(dir: &Path) -> Result<impl OutputWriter> {
    Ok(fp_output::CsvWriter::new(dir)?)
}

#[cfg(feature = "sqlite")]
fn open_writer(dir: &Path) -> Result<impl OutputWriter> {
    Ok(fp_output::SqliteWriter::new(dir)?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = load_config()?;
    if cfg.first_start_hour > cfg.last_start_hour {
        bail!("first_start_hour {} after last_start_hour {}", cfg.first_start_hour, cfg.last_start_hour);
    }

    println!("=== atlantic: rust_fp route solver ===");
    println!(
        "{:.3},{:.3} → {:.3},{:.3}  ({:.0} km great circle)",
        cfg.origin.lat,
        cfg.origin.lon,
        cfg.destination.lat,
        cfg.destination.lon,
        cfg.origin.distance_m(cfg.destination) / 1_000.0
    );
    println!();

    // 1. Lattice.
    let waypoints = generate(cfg.origin, cfg.destination, &cfg.lattice)?;
    let lattice = waypoints.build_lattice()?;
    let shape = waypoints.shape()?;
    println!(
        "Lattice: {} rings × {} angles, {} nodes, {} edges",
        shape.ring_count,
        shape.angle_count,
        lattice.node_count(),
        lattice.edge_count()
    );

    // 2. Cost oracle.
    let wind = match (&cfg.wind_csv, &cfg.wind_grid_csv) {
        (Some(_), Some(_)) => bail!("set at most one of wind_csv and wind_grid_csv"),
        (Some(path), None) => WindField::from_csv(path)?,
        (None, Some(path)) => WindField::from_grid_csv(path, &lattice.node_pos)?,
        (None, None) => WindField::synthetic(lattice.node_count(), cfg.wind_hours, cfg.seed),
    };
    if wind.waypoint_count() < lattice.node_count() {
        bail!("wind field covers {} waypoints, lattice has {}", wind.waypoint_count(), lattice.node_count());
    }
    let performance = match &cfg.performance_csv {
        Some(path) => PerformanceTable::from_csv(path)?,
        None => PerformanceTable::from_reader(Cursor::new(PERFORMANCE_CSV))?,
    };
    let oracle = FlightCostModel::new(cfg.aircraft.clone(), Arc::new(wind), Arc::new(performance));
    println!("TAS: {:.1} km/h at FL{:.0}", cfg.aircraft.true_airspeed_kmh(), cfg.aircraft.cruise_altitude_ft / 100.0);

    // 3. Solver.
    let mut config = SolverConfig::default()
        .with_time_bin(cfg.time_bin_secs)
        .with_max_burn(cfg.initial_weight_kg, cfg.max_burn_kg);
    if let Some((min_h, max_h)) = cfg.window_hours {
        config = config.with_arrival_window(ArrivalWindow::from_hours(min_h, max_h));
    }
    config.validate()?;
    let solver = TimeExpandedSolver::new(config);
    let base = SolveRequest::across(&lattice, cfg.initial_weight_kg, 0.0)
        .context("lattice has no ring shape")?;

    // 4. Output.
    std::fs::create_dir_all(&cfg.output_dir)?;
    let writer = open_writer(&cfg.output_dir)?;

    // 5. One logged search.
    let request = SolveRequest { start_time_secs: hours_to_secs(cfg.single_start_hour), ..base };
    let mut history = SearchHistoryObserver::new(writer, &lattice);
    let t0 = Instant::now();
    let outcome = solver.solve_observed(&lattice, &request, &oracle, &mut history)?;
    let elapsed = t0.elapsed();
    if let Some(e) = history.take_error() {
        warn!("output error: {e}");
    }
    println!();
    println!("Single search at t={:.1}h: {} states in {:.3} s", cfg.single_start_hour, history.recorded(), elapsed.as_secs_f64());
    if outcome.is_found() {
        let profile = replay_path(
            &lattice,
            &outcome.path,
            &oracle,
            request.initial_resource,
            request.start_time_secs,
        )?;
        println!("  cost       €{:.2}", outcome.total_cost);
        println!("  fuel       {:.0} kg", profile.fuel_burned);
        println!("  flight     {:.2} h", secs_to_hours(profile.flight_time_secs));
        println!("  waypoints  {}", outcome.path.len());
    } else {
        println!("  no feasible path");
    }
    let writer = history.into_writer();

    // 6. Departure sweep.
    let hours = BatchRunner::hourly(cfg.first_start_hour, cfg.last_start_hour);
    info!("sweeping {} departure hours", hours.len());
    let runner = BatchRunner::new(&lattice, &solver, &oracle, base);
    let mut obs = BatchOutputObserver::new(writer);
    let results = runner.run(&hours, &mut obs)?;
    if let Some(e) = obs.take_error() {
        warn!("output error: {e}");
    }

    // 7. Summary.
    println!();
    println!("{:<8} {:<8} {:>12} {:>10} {:>8}", "Start", "Status", "Cost €", "Fuel kg", "Hours");
    println!("{}", "-".repeat(50));
    for r in &results {
        println!(
            "{:<8.1} {:<8} {:>12} {:>10} {:>8}",
            r.start_hour,
            r.status.as_str(),
            r.total_cost().map_or("-".into(), |c| format!("{c:.2}")),
            r.fuel_burned().map_or("-".into(), |f| format!("{f:.0}")),
            r.flight_time_secs().map_or("-".into(), |s| format!("{:.2}", secs_to_hours(s))),
        );
    }
    println!();
    println!("{}", summarize(&results));
    println!();
    println!("Output written to {}", cfg.output_dir.display());

    Ok(())
}
