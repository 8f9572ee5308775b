//! Reference flight cost model.
//!
//! ```text
//! TAS        = mach · √(γ · R · T) · 3.6                     km/h
//! GS         = TAS + head/tail wind at the departure waypoint km/h
//! time       = distance / GS                                  h
//! fuel       = fuel_flow(weight) · time                       kg
//! cost       = fuel · price + time · cost_index · price + ANSP €
//! ```
//!
//! The cost index is expressed in kg of fuel per hour, so time cost is priced
//! at the fuel price too.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ansp::ansp_cost;
use crate::oracle::{CostOracle, EdgeCost, EdgeQuery};
use crate::{OracleError, OracleResult, PerformanceTable, WindField};

const GAMMA_AIR: f64 = 1.4;
const GAS_CONSTANT_AIR: f64 = 287.0;
const SEA_LEVEL_TEMP_K: f64 = 288.15;
const LAPSE_RATE_K_PER_M: f64 = 0.0065;
const FEET_TO_M: f64 = 0.3048;

/// ISA temperature in kelvin at `altitude_ft` (troposphere only).
pub fn isa_temperature_k(altitude_ft: f64) -> f64 {
    SEA_LEVEL_TEMP_K - altitude_ft * FEET_TO_M * LAPSE_RATE_K_PER_M
}

// ── AircraftParams ────────────────────────────────────────────────────────────

/// Cruise parameters of one aircraft type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AircraftParams {
    pub mach:                  f64,
    pub cruise_altitude_ft:    f64,
    /// € per kg of fuel.
    pub fuel_price_eur_per_kg: f64,
    /// Cost of time in kg of fuel per hour.
    pub cost_index_kg_per_h:   f64,
}

impl Default for AircraftParams {
    /// A long-haul twin at M0.82, FL340.
    fn default() -> Self {
        Self {
            mach:                  0.82,
            cruise_altitude_ft:    34_000.0,
            fuel_price_eur_per_kg: 0.683125,
            cost_index_kg_per_h:   35.0,
        }
    }
}

impl AircraftParams {
    /// True airspeed in km/h at the cruise altitude.
    pub fn true_airspeed_kmh(&self) -> f64 {
        let temp = isa_temperature_k(self.cruise_altitude_ft);
        self.mach * (temp * GAS_CONSTANT_AIR * GAMMA_AIR).sqrt() * 3.6
    }
}

// ── FlightCostModel ───────────────────────────────────────────────────────────

/// [`CostOracle`] built from a wind field, a performance table and the ANSP
/// charging scheme.
///
/// The tables sit behind `Arc` so one set can back many models (e.g. two
/// aircraft types flying through the same weather).
#[derive(Clone, Debug)]
pub struct FlightCostModel {
    aircraft:    AircraftParams,
    wind:        Arc<WindField>,
    performance: Arc<PerformanceTable>,
    tas_kmh:     f64,
}

impl FlightCostModel {
    pub fn new(aircraft: AircraftParams, wind: Arc<WindField>, performance: Arc<PerformanceTable>) -> Self {
        let tas_kmh = aircraft.true_airspeed_kmh();
        Self { aircraft, wind, performance, tas_kmh }
    }

    pub fn aircraft(&self) -> &AircraftParams {
        &self.aircraft
    }

    pub fn wind(&self) -> &WindField {
        &self.wind
    }

    pub fn performance(&self) -> &PerformanceTable {
        &self.performance
    }
}

impl CostOracle for FlightCostModel {
    fn edge_cost(&self, q: EdgeQuery) -> OracleResult<EdgeCost> {
        let distance_km = q.from_pos.distance_m(q.to_pos) / 1_000.0;
        let heading = q.from_pos.initial_bearing_deg(q.to_pos);

        let wind = self.wind.wind_at(q.from, q.time_hours)?;
        let ground_speed_kmh = self.tas_kmh + wind.head_tail_kmh(heading);
        if !(ground_speed_kmh > 0.0) {
            return Err(OracleError::ContractViolation(format!(
                "non-positive ground speed {ground_speed_kmh:.1} km/h on {} -> {}",
                q.from, q.to
            )));
        }

        let time_h = distance_km / ground_speed_kmh;
        let fuel_kg = self.performance.fuel_flow(q.resource) * time_h;

        let price = self.aircraft.fuel_price_eur_per_kg;
        let fuel_cost = fuel_kg * price;
        let time_cost = time_h * self.aircraft.cost_index_kg_per_h * price;
        let cost = fuel_cost + time_cost + ansp_cost(q.from_pos, q.to_pos);

        Ok(EdgeCost::new(fuel_kg, time_h, cost))
    }
}
