//! Unit tests for fp-oracle.

#[cfg(test)]
mod contract {
    use fp_core::{GeoPoint, NodeId};

    use crate::{CostOracle, EdgeCost, EdgeQuery, OracleError};

    fn query() -> EdgeQuery {
        EdgeQuery {
            from:       NodeId(0),
            to:         NodeId(1),
            from_pos:   GeoPoint::new(0.0, 0.0),
            to_pos:     GeoPoint::new(0.0, 1.0),
            resource:   1_000.0,
            time_hours: 2.0,
        }
    }

    #[test]
    fn closure_is_an_oracle() {
        let oracle = |q: EdgeQuery| EdgeCost::new(1.0, q.time_hours, 3.0);
        let c = oracle.edge_cost(query()).unwrap();
        assert_eq!(c, EdgeCost::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn validate_accepts_zero_and_negative_cost() {
        assert!(EdgeCost::new(0.0, 0.0, 0.0).validate().is_ok());
        assert!(EdgeCost::new(-1.0, 0.5, -2.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_elapsed() {
        let err = EdgeCost::new(1.0, -0.1, 1.0).validate().unwrap_err();
        assert!(matches!(err, OracleError::ContractViolation(_)));
    }

    #[test]
    fn validate_rejects_non_finite() {
        assert!(EdgeCost::new(f64::NAN, 1.0, 1.0).validate().is_err());
        assert!(EdgeCost::new(1.0, f64::INFINITY, 1.0).validate().is_err());
        assert!(EdgeCost::new(1.0, 1.0, f64::NEG_INFINITY).validate().is_err());
    }
}

// ── Wind ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wind {
    use std::io::Cursor;

    use fp_core::{GeoPoint, NodeId};

    use crate::{OracleError, Wind, WindField};

    fn ramp() -> WindField {
        let w = |u| Wind { u_ms: u, v_ms: -u / 2.0 };
        WindField::new(
            vec![0.0, 1.0, 2.0],
            vec![vec![w(0.0), w(10.0), w(20.0)], vec![w(5.0), w(5.0), w(5.0)]],
        )
        .unwrap()
    }

    #[test]
    fn westerly_is_a_tailwind_eastbound() {
        let w = Wind { u_ms: 10.0, v_ms: 0.0 };
        assert!((w.from_direction_deg() - 270.0).abs() < 1e-9);
        assert!((w.head_tail_kmh(90.0) - 36.0).abs() < 1e-9);
        assert!((w.head_tail_kmh(270.0) + 36.0).abs() < 1e-9);
        assert!(w.head_tail_kmh(0.0).abs() < 1e-9);
    }

    #[test]
    fn southerly_pushes_northbound() {
        let w = Wind { u_ms: 0.0, v_ms: 10.0 };
        assert!((w.from_direction_deg() - 180.0).abs() < 1e-9);
        assert!((w.head_tail_kmh(0.0) - 36.0).abs() < 1e-9);
        assert!((w.head_tail_kmh(360.0) - 36.0).abs() < 1e-9);
    }

    #[test]
    fn interpolates_between_hours() {
        let f = ramp();
        let w = f.wind_at(NodeId(0), 0.5).unwrap();
        assert!((w.u_ms - 5.0).abs() < 1e-12);
        assert!((w.v_ms + 2.5).abs() < 1e-12);
        assert_eq!(f.wind_at(NodeId(0), 1.0).unwrap().u_ms, 10.0);
        assert!((f.wind_at(NodeId(0), 1.75).unwrap().u_ms - 17.5).abs() < 1e-12);
    }

    #[test]
    fn clamps_outside_sampled_range() {
        let f = ramp();
        assert_eq!(f.wind_at(NodeId(0), -3.0).unwrap().u_ms, 0.0);
        assert_eq!(f.wind_at(NodeId(0), 2.0).unwrap().u_ms, 20.0);
        assert_eq!(f.wind_at(NodeId(0), 99.0).unwrap().u_ms, 20.0);
    }

    #[test]
    fn unknown_waypoint() {
        let f = ramp();
        assert!(matches!(f.wind_at(NodeId(2), 0.0), Err(OracleError::MissingWaypoint(NodeId(2)))));
    }

    #[test]
    fn calm_is_still_at_any_time() {
        let f = WindField::calm(3);
        assert_eq!(f.waypoint_count(), 3);
        assert_eq!(f.wind_at(NodeId(2), 17.3).unwrap(), Wind::default());
    }

    #[test]
    fn synthetic_is_seed_deterministic() {
        let a = WindField::synthetic(10, 30, 7);
        let b = WindField::synthetic(10, 30, 7);
        let c = WindField::synthetic(10, 30, 8);
        assert_eq!(a.time_range(), (0.0, 30.0));
        for id in 0..10 {
            let t = 3.3 * id as f64;
            assert_eq!(a.wind_at(NodeId(id), t).unwrap(), b.wind_at(NodeId(id), t).unwrap());
        }
        let differs = (0..10).any(|id| a.wind_at(NodeId(id), 0.0).unwrap() != c.wind_at(NodeId(id), 0.0).unwrap());
        assert!(differs);
    }

    #[test]
    fn csv_load() {
        let data = "waypoint_id,time_hours,u_speed_ms,v_speed_ms\n\
                    1,1,4.0,0.0\n\
                    0,0,1.0,2.0\n\
                    0,1,3.0,4.0\n\
                    1,0,2.0,0.0\n";
        let f = WindField::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(f.waypoint_count(), 2);
        let w = f.wind_at(NodeId(0), 0.5).unwrap();
        assert!((w.u_ms - 2.0).abs() < 1e-12);
        assert!((w.v_ms - 3.0).abs() < 1e-12);
        assert_eq!(f.wind_at(NodeId(1), 1.0).unwrap().u_ms, 4.0);
    }

    #[test]
    fn csv_missing_sample_rejected() {
        let data = "waypoint_id,time_hours,u_speed_ms,v_speed_ms\n\
                    0,0,1.0,2.0\n\
                    0,1,3.0,4.0\n\
                    1,0,2.0,0.0\n";
        let err = WindField::from_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, OracleError::InvalidTable(_)));
    }

    #[test]
    fn csv_bad_number_is_csv_error() {
        let data = "waypoint_id,time_hours,u_speed_ms,v_speed_ms\n0,zero,1.0,2.0\n";
        assert!(matches!(WindField::from_reader(Cursor::new(data)), Err(OracleError::Csv(_))));
    }

    #[test]
    fn csv_duplicate_sample_rejected() {
        let data = "waypoint_id,time_hours,u_speed_ms,v_speed_ms\n\
                    0,0,1.0,2.0\n\
                    0,0,9.0,9.0\n";
        let err = WindField::from_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, OracleError::InvalidTable(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn csv_huge_waypoint_id_rejected_without_allocating() {
        let data = "waypoint_id,time_hours,u_speed_ms,v_speed_ms\n4000000000,0,1.0,2.0\n";
        let err = WindField::from_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, OracleError::InvalidTable(_)));
    }

    #[test]
    fn csv_gap_in_waypoint_ids_rejected() {
        let data = "waypoint_id,time_hours,u_speed_ms,v_speed_ms\n\
                    0,0,1.0,2.0\n\
                    2,0,3.0,4.0\n";
        let err = WindField::from_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, OracleError::InvalidTable(_)));
    }

    #[test]
    fn grid_samples_snap_to_nearest_point() {
        let data = "time_hours,latitude,longitude,u_speed_ms,v_speed_ms\n\
                    0,50.0,0.0,10.0,0.0\n\
                    0,50.0,10.0,-10.0,0.0\n\
                    1,50.0,0.0,20.0,0.0\n\
                    1,50.0,10.0,-20.0,0.0\n";
        let waypoints = [GeoPoint::new(50.2, 1.0), GeoPoint::new(49.5, 8.0), GeoPoint::new(51.0, 4.9)];
        let f = WindField::from_grid_reader(Cursor::new(data), &waypoints).unwrap();

        assert_eq!(f.waypoint_count(), 3);
        assert_eq!(f.time_range(), (0.0, 1.0));
        assert_eq!(f.wind_at(NodeId(0), 0.0).unwrap().u_ms, 10.0);
        assert_eq!(f.wind_at(NodeId(1), 1.0).unwrap().u_ms, -20.0);
        assert_eq!(f.wind_at(NodeId(2), 0.0).unwrap().u_ms, 10.0);
        assert!((f.wind_at(NodeId(0), 0.5).unwrap().u_ms - 15.0).abs() < 1e-12);
    }

    #[test]
    fn grid_may_change_between_hours() {
        let data = "time_hours,latitude,longitude,u_speed_ms,v_speed_ms\n\
                    0,0.0,0.0,1.0,0.0\n\
                    1,0.0,5.0,2.0,0.0\n\
                    1,0.0,-5.0,3.0,0.0\n";
        let f = WindField::from_grid_reader(Cursor::new(data), &[GeoPoint::new(0.0, -4.0)]).unwrap();
        assert_eq!(f.wind_at(NodeId(0), 0.0).unwrap().u_ms, 1.0);
        assert_eq!(f.wind_at(NodeId(0), 1.0).unwrap().u_ms, 3.0);
    }

    #[test]
    fn grid_duplicate_position_rejected() {
        let data = "time_hours,latitude,longitude,u_speed_ms,v_speed_ms\n\
                    0,50.0,0.0,10.0,0.0\n\
                    0,50.0,0.0,11.0,0.0\n";
        let err = WindField::from_grid_reader(Cursor::new(data), &[GeoPoint::new(50.0, 0.0)]).unwrap_err();
        assert!(matches!(err, OracleError::InvalidTable(_)));
    }

    #[test]
    fn grid_without_rows_rejected() {
        let data = "time_hours,latitude,longitude,u_speed_ms,v_speed_ms\n";
        let err = WindField::from_grid_reader(Cursor::new(data), &[GeoPoint::new(50.0, 0.0)]).unwrap_err();
        assert!(matches!(err, OracleError::InvalidTable(_)));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = WindField::new(vec![0.0, 1.0], vec![vec![Wind::default()]]).unwrap_err();
        assert!(matches!(err, OracleError::InvalidTable(_)));
        assert!(WindField::new(vec![1.0, 0.0], vec![]).is_err());
        assert!(WindField::new(vec![], vec![]).is_err());
    }
}

// ── Performance ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod performance {
    use std::io::Cursor;

    use crate::{OracleError, PerformanceTable};

    fn table() -> PerformanceTable {
        // Deliberately out of order.
        PerformanceTable::new(vec![(250_000.0, 7_000.0), (200_000.0, 6_000.0), (300_000.0, 8_500.0)]).unwrap()
    }

    #[test]
    fn exact_points() {
        let t = table();
        assert_eq!(t.fuel_flow(200_000.0), 6_000.0);
        assert_eq!(t.fuel_flow(250_000.0), 7_000.0);
        assert_eq!(t.fuel_flow(300_000.0), 8_500.0);
    }

    #[test]
    fn interpolation() {
        let t = table();
        assert!((t.fuel_flow(225_000.0) - 6_500.0).abs() < 1e-9);
        assert!((t.fuel_flow(275_000.0) - 7_750.0).abs() < 1e-9);
    }

    #[test]
    fn extrapolates_end_segments() {
        let t = table();
        assert!((t.fuel_flow(190_000.0) - 5_800.0).abs() < 1e-9);
        assert!((t.fuel_flow(310_000.0) - 8_800.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_tables() {
        assert!(matches!(PerformanceTable::new(vec![(1.0, 1.0)]), Err(OracleError::InvalidTable(_))));
        assert!(PerformanceTable::new(vec![(1.0, 1.0), (1.0, 2.0)]).is_err());
        assert!(PerformanceTable::new(vec![(1.0, f64::NAN), (2.0, 2.0)]).is_err());
    }

    #[test]
    fn csv_load() {
        let data = "weight_kg,fuel_flow_kg_h\n260000,7900\n180000,5900\n220000,6800\n";
        let t = PerformanceTable::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(t.points()[0], (180_000.0, 5_900.0));
        assert!((t.fuel_flow(200_000.0) - 6_350.0).abs() < 1e-9);
    }
}

// ── ANSP ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ansp {
    use fp_core::GeoPoint;

    use crate::{AnspRegion, ansp_cost};

    #[test]
    fn regions() {
        assert_eq!(AnspRegion::of(GeoPoint::new(53.0, -5.0)), AnspRegion::UkIreland);
        assert_eq!(AnspRegion::of(GeoPoint::new(41.0, -73.0)), AnspRegion::NorthAmerica);
        assert_eq!(AnspRegion::of(GeoPoint::new(50.0, -40.0)), AnspRegion::NorthAtlantic);
        assert_eq!(AnspRegion::of(GeoPoint::new(52.3, 4.8)), AnspRegion::Europe);
        // South of the oceanic band falls back to Europe.
        assert_eq!(AnspRegion::of(GeoPoint::new(30.0, -40.0)), AnspRegion::Europe);
    }

    #[test]
    fn uk_box_takes_precedence_over_ocean() {
        assert_eq!(AnspRegion::of(GeoPoint::new(55.0, -11.0)), AnspRegion::UkIreland);
        assert_eq!(AnspRegion::of(GeoPoint::new(55.0, -13.0)), AnspRegion::NorthAtlantic);
    }

    #[test]
    fn charged_by_midpoint() {
        let cost = ansp_cost(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((cost - 0.7 * 111.194_926_6).abs() < 1e-3);

        // Midpoint (50, -40) is oceanic even though both ends are not.
        let a = GeoPoint::new(50.0, -70.0);
        let b = GeoPoint::new(50.0, -10.0);
        let expected = 0.4 * a.distance_m(b) / 1_000.0;
        assert!((ansp_cost(a, b) - expected).abs() < 1e-9);
    }
}

// ── Reference model ───────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use std::sync::Arc;

    use fp_core::{GeoPoint, NodeId};

    use crate::{
        AircraftParams, CostOracle, EdgeQuery, FlightCostModel, OracleError, PerformanceTable,
        Wind, WindField, ansp_cost, isa_temperature_k,
    };

    fn perf() -> Arc<PerformanceTable> {
        Arc::new(PerformanceTable::new(vec![(200_000.0, 6_000.0), (300_000.0, 8_000.0)]).unwrap())
    }

    fn eastbound(resource: f64) -> EdgeQuery {
        EdgeQuery {
            from:       NodeId(0),
            to:         NodeId(1),
            from_pos:   GeoPoint::new(0.0, 0.0),
            to_pos:     GeoPoint::new(0.0, 1.0),
            resource,
            time_hours: 0.0,
        }
    }

    #[test]
    fn isa_at_fl340() {
        assert!((isa_temperature_k(34_000.0) - 220.7892).abs() < 1e-9);
        assert_eq!(isa_temperature_k(0.0), 288.15);
    }

    #[test]
    fn true_airspeed() {
        let tas = AircraftParams::default().true_airspeed_kmh();
        assert!((tas - 879.2457).abs() < 1e-3, "TAS {tas}");
    }

    #[test]
    fn calm_air_cost_breakdown() {
        let aircraft = AircraftParams::default();
        let model = FlightCostModel::new(aircraft.clone(), Arc::new(WindField::calm(2)), perf());
        let q = eastbound(250_000.0);
        let c = model.edge_cost(q).unwrap();

        let time_h = 111.194_926_6 / aircraft.true_airspeed_kmh();
        let fuel = 7_000.0 * time_h;
        let price = aircraft.fuel_price_eur_per_kg;
        let expected = fuel * price + time_h * 35.0 * price + ansp_cost(q.from_pos, q.to_pos);

        assert!((c.elapsed_hours - time_h).abs() < 1e-9);
        assert!((c.resource_consumed - fuel).abs() < 1e-6);
        assert!((c.cost - expected).abs() < 1e-6);
    }

    #[test]
    fn heavier_aircraft_burns_more() {
        let model = FlightCostModel::new(AircraftParams::default(), Arc::new(WindField::calm(2)), perf());
        let light = model.edge_cost(eastbound(210_000.0)).unwrap();
        let heavy = model.edge_cost(eastbound(290_000.0)).unwrap();
        assert!(heavy.resource_consumed > light.resource_consumed);
        assert!(heavy.cost > light.cost);
        assert_eq!(heavy.elapsed_hours, light.elapsed_hours);
    }

    #[test]
    fn tailwind_shortens_the_leg() {
        let tail = WindField::new(vec![0.0], vec![vec![Wind { u_ms: 50.0, v_ms: 0.0 }]]).unwrap();
        let calm = FlightCostModel::new(AircraftParams::default(), Arc::new(WindField::calm(1)), perf());
        let windy = FlightCostModel::new(AircraftParams::default(), Arc::new(tail), perf());
        let q = eastbound(250_000.0);
        assert!(windy.edge_cost(q).unwrap().elapsed_hours < calm.edge_cost(q).unwrap().elapsed_hours);
    }

    #[test]
    fn overwhelming_headwind_is_a_contract_violation() {
        let gale = WindField::new(vec![0.0], vec![vec![Wind { u_ms: -300.0, v_ms: 0.0 }]]).unwrap();
        let model = FlightCostModel::new(AircraftParams::default(), Arc::new(gale), perf());
        let err = model.edge_cost(eastbound(250_000.0)).unwrap_err();
        assert!(matches!(err, OracleError::ContractViolation(_)));
    }

    #[test]
    fn wind_lookup_uses_departure_waypoint() {
        let model = FlightCostModel::new(AircraftParams::default(), Arc::new(WindField::calm(1)), perf());
        let mut q = eastbound(250_000.0);
        q.from = NodeId(4);
        assert!(matches!(model.edge_cost(q), Err(OracleError::MissingWaypoint(NodeId(4)))));
    }
}
