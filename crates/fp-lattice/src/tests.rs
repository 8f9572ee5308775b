//! Unit tests for fp-lattice.
//!
//! Geometry tests use the real AMS → JFK pair; topology tests use small
//! hand-sized lattices so edge counts can be checked by hand.

#[cfg(test)]
mod helpers {
    use fp_core::GeoPoint;

    use crate::{LatticeParams, WidthProfile};

    pub const AMS: GeoPoint = GeoPoint { lat: 52.308056, lon: 4.764167 };
    pub const JFK: GeoPoint = GeoPoint { lat: 40.641766, lon: -73.780968 };

    /// 3 rings × 3 angles, 200 km apart, constant 40 km half-width.
    pub fn small_params() -> LatticeParams {
        LatticeParams {
            ring_count:     3,
            angle_count:    3,
            ring_spacing_m: 200_000.0,
            width: WidthProfile::Constant { half_width_m: 40_000.0 },
        }
    }
}

// ── Addressing ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod shape {
    use fp_core::NodeId;

    use crate::{LatticeError, LatticeShape, NodeRole, ring_address, ring_node_id};

    #[test]
    fn ring_ids_follow_convention() {
        assert_eq!(ring_node_id(0, 0, 21), NodeId(1));
        assert_eq!(ring_node_id(0, 20, 21), NodeId(21));
        assert_eq!(ring_node_id(1, 0, 21), NodeId(22));
        assert_eq!(ring_node_id(28, 20, 21), NodeId(609));
    }

    #[test]
    fn addressing_is_a_bijection() {
        let shape = LatticeShape::new(7, 5);
        for ring in 0..7 {
            for angle in 0..5 {
                let id = shape.node_id(ring, angle).unwrap();
                assert_eq!(ring_address(id, 5), (ring, angle));
                assert_eq!(shape.role(id), Some(NodeRole::Ring { ring, angle }));
            }
        }
    }

    #[test]
    fn out_of_range_addresses() {
        let shape = LatticeShape::new(2, 3);
        assert_eq!(shape.node_id(2, 0), None);
        assert_eq!(shape.node_id(0, 3), None);
        assert_eq!(shape.role(NodeId(8)), None);
    }

    #[test]
    fn ends_of_the_id_range() {
        let shape = LatticeShape::new(29, 21);
        assert_eq!(shape.origin(), NodeId(0));
        assert_eq!(shape.destination(), NodeId(610));
        assert_eq!(shape.node_count(), 611);
        assert_eq!(shape.role(NodeId(0)), Some(NodeRole::Origin));
        assert_eq!(shape.role(NodeId(610)), Some(NodeRole::Destination));
    }

    #[test]
    fn from_max_id_recovers_ring_count() {
        assert_eq!(LatticeShape::from_max_id(NodeId(610), 21).unwrap(), LatticeShape::new(29, 21));
        assert_eq!(LatticeShape::from_max_id(NodeId(1), 21).unwrap(), LatticeShape::new(0, 21));
    }

    #[test]
    fn from_max_id_rejects_ragged_ranges() {
        assert!(matches!(
            LatticeShape::from_max_id(NodeId(5), 3),
            Err(LatticeError::InvalidShape { node_count: 6, angle_count: 3 })
        ));
        assert!(LatticeShape::from_max_id(NodeId(0), 3).is_err());
        assert!(LatticeShape::from_max_id(NodeId(4), 0).is_err());
    }

    #[test]
    fn ring_nodes_in_angle_order() {
        let shape = LatticeShape::new(2, 3);
        let ring1: Vec<_> = shape.ring_nodes(1).collect();
        assert_eq!(ring1, [NodeId(4), NodeId(5), NodeId(6)]);
        assert_eq!(shape.ring_nodes(2).count(), 0);
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generate {
    use fp_core::GeoPoint;

    use super::helpers::{AMS, JFK, small_params};
    use crate::{LatticeError, LatticeParams, LatticeShape, WidthProfile, generate};

    #[test]
    fn endpoints_keep_exact_coordinates() {
        let wp = generate(AMS, JFK, &LatticeParams::default()).unwrap();
        assert_eq!(wp.positions[0], AMS);
        assert_eq!(*wp.positions.last().unwrap(), JFK);
    }

    #[test]
    fn default_corridor_fits_all_rings() {
        // 29 × 200 km = 5800 km < 5848 km AMS–JFK.
        let wp = generate(AMS, JFK, &LatticeParams::default()).unwrap();
        assert_eq!(wp.len(), 611);
        assert_eq!(wp.shape().unwrap(), LatticeShape::new(29, 21));
    }

    #[test]
    fn ring_distances_match_spacing() {
        let params = LatticeParams::default();
        let wp = generate(AMS, JFK, &params).unwrap();
        let shape = wp.shape().unwrap();

        let mut previous = 0.0;
        for ring in 0..shape.ring_count {
            let expected = (ring + 1) as f64 * params.ring_spacing_m;
            let mut ring_min = f64::MAX;
            for id in shape.ring_nodes(ring) {
                let d = AMS.distance_m(wp.positions[id.index()]);
                assert!((d - expected).abs() < 1.0, "ring {ring}: {d} vs {expected}");
                ring_min = ring_min.min(d);
            }
            assert!(ring_min >= previous, "ring {ring} closer than ring {}", ring.saturating_sub(1));
            previous = ring_min;
        }
    }

    #[test]
    fn stops_before_overshooting_destination() {
        // (0,0) → (0,9) is ~1000.75 km: rings at 200..1000 km fit, 1200 km does not.
        let dest = GeoPoint::new(0.0, 9.0);
        let params = LatticeParams { ring_count: 29, ..small_params() };
        let wp = generate(GeoPoint::new(0.0, 0.0), dest, &params).unwrap();
        let shape = wp.shape().unwrap();
        assert_eq!(shape.ring_count, 5);
        assert_eq!(wp.positions[shape.destination().index()], dest);
    }

    #[test]
    fn destination_inside_first_ring_yields_no_rings() {
        let params = small_params();
        let wp = generate(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0), &params).unwrap();
        assert_eq!(wp.len(), 2);
        assert_eq!(wp.shape().unwrap().ring_count, 0);
    }

    #[test]
    fn single_angle_follows_the_great_circle() {
        let params = LatticeParams { angle_count: 1, ..small_params() };
        let wp = generate(AMS, JFK, &params).unwrap();
        let bearing = AMS.initial_bearing_deg(JFK);
        for p in &wp.positions[1..wp.len() - 1] {
            assert!((AMS.initial_bearing_deg(*p) - bearing).abs() < 1e-6);
        }
    }

    #[test]
    fn spread_is_symmetric_about_the_bearing() {
        let wp = generate(AMS, JFK, &small_params()).unwrap();
        let bearing = AMS.initial_bearing_deg(JFK);
        // Ring 0: ids 1, 2, 3 → left, centre, right.
        let left = AMS.initial_bearing_deg(wp.positions[1]) - bearing;
        let centre = AMS.initial_bearing_deg(wp.positions[2]) - bearing;
        let right = AMS.initial_bearing_deg(wp.positions[3]) - bearing;
        assert!(centre.abs() < 1e-6);
        assert!((left + right).abs() < 1e-6);
        let expected = (40_000.0f64 / 200_000.0).atan().to_degrees();
        assert!((right - expected).abs() < 1e-6, "spread {right} vs {expected}");
    }

    #[test]
    fn sine_bulge_is_widest_mid_route() {
        let w = WidthProfile::SineBulge { max_width_m: 1_800_000.0, base_width_m: 40_000.0 };
        let ends = w.half_width_m(0, 29);
        let mid = w.half_width_m(14, 29);
        assert!((ends - 20_000.0).abs() < 1e-6);
        assert!((mid - 920_000.0).abs() < 1e-6);
        assert!((w.half_width_m(28, 29) - 20_000.0).abs() < 1e-6);
        // A single ring has no progress to speak of.
        assert!((w.half_width_m(0, 1) - 20_000.0).abs() < 1e-6);
    }

    #[test]
    fn invalid_params_rejected() {
        let zero_angles = LatticeParams { angle_count: 0, ..small_params() };
        assert!(matches!(generate(AMS, JFK, &zero_angles), Err(LatticeError::InvalidParams(_))));

        let bad_spacing = LatticeParams { ring_spacing_m: 0.0, ..small_params() };
        assert!(generate(AMS, JFK, &bad_spacing).is_err());

        let bad_width = LatticeParams {
            width: WidthProfile::Constant { half_width_m: f64::NAN },
            ..small_params()
        };
        assert!(generate(AMS, JFK, &bad_width).is_err());
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use fp_core::{GeoPoint, NodeId};

    use super::helpers::{AMS, JFK, small_params};
    use crate::{LatticeError, LatticeShape, build_adjacency, generate};

    #[test]
    fn edge_count_matches_topology() {
        let lattice = generate(AMS, JFK, &small_params()).unwrap().build_lattice().unwrap();
        // origin: 3, ring→ring: 2 × (3 straight + 4 diagonals), last ring: 3.
        assert_eq!(lattice.node_count(), 11);
        assert_eq!(lattice.edge_count(), 20);
        assert_eq!(lattice.shape(), Some(LatticeShape::new(3, 3)));
    }

    #[test]
    fn degrees_per_role() {
        let lattice = generate(AMS, JFK, &small_params()).unwrap().build_lattice().unwrap();
        assert_eq!(lattice.out_degree(NodeId(0)), 3);
        // Ring 0 edge angles have one diagonal, the centre has two.
        assert_eq!(lattice.out_degree(NodeId(1)), 2);
        assert_eq!(lattice.out_degree(NodeId(2)), 3);
        assert_eq!(lattice.out_degree(NodeId(3)), 2);
        // Last ring feeds the destination only.
        for id in 7..=9 {
            assert_eq!(lattice.out_degree(NodeId(id)), 1);
            assert!(lattice.has_edge(NodeId(id), NodeId(10)));
        }
        assert_eq!(lattice.out_degree(NodeId(10)), 0);
    }

    #[test]
    fn successors_are_straight_then_left_then_right() {
        let lattice = generate(AMS, JFK, &small_params()).unwrap().build_lattice().unwrap();
        let next: Vec<_> = lattice.successors(NodeId(2)).collect();
        assert_eq!(next, [NodeId(5), NodeId(4), NodeId(6)]);
    }

    #[test]
    fn edges_only_move_forward_one_ring() {
        let lattice = generate(AMS, JFK, &small_params()).unwrap().build_lattice().unwrap();
        let shape = lattice.shape().unwrap();
        for e in 0..lattice.edge_count() {
            let from = lattice.edge_from[e];
            let to = lattice.edge_to[e];
            assert!(to > from, "backward edge {from} → {to}");
            assert_ne!(to, shape.origin());
        }
    }

    #[test]
    fn zero_rings_links_origin_to_destination() {
        let lattice = build_adjacency(&[AMS, JFK], 21).unwrap();
        assert_eq!(lattice.edge_count(), 1);
        assert!(lattice.has_edge(NodeId(0), NodeId(1)));
    }

    #[test]
    fn early_stop_is_wired_by_actual_rings() {
        let params = crate::LatticeParams { ring_count: 29, ..small_params() };
        let wp = generate(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 9.0), &params).unwrap();
        let lattice = wp.build_lattice().unwrap();
        let dest = NodeId(wp.len() as u32 - 1);
        for id in 13..=15 {
            assert!(lattice.has_edge(NodeId(id), dest));
        }
    }

    #[test]
    fn ragged_waypoints_rejected() {
        let pts = vec![AMS; 5];
        assert!(matches!(
            build_adjacency(&pts, 2),
            Err(LatticeError::InvalidShape { node_count: 5, angle_count: 2 })
        ));
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use fp_core::GeoPoint;

    use crate::LatticeBuilder;

    #[test]
    fn empty_build() {
        let lattice = LatticeBuilder::new().build();
        assert_eq!(lattice.node_count(), 0);
        assert_eq!(lattice.edge_count(), 0);
        assert!(lattice.is_empty());
        assert_eq!(lattice.shape(), None);
    }

    #[test]
    fn directed_only_edge() {
        let mut b = LatticeBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_edge(a, c);
        let lattice = b.build();
        assert_eq!(lattice.out_degree(a), 1);
        assert_eq!(lattice.out_degree(c), 0);
        assert!(lattice.has_edge(a, c));
        assert!(!lattice.has_edge(c, a));
    }

    #[test]
    fn edges_grouped_by_source_keep_insertion_order() {
        let mut b = LatticeBuilder::new();
        let n: Vec<_> = (0..4).map(|i| b.add_node(GeoPoint::new(0.0, i as f64))).collect();
        b.add_edge(n[2], n[3]);
        b.add_edge(n[0], n[3]);
        b.add_edge(n[0], n[1]);
        b.add_edge(n[0], n[2]);
        let lattice = b.build();
        let out: Vec<_> = lattice.successors(n[0]).collect();
        assert_eq!(out, [n[3], n[1], n[2]]);
        for e in lattice.out_edges(n[0]) {
            assert_eq!(lattice.edge_from[e.index()], n[0]);
        }
    }

    #[test]
    fn position_lookup() {
        let mut b = LatticeBuilder::new();
        let a = b.add_node(GeoPoint::new(1.0, 2.0));
        let lattice = b.build();
        assert_eq!(lattice.position(a), Some(GeoPoint::new(1.0, 2.0)));
        assert_eq!(lattice.position(fp_core::NodeId(9)), None);
        assert!(!lattice.has_edge(fp_core::NodeId(9), a));
    }
}
