//! En-route air navigation charges.
//!
//! A whole edge is charged at the rate of the region containing its
//! midpoint (plain lat/lon average), times its great-circle length.

use fp_core::GeoPoint;

/// Charging region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnspRegion {
    UkIreland,
    NorthAmerica,
    NorthAtlantic,
    /// Continental Europe and everything not matched above.
    Europe,
}

impl AnspRegion {
    /// Region of `p`.  Checked in order: UK/Ireland box, west of 60°W,
    /// the oceanic band, then the European fallback.
    pub fn of(p: GeoPoint) -> Self {
        if (48.0..=60.0).contains(&p.lat) && (-12.0..=2.0).contains(&p.lon) {
            AnspRegion::UkIreland
        } else if p.lon < -60.0 {
            AnspRegion::NorthAmerica
        } else if (-60.0..-10.0).contains(&p.lon) && (40.0..=70.0).contains(&p.lat) {
            AnspRegion::NorthAtlantic
        } else {
            AnspRegion::Europe
        }
    }

    /// Charge in €/km for a heavy long-haul aircraft.
    pub fn rate_eur_per_km(self) -> f64 {
        match self {
            AnspRegion::UkIreland     => 0.9,
            AnspRegion::NorthAmerica  => 0.5,
            AnspRegion::NorthAtlantic => 0.4,
            AnspRegion::Europe        => 0.7,
        }
    }
}

/// Navigation charge in € for flying `a → b`.
pub fn ansp_cost(a: GeoPoint, b: GeoPoint) -> f64 {
    let region = AnspRegion::of(a.midpoint(b));
    region.rate_eur_per_km() * a.distance_m(b) / 1_000.0
}
