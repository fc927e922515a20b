//! Congestion levels and the base rate derived from them.

use toll_core::{LocationTable, VehicleType};

use crate::TripRng;

/// One congestion level in `[0, 1)` per location, in location-table order.
#[derive(Clone, Debug, PartialEq)]
pub struct CongestionMap {
    levels: Vec<(String, f64)>,
}

impl CongestionMap {
    /// Draw a fresh level for every location.
    pub fn draw(locations: &LocationTable, rng: &mut TripRng) -> Self {
        let levels = locations
            .names()
            .map(|name| (name.to_owned(), rng.gen_range(0.0..1.0)))
            .collect();
        Self { levels }
    }

    pub fn level(&self, location: &str) -> Option<f64> {
        self.levels
            .iter()
            .find(|(n, _)| n == location)
            .map(|(_, l)| *l)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.levels.iter().map(|(n, l)| (n.as_str(), *l))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Per-km base rate for `vehicle` at congestion `level`.
#[inline]
pub fn base_rate_per_km(level: f64, vehicle: VehicleType) -> f64 {
    level * vehicle.base_rate_factor()
}

/// Reported vehicle count at congestion `level`.
#[inline]
pub fn vehicles_on_road(level: f64, at_full_congestion: f64) -> u32 {
    (level * at_full_congestion).round().max(0.0) as u32
}
