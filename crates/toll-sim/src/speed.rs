//! Section speed readings and speeding penalties.

use toll_core::{Section, VehicleType};

use crate::{PricingPolicy, TripRng};

/// Observed speed on one section, checked against the vehicle's limit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionReading {
    pub section:    Section,
    pub speed_kmh:  f64,
    /// `None` for unrestricted vehicles.
    pub limit_kmh:  Option<f64>,
    pub violation:  bool,
}

/// Draw one speed per section, in [`Section::ALL`] order.
pub fn draw_speeds(rng: &mut TripRng, policy: &PricingPolicy) -> [f64; 3] {
    let (lo, hi) = policy.speed_range_kmh;
    Section::ALL.map(|_| rng.gen_range(lo..hi))
}

/// Check `speeds` against `vehicle`'s limits.
///
/// With `enforce == false` (a trip that goes nowhere) readings are still
/// reported but none counts as a violation.  Exempt vehicles never violate.
pub fn assess(vehicle: VehicleType, speeds: [f64; 3], enforce: bool) -> Vec<SectionReading> {
    let enforce = enforce && !vehicle.is_exempt();
    Section::ALL
        .iter()
        .zip(speeds)
        .map(|(&section, speed_kmh)| {
            let limit_kmh = vehicle.speed_limit(section);
            let violation = enforce && limit_kmh.is_some_and(|l| speed_kmh > l);
            SectionReading { section, speed_kmh, limit_kmh, violation }
        })
        .collect()
}

/// Total penalty for the violations in `readings`.
pub fn speed_penalty(readings: &[SectionReading], policy: &PricingPolicy) -> f64 {
    readings.iter().filter(|r| r.violation).count() as f64 * policy.penalty_per_violation
}
