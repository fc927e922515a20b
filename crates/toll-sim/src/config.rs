//! Immutable pipeline configuration and pricing policy.

use toll_core::{LocationTable, TollError, TollResult};
use toll_pricing::{MultiplierTable, TollBreakdown, compute_toll};
use toll_zones::{RouteSummary, ZoneCrossing, ZoneTable, compute_route};

/// The static tables the pipeline reads.
///
/// Built once at startup and shared by reference; nothing in the workspace
/// mutates it afterwards.  `Send + Sync`, so one instance can serve any
/// number of concurrent quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct TollConfig {
    pub locations:   LocationTable,
    pub zones:       ZoneTable,
    pub multipliers: MultiplierTable,
}

impl TollConfig {
    pub fn new(locations: LocationTable, zones: ZoneTable, multipliers: MultiplierTable) -> Self {
        Self { locations, zones, multipliers }
    }

    /// Reference cities, zones, and multipliers.
    pub fn reference() -> Self {
        Self::new(
            LocationTable::reference(),
            ZoneTable::reference(),
            MultiplierTable::reference(),
        )
    }

    /// [`compute_route`] against this configuration.
    pub fn route(&self, start: &str, end: &str) -> TollResult<RouteSummary> {
        compute_route(&self.locations, &self.zones, start, end)
    }

    /// [`compute_toll`] against this configuration.
    pub fn toll(&self, crossings: &[ZoneCrossing], rate_per_km: f64) -> TollBreakdown {
        compute_toll(&self.multipliers, crossings, rate_per_km)
    }
}

impl Default for TollConfig {
    fn default() -> Self {
        Self::reference()
    }
}

// ── PricingPolicy ─────────────────────────────────────────────────────────────

/// Constants for the caller-side adjustments layered on the toll.
///
/// `Default` gives the reference values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PricingPolicy {
    /// INR added per section where the vehicle exceeded its limit.
    pub penalty_per_violation: f64,
    /// INR removed per discounted toll line item.
    pub discount_per_item: f64,
    /// Chance that any one line item is discounted.
    pub discount_probability: f64,
    /// Half-open `[min, max)` range section speeds are drawn from, km/h.
    pub speed_range_kmh: (f64, f64),
    /// Vehicle count reported at congestion level 1.0.
    pub vehicles_at_full_congestion: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            penalty_per_violation:       500.0,
            discount_per_item:           150.0,
            discount_probability:        0.5,
            speed_range_kmh:             (50.0, 120.0),
            vehicles_at_full_congestion: 500.0,
        }
    }
}

impl PricingPolicy {
    /// Reject policies the simulator cannot draw from.
    pub fn validate(&self) -> TollResult<()> {
        let (lo, hi) = self.speed_range_kmh;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(TollError::Config(format!(
                "speed range [{lo}, {hi}) must be finite and non-empty"
            )));
        }
        if !(0.0..=1.0).contains(&self.discount_probability) {
            return Err(TollError::Config(format!(
                "discount probability {} is outside [0, 1]",
                self.discount_probability
            )));
        }
        Ok(())
    }
}
