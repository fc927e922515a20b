//! Quoting a single trip.

use log::{debug, info, warn};

use toll_core::{TollError, TollResult, VehicleType};
use toll_pricing::TollBreakdown;
use toll_zones::RouteSummary;

use crate::congestion::{base_rate_per_km, vehicles_on_road};
use crate::speed::{assess, draw_speeds, speed_penalty};
use crate::{CongestionMap, PricingPolicy, SectionReading, TollConfig, TripRng};

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripRequest {
    pub start:   String,
    pub end:     String,
    pub vehicle: VehicleType,
}

impl TripRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>, vehicle: VehicleType) -> Self {
        Self { start: start.into(), end: end.into(), vehicle }
    }

    /// `true` if the trip starts and ends at the same named location.
    pub fn is_round_trip(&self) -> bool {
        self.start == self.end
    }
}

/// Everything computed for one trip.
#[derive(Clone, Debug, PartialEq)]
pub struct TripQuote {
    pub request:          TripRequest,
    pub congestion:       CongestionMap,
    /// Congestion level at the start location.
    pub start_congestion: f64,
    pub rate_per_km:      f64,
    pub vehicles_on_road: u32,
    pub sections:         Vec<SectionReading>,
    pub route:            RouteSummary,
    pub toll:             TollBreakdown,
    /// One flag per toll line item, `true` where the discount applied.
    pub discounts:        Vec<bool>,
    pub penalty:          f64,
    pub discount:         f64,
    /// `toll.total_cost + penalty - discount`.  Not clamped at zero.
    pub final_amount:     f64,
}

impl TripQuote {
    pub fn violations(&self) -> impl Iterator<Item = &SectionReading> + '_ {
        self.sections.iter().filter(|s| s.violation)
    }
}

/// Quotes trips against a shared [`TollConfig`] with its own RNG.
///
/// Random draws happen in a fixed order per quote (congestion, then section
/// speeds, then one discount flip per line item), so a simulator seeded the
/// same way reproduces the same quotes.
pub struct TripSimulator<'a> {
    config:            &'a TollConfig,
    pub(crate) policy: PricingPolicy,
    rng:               TripRng,
}

impl<'a> TripSimulator<'a> {
    /// Reference policy, RNG seeded from `seed`.
    pub fn new(config: &'a TollConfig, seed: u64) -> Self {
        Self::from_rng(config, TripRng::new(seed))
    }

    pub fn from_rng(config: &'a TollConfig, rng: TripRng) -> Self {
        Self { config, policy: PricingPolicy::default(), rng }
    }

    /// Replace the pricing policy.  Fails if the policy cannot be drawn from.
    pub fn with_policy(mut self, policy: PricingPolicy) -> TollResult<Self> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    /// Quote `request`.
    ///
    /// The route is resolved before any randomness is consumed, so a request
    /// naming an unknown location fails without disturbing later quotes.
    pub fn quote(&mut self, request: &TripRequest) -> TollResult<TripQuote> {
        let route = self.config.route(&request.start, &request.end)?;

        // ── Congestion → base rate ────────────────────────────────────────
        let congestion = CongestionMap::draw(&self.config.locations, &mut self.rng);
        let start_congestion = congestion
            .level(&request.start)
            .ok_or_else(|| TollError::UnknownLocation(request.start.clone()))?;
        let rate_per_km = base_rate_per_km(start_congestion, request.vehicle);
        let vehicles = vehicles_on_road(start_congestion, self.policy.vehicles_at_full_congestion);
        debug!(
            "congestion at {}: {:.2}% → {:.2} INR/km for {}",
            request.start,
            start_congestion * 100.0,
            rate_per_km,
            request.vehicle
        );

        // ── Section speeds ────────────────────────────────────────────────
        let speeds = draw_speeds(&mut self.rng, &self.policy);
        let sections = assess(request.vehicle, speeds, !request.is_round_trip());
        for s in sections.iter().filter(|s| s.violation) {
            warn!("speeding violation in {}: {:.2} km/h", s.section, s.speed_kmh);
        }
        let penalty = speed_penalty(&sections, &self.policy);

        // ── Toll + discounts ──────────────────────────────────────────────
        let toll = self.config.toll(&route.crossings, rate_per_km);
        let discounts: Vec<bool> = toll
            .items
            .iter()
            .map(|_| self.rng.gen_bool(self.policy.discount_probability))
            .collect();
        let discount =
            discounts.iter().filter(|&&d| d).count() as f64 * self.policy.discount_per_item;

        let final_amount = toll.total_cost + penalty - discount;
        info!(
            "{} → {} ({}): {:.2} km, toll {:.2}, penalty {:.2}, discount {:.2}, final {:.2} INR",
            request.start,
            request.end,
            request.vehicle,
            route.total_distance_km,
            toll.total_cost,
            penalty,
            discount,
            final_amount
        );

        Ok(TripQuote {
            request: request.clone(),
            congestion,
            start_congestion,
            rate_per_km,
            vehicles_on_road: vehicles,
            sections,
            route,
            toll,
            discounts,
            penalty,
            discount,
            final_amount,
        })
    }
}
