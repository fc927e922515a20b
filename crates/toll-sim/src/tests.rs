//! Unit tests for toll-sim.

use toll_core::VehicleType;

use crate::{PricingPolicy, TollConfig, TripRequest};

fn req(start: &str, end: &str, vehicle: VehicleType) -> TripRequest {
    TripRequest::new(start, end, vehicle)
}

/// Policy whose speed draws always exceed every car/SUV/truck limit.
fn always_speeding() -> PricingPolicy {
    PricingPolicy { speed_range_kmh: (200.0, 201.0), ..PricingPolicy::default() }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── TripRng ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rng {
    use crate::TripRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TripRng::new(12345);
        let mut r2 = TripRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn adjacent_trips_diverge() {
        let mut r0 = TripRng::for_trip(1, 0);
        let mut r1 = TripRng::for_trip(1, 1);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = TripRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities are clamped, not panics.
        assert!(rng.gen_bool(7.0));
    }
}

// ── Congestion & speeds ───────────────────────────────────────────────────────

#[cfg(test)]
mod rules {
    use toll_core::{LocationTable, Section, VehicleType};

    use crate::speed::{assess, draw_speeds, speed_penalty};
    use crate::{CongestionMap, PricingPolicy, TripRng, base_rate_per_km, vehicles_on_road};

    #[test]
    fn congestion_one_level_per_location_in_order() {
        let locs = LocationTable::reference();
        let map = CongestionMap::draw(&locs, &mut TripRng::new(7));
        let names: Vec<_> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Meerut", "Mathura", "Gurugram", "Agra"]);
        for (_, level) in map.iter() {
            assert!((0.0..1.0).contains(&level));
        }
        assert!(map.level("Delhi").is_none());
    }

    #[test]
    fn base_rate_scales_with_congestion() {
        assert_eq!(base_rate_per_km(1.0, VehicleType::Truck), 0.5);
        assert_eq!(base_rate_per_km(0.5, VehicleType::Car), 0.125);
        assert_eq!(base_rate_per_km(0.9, VehicleType::Ambulance), 0.0);
    }

    #[test]
    fn vehicle_count_rounds() {
        assert_eq!(vehicles_on_road(0.0, 500.0), 0);
        assert_eq!(vehicles_on_road(0.4321, 500.0), 216);
        assert_eq!(vehicles_on_road(0.9995, 500.0), 500);
    }

    #[test]
    fn speeds_within_policy_range() {
        let policy = PricingPolicy::default();
        let mut rng = TripRng::new(3);
        for _ in 0..200 {
            for s in draw_speeds(&mut rng, &policy) {
                assert!((50.0..120.0).contains(&s), "got {s}");
            }
        }
    }

    #[test]
    fn violation_only_above_limit_and_when_enforced() {
        let speeds = [85.0, 95.0, 130.0]; // Car limits 80 / 100 / 120
        let readings = assess(VehicleType::Car, speeds, true);
        let flags: Vec<_> = readings.iter().map(|r| r.violation).collect();
        assert_eq!(flags, [true, false, true]);
        assert_eq!(readings[0].section, Section::A);
        assert_eq!(readings[0].limit_kmh, Some(80.0));
        assert_eq!(speed_penalty(&readings, &PricingPolicy::default()), 1000.0);

        let relaxed = assess(VehicleType::Car, speeds, false);
        assert!(relaxed.iter().all(|r| !r.violation));
        assert_eq!(relaxed[2].speed_kmh, 130.0);
    }

    #[test]
    fn speed_equal_to_limit_is_not_a_violation() {
        let readings = assess(VehicleType::Truck, [70.0, 80.0, 90.0], true);
        assert!(readings.iter().all(|r| !r.violation));
    }

    #[test]
    fn ambulance_never_violates() {
        let readings = assess(VehicleType::Ambulance, [500.0, 500.0, 500.0], true);
        assert!(readings.iter().all(|r| !r.violation && r.limit_kmh.is_none()));
    }
}

// ── PricingPolicy ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use toll_core::TollError;

    use crate::{PricingPolicy, TollConfig, TripSimulator};

    #[test]
    fn default_is_valid() {
        assert!(PricingPolicy::default().validate().is_ok());
    }

    #[test]
    fn empty_speed_range_rejected() {
        let p = PricingPolicy { speed_range_kmh: (100.0, 100.0), ..PricingPolicy::default() };
        assert!(matches!(p.validate(), Err(TollError::Config(_))));
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let config = TollConfig::reference();
        let p = PricingPolicy { discount_probability: 1.5, ..PricingPolicy::default() };
        assert!(TripSimulator::new(&config, 0).with_policy(p).is_err());
    }
}

// ── TripSimulator ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod simulator {
    use toll_core::{TollError, VehicleType};

    use crate::{PricingPolicy, TollConfig, TripSimulator};
    use super::{always_speeding, approx, req};

    #[test]
    fn same_seed_same_quote() {
        let config = TollConfig::reference();
        let r = req("Meerut", "Mathura", VehicleType::Car);
        let a = TripSimulator::new(&config, 99).quote(&r).unwrap();
        let b = TripSimulator::new(&config, 99).quote(&r).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn quote_arithmetic_is_consistent() {
        let config = TollConfig::reference();
        let mut sim = TripSimulator::new(&config, 5);
        for vehicle in VehicleType::ALL {
            let q = sim.quote(&req("Meerut", "Mathura", vehicle)).unwrap();
            assert_eq!(q.congestion.level("Meerut"), Some(q.start_congestion));
            assert!(approx(q.rate_per_km, q.start_congestion * vehicle.base_rate_factor()));
            assert_eq!(q.vehicles_on_road, (q.start_congestion * 500.0).round() as u32);
            assert_eq!(q.discounts.len(), q.toll.items.len());
            let flips = q.discounts.iter().filter(|&&d| d).count() as f64;
            assert_eq!(q.discount, flips * 150.0);
            assert_eq!(q.penalty, q.violations().count() as f64 * 500.0);
            assert!(approx(q.final_amount, q.toll.total_cost + q.penalty - q.discount));
        }
    }

    #[test]
    fn route_matches_pipeline() {
        let config = TollConfig::reference();
        let q = TripSimulator::new(&config, 1)
            .quote(&req("Meerut", "Mathura", VehicleType::Suv))
            .unwrap();
        assert_eq!(q.route, config.route("Meerut", "Mathura").unwrap());
        assert_eq!(q.toll, config.toll(&q.route.crossings, q.rate_per_km));
    }

    #[test]
    fn unknown_location_rejected_without_consuming_randomness() {
        let config = TollConfig::reference();
        let good = req("Gurugram", "Agra", VehicleType::Truck);

        let mut sim = TripSimulator::new(&config, 11);
        let err = sim.quote(&req("Delhi", "Agra", VehicleType::Car)).unwrap_err();
        assert!(matches!(err, TollError::UnknownLocation(ref n) if n == "Delhi"));
        let after_error = sim.quote(&good).unwrap();

        let fresh = TripSimulator::new(&config, 11).quote(&good).unwrap();
        assert_eq!(after_error, fresh);
    }

    #[test]
    fn speeding_penalised_per_section() {
        let config = TollConfig::reference();
        let mut sim = TripSimulator::new(&config, 2).with_policy(always_speeding()).unwrap();
        let q = sim.quote(&req("Meerut", "Mathura", VehicleType::Car)).unwrap();
        assert_eq!(q.violations().count(), 3);
        assert_eq!(q.penalty, 1500.0);
    }

    #[test]
    fn same_location_trip_has_no_penalty() {
        let config = TollConfig::reference();
        let mut sim = TripSimulator::new(&config, 2).with_policy(always_speeding()).unwrap();
        let q = sim.quote(&req("Agra", "Agra", VehicleType::Truck)).unwrap();
        assert_eq!(q.route.total_distance_km, 0.0);
        assert_eq!(q.penalty, 0.0);
        assert_eq!(q.sections.len(), 3);
        assert!(q.toll.is_empty());
        assert_eq!(q.final_amount, 0.0);
    }

    #[test]
    fn ambulance_rides_free_and_unpenalised() {
        let config = TollConfig::reference();
        let policy = PricingPolicy { discount_probability: 0.0, ..always_speeding() };
        let mut sim = TripSimulator::new(&config, 8).with_policy(policy).unwrap();
        let q = sim.quote(&req("Meerut", "Mathura", VehicleType::Ambulance)).unwrap();
        assert_eq!(q.rate_per_km, 0.0);
        assert_eq!(q.toll.total_cost, 0.0);
        assert_eq!(q.penalty, 0.0);
        assert_eq!(q.final_amount, 0.0);
    }

    #[test]
    fn certain_discount_on_every_line_item() {
        let config = TollConfig::reference();
        let policy = PricingPolicy { discount_probability: 1.0, ..PricingPolicy::default() };
        let mut sim = TripSimulator::new(&config, 4).with_policy(policy).unwrap();
        let q = sim.quote(&req("Meerut", "Mathura", VehicleType::Car)).unwrap();
        assert_eq!(q.toll.items.len(), 2);
        assert!(q.discounts.iter().all(|&d| d));
        assert_eq!(q.discount, 300.0);
        // Discounts can exceed the toll; the final amount is not clamped.
        assert!(q.final_amount < q.toll.total_cost + q.penalty);
    }
}

// ── Batch quoting ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use toll_core::{TollError, VehicleType};

    use crate::{PricingPolicy, TollConfig, TripRng, TripSimulator, quote_batch};
    use super::req;

    #[test]
    fn each_slot_matches_its_own_seeded_simulator() {
        let config = TollConfig::reference();
        let requests = vec![
            req("Meerut", "Mathura", VehicleType::Car),
            req("Delhi", "Agra", VehicleType::Car),
            req("Gurugram", "Agra", VehicleType::Suv),
            req("Agra", "Meerut", VehicleType::Truck),
        ];
        let results = quote_batch(&config, PricingPolicy::default(), &requests, 42).unwrap();
        assert_eq!(results.len(), requests.len());

        for (i, (result, r)) in results.iter().zip(&requests).enumerate() {
            let expected = TripSimulator::from_rng(&config, TripRng::for_trip(42, i)).quote(r);
            match (result, expected) {
                (Ok(got), Ok(want)) => assert_eq!(*got, want),
                (Err(TollError::UnknownLocation(a)), Err(TollError::UnknownLocation(b))) => {
                    assert_eq!(*a, b)
                }
                (got, want) => panic!("slot {i}: {got:?} vs {want:?}"),
            }
        }
        assert!(results[1].is_err());
    }

    #[test]
    fn invalid_policy_rejects_whole_batch() {
        let config = TollConfig::reference();
        let policy = PricingPolicy { discount_probability: -0.1, ..PricingPolicy::default() };
        let requests = [req("Meerut", "Agra", VehicleType::Car)];
        assert!(quote_batch(&config, policy, &requests, 0).is_err());
    }

    #[test]
    fn empty_batch() {
        let config = TollConfig::reference();
        let results = quote_batch(&config, PricingPolicy::default(), &[], 0).unwrap();
        assert!(results.is_empty());
    }
}

// ── TollConfig ────────────────────────────────────────────────────────────────

#[test]
fn config_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TollConfig>();
}
