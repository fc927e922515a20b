//! Quoting many trips at once.
//!
//! Trip `i` is quoted by its own simulator seeded with
//! [`TripRng::for_trip`]`(seed, i)`, so the result vector is the same whether
//! the batch runs sequentially or (with the `parallel` feature) on Rayon.

use toll_core::TollResult;

use crate::{PricingPolicy, TollConfig, TripQuote, TripRequest, TripRng, TripSimulator};

/// Quote every request in `requests`; one result per request, same order.
///
/// A request naming an unknown location yields an `Err` in its slot and does
/// not affect the others.
pub fn quote_batch(
    config:   &TollConfig,
    policy:   PricingPolicy,
    requests: &[TripRequest],
    seed:     u64,
) -> TollResult<Vec<TollResult<TripQuote>>> {
    policy.validate()?;

    let quote_one = |(i, req): (usize, &TripRequest)| {
        let mut sim = TripSimulator::from_rng(config, TripRng::for_trip(seed, i));
        sim.policy = policy;
        sim.quote(req)
    };

    #[cfg(not(feature = "parallel"))]
    {
        Ok(requests.iter().enumerate().map(quote_one).collect())
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        Ok(requests.par_iter().enumerate().map(quote_one).collect())
    }
}
