//! `toll-sim` — seeded trip simulation around the toll pipeline.
//!
//! # One quote
//!
//! ```text
//! ① Route       — compute_route(start, end); unknown names reject here.
//! ② Congestion  — one level in [0, 1) per location; the start's level
//!                 times the vehicle's base factor is the rate per km.
//! ③ Speeds      — one draw per section; each draw above the vehicle's
//!                 limit costs a penalty (not on same-place trips).
//! ④ Toll        — compute_toll(crossings, rate).
//! ⑤ Discounts   — one coin flip per toll line item.
//! ⑥ Final       — toll + penalty − discount.
//! ```
//!
//! All randomness flows through [`TripRng`]; the pipeline crates underneath
//! (`toll-zones`, `toll-pricing`) stay deterministic.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`quote_batch`] on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use toll_core::VehicleType;
//! use toll_sim::{TollConfig, TripRequest, TripSimulator};
//!
//! let config = TollConfig::reference();
//! let mut sim = TripSimulator::new(&config, 42);
//! let quote = sim.quote(&TripRequest::new("Meerut", "Mathura", VehicleType::Car))?;
//! println!("{:.2} INR", quote.final_amount);
//! ```

pub mod batch;
pub mod config;
pub mod congestion;
pub mod rng;
pub mod speed;
pub mod trip;

#[cfg(test)]
mod tests;

pub use batch::quote_batch;
pub use config::{PricingPolicy, TollConfig};
pub use congestion::{CongestionMap, base_rate_per_km, vehicles_on_road};
pub use rng::TripRng;
pub use speed::SectionReading;
pub use trip::{TripQuote, TripRequest, TripSimulator};
