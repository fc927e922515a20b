//! `toll-pricing` — turning zone crossings into money.
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`multiplier`] | `MultiplierTable`, `Multiplier`, CSV loader            |
//! | [`toll`]       | `compute_toll`, `TollBreakdown`, `TollLineItem`        |
//!
//! The base rate is an opaque input here.  How it is derived (congestion,
//! vehicle class) is the caller's business; see `toll-sim`.

pub mod multiplier;
pub mod toll;


pub use multiplier::{DEFAULT_MULTIPLIER, Multiplier, MultiplierTable, load_multipliers_csv, load_multipliers_reader};
pub use toll::{TollBreakdown, TollLineItem, compute_toll};
