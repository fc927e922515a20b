//! `toll-core` — foundational types for the toll-road trip simulator.
//!
//! This crate is a dependency of every other `toll-*` crate.  It intentionally
//! has no `toll-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance                        |
//! | [`location`]    | `LocationTable` (name → coordinates)                  |
//! | [`vehicle`]     | `VehicleType`, `Section`, speed limits                |
//! | [`error`]       | `TollError`, `TollResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod location;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TollError, TollResult};
pub use geo::{GeoPoint, distance, EARTH_RADIUS_KM};
pub use location::LocationTable;
pub use vehicle::{Section, VehicleType};
