//! `toll-zones` — toll zone polygons and route/zone intersection.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`zone`]   | `Zone`, `ZoneTable`                                         |
//! | [`route`]  | `compute_route`, `RouteSummary`, `ZoneCrossing`             |
//! | [`loader`] | CSV loaders for location and zone tables                    |
//!
//! Geometry is planar in `(lon, lat)` degrees via the `geo` crate; in-zone
//! lengths are converted to kilometres with [`KM_PER_DEGREE`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on route records.          |

pub mod loader;
pub mod route;
pub mod zone;


pub use loader::{load_locations_csv, load_locations_reader, load_zones_csv, load_zones_reader};
pub use route::{KM_PER_DEGREE, RouteSummary, ZoneCrossing, compute_route};
pub use zone::{Zone, ZoneTable};
