//! CSV loaders for the location and zone tables.
//!
//! # Locations
//!
//! ```csv
//! name,lat,lon
//! Meerut,28.9845,77.7064
//! Agra,27.1767,78.0081
//! ```
//!
//! # Zones
//!
//! One row per polygon vertex, vertices in ring order.  Rows for one zone
//! need not be contiguous; zones are ordered by the first appearance of
//! their name.
//!
//! ```csv
//! zone,lon,lat
//! Zone 1,77.5,28.9
//! Zone 1,78.0,28.9
//! Zone 1,78.0,28.7
//! Zone 1,77.5,28.7
//! ```
//!
//! Polygon shape is not validated; see [`crate::zone`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use toll_core::{GeoPoint, LocationTable, TollError, TollResult};

use crate::{Zone, ZoneTable};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    name: String,
    lat:  f64,
    lon:  f64,
}

#[derive(Deserialize)]
struct VertexRecord {
    zone: String,
    lon:  f64,
    lat:  f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`LocationTable`] from a CSV file.
pub fn load_locations_csv(path: &Path) -> TollResult<LocationTable> {
    let file = std::fs::File::open(path)?;
    load_locations_reader(file)
}

/// Like [`load_locations_csv`] but accepts any `Read` source.
pub fn load_locations_reader<R: Read>(reader: R) -> TollResult<LocationTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut table = LocationTable::new();

    for result in csv_reader.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| TollError::Parse(e.to_string()))?;
        table.insert(row.name.trim(), GeoPoint::new(row.lat, row.lon));
    }

    Ok(table)
}

/// Load a [`ZoneTable`] from a CSV file.
pub fn load_zones_csv(path: &Path) -> TollResult<ZoneTable> {
    let file = std::fs::File::open(path)?;
    load_zones_reader(file)
}

/// Like [`load_zones_csv`] but accepts any `Read` source.
pub fn load_zones_reader<R: Read>(reader: R) -> TollResult<ZoneTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rings: Vec<(String, Vec<(f64, f64)>)> = Vec::new();

    for result in csv_reader.deserialize::<VertexRecord>() {
        let row = result.map_err(|e| TollError::Parse(e.to_string()))?;
        let name = row.zone.trim();
        match rings.iter_mut().find(|(n, _)| n == name) {
            Some((_, ring)) => ring.push((row.lon, row.lat)),
            None => rings.push((name.to_owned(), vec![(row.lon, row.lat)])),
        }
    }

    let mut table = ZoneTable::new();
    for (name, ring) in rings {
        table.insert(Zone::new(name, ring));
    }
    Ok(table)
}
