//! GeoJSON map document for a quoted trip.
//!
//! The document is a `FeatureCollection` any web map can load.  Every
//! feature carries a `kind` property:
//!
//! | `kind`        | Geometry     | Extra properties        |
//! |---------------|--------------|-------------------------|
//! | `start`       | `Point`      | `name`                  |
//! | `end`         | `Point`      | `name`                  |
//! | `route`       | `LineString` | `distance_km`           |
//! | `zone`        | `Polygon`    | `name`, `crossed`       |
//! | `zone_center` | `Point`      | `name`                  |
//! | `heat`        | `Point`      | `name`, `weight`        |
//!
//! Heat points are one per location, weighted by its congestion level.
//! Coordinates follow GeoJSON order: `[lon, lat]`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::{Value, json};

use toll_core::GeoPoint;
use toll_sim::{TollConfig, TripQuote};

use crate::OutputResult;

/// Suggested initial zoom for a viewer centred on [`MapDocument::center`].
pub const DEFAULT_ZOOM: u8 = 7;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point([f64; 2]),
    LineString(Vec<[f64; 2]>),
    Polygon(Vec<Vec<[f64; 2]>>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind:           &'static str,
    pub geometry:   Geometry,
    pub properties: Value,
}

impl Feature {
    fn new(geometry: Geometry, properties: Value) -> Self {
        Self { kind: "Feature", geometry, properties }
    }

    /// The feature's `kind` property, if any.
    pub fn kind(&self) -> Option<&str> {
        self.properties.get("kind").and_then(Value::as_str)
    }
}

/// A GeoJSON `FeatureCollection` plus the viewer centre.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapDocument {
    #[serde(rename = "type")]
    kind:         &'static str,
    pub features: Vec<Feature>,
    /// Midpoint of start and end, `[lon, lat]`.  A foreign member; viewers
    /// that do not know it ignore it.
    pub center:   [f64; 2],
    pub zoom:     u8,
}

impl MapDocument {
    pub fn from_quote(config: &TollConfig, quote: &TripQuote) -> Self {
        let start = quote.route.start;
        let end = quote.route.end;
        let mut features = Vec::with_capacity(3 + 2 * config.zones.len() + quote.congestion.len());

        features.push(Feature::new(
            Geometry::Point(xy(start)),
            json!({ "kind": "start", "name": quote.request.start }),
        ));
        features.push(Feature::new(
            Geometry::Point(xy(end)),
            json!({ "kind": "end", "name": quote.request.end }),
        ));
        features.push(Feature::new(
            Geometry::LineString(vec![xy(start), xy(end)]),
            json!({ "kind": "route", "distance_km": quote.route.total_distance_km }),
        ));

        for zone in config.zones.iter() {
            let crossed = quote.route.crossings.iter().any(|c| c.zone_name == zone.name);
            let ring: Vec<[f64; 2]> = zone.ring().map(|(x, y)| [x, y]).collect();
            features.push(Feature::new(
                Geometry::Polygon(vec![ring]),
                json!({ "kind": "zone", "name": zone.name, "crossed": crossed }),
            ));
            if let Some(c) = zone.center() {
                features.push(Feature::new(
                    Geometry::Point(xy(c)),
                    json!({ "kind": "zone_center", "name": zone.name }),
                ));
            }
        }

        for (name, weight) in quote.congestion.iter() {
            if let Some(pos) = config.locations.get(name) {
                features.push(Feature::new(
                    Geometry::Point(xy(pos)),
                    json!({ "kind": "heat", "name": name, "weight": weight }),
                ));
            }
        }

        let center = [(start.lon + end.lon) / 2.0, (start.lat + end.lat) / 2.0];
        Self { kind: "FeatureCollection", features, center, zoom: DEFAULT_ZOOM }
    }

    /// Features whose `kind` property equals `kind`.
    pub fn features_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Feature> + 'a {
        self.features.iter().filter(move |f| f.kind() == Some(kind))
    }

    pub fn to_json_string(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> OutputResult<()> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, self)?;
        w.flush()?;
        Ok(())
    }
}

#[inline]
fn xy(p: GeoPoint) -> [f64; 2] {
    [p.lon, p.lat]
}
