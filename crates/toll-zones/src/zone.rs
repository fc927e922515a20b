//! Toll zone polygons.
//!
//! # Coordinate convention
//!
//! Polygon vertices are `(x, y) = (lon, lat)` in decimal degrees, the same
//! plane the route segment is built in.  Rings are implicitly closed: the
//! last vertex connects back to the first.
//!
//! Zones may overlap.  Nothing here validates polygon shape; a degenerate
//! ring simply never reports an intersection with positive length.

use geo::{BoundingRect, Coord, LineString, Polygon, Rect};

use toll_core::GeoPoint;

// ── Zone ──────────────────────────────────────────────────────────────────────

/// A named toll polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub name: String,
    pub polygon: Polygon<f64>,
}

impl Zone {
    /// Build a zone from `(lon, lat)` vertex pairs.
    pub fn new(name: impl Into<String>, vertices: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            polygon: Polygon::new(LineString::from(vertices), vec![]),
        }
    }

    /// Axis-aligned bounding rectangle in `(lon, lat)`, or `None` for a
    /// polygon with no vertices.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.polygon.bounding_rect()
    }

    /// Midpoint of the bounding rectangle, used as the zone's map marker.
    pub fn center(&self) -> Option<GeoPoint> {
        self.bounds().map(|r| {
            let Coord { x, y } = r.center();
            GeoPoint::new(y, x)
        })
    }

    /// Exterior ring vertices as `(lon, lat)`, closing vertex included.
    pub fn ring(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.polygon.exterior().coords().map(|c| (c.x, c.y))
    }
}

// ── ZoneTable ─────────────────────────────────────────────────────────────────

/// Ordered set of zones with unique names.
///
/// Iteration (and therefore crossing) order is insertion order, not spatial
/// order along a route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoneTable {
    zones: Vec<Zone>,
}

impl ZoneTable {
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    /// The four reference zones.
    pub fn reference() -> Self {
        let mut t = Self::new();
        t.insert(Zone::new("Zone 1", vec![(77.5, 28.9), (78.0, 28.9), (78.0, 28.7), (77.5, 28.7)]));
        t.insert(Zone::new("Zone 2", vec![(77.05, 28.0), (77.55, 28.0), (77.55, 27.75), (77.05, 27.75)]));
        t.insert(Zone::new("Zone 3", vec![(77.2, 28.1), (77.5, 28.1), (77.5, 28.4), (77.2, 28.4)]));
        t.insert(Zone::new("Zone 4", vec![(77.65, 27.85), (78.05, 27.85), (78.05, 28.25), (77.65, 28.25)]));
        t
    }

    /// Add a zone.  A zone with an existing name replaces the old polygon and
    /// keeps its position.
    pub fn insert(&mut self, zone: Zone) {
        match self.zones.iter_mut().find(|z| z.name == zone.name) {
            Some(slot) => *slot = zone,
            None => self.zones.push(zone),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
