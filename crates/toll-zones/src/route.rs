//! Straight-line routes and the zones they cross.
//!
//! # Geometry
//!
//! A route is the chord between two location coordinates, built in the
//! `(lon, lat)` plane.  Each zone is tested with the planar `Intersects`
//! predicate; for intersecting zones the polygon clips the segment and the
//! clipped pieces' total length (degrees) is scaled by [`KM_PER_DEGREE`].
//! The equirectangular scale ignores latitude shrinkage of longitude, which
//! is accepted for zones a few tenths of a degree wide.
//!
//! `clip` keeps only the interior pieces, so stretches where the route runs
//! along a ring edge are measured separately and added: the intersection
//! includes the boundary.  Each edge overlap counts once.
//!
//! A zone clipped into several disjoint pieces still yields one crossing;
//! the piece lengths are summed.
//!
//! # Degenerate routes
//!
//! When start and end coincide the segment has zero length.  No clipping is
//! attempted: the zone is crossed iff the point lies in or on the polygon,
//! and the crossing length is 0.

use geo::{
    BooleanOps, Coord, EuclideanLength, Intersects, Line, LineString, MultiLineString, Point, Polygon,
};

use toll_core::{GeoPoint, LocationTable, TollResult};

use crate::{Zone, ZoneTable};

/// Kilometres per degree of arc at the equator.
pub const KM_PER_DEGREE: f64 = 111.32;

/// Largest perpendicular offset (degrees) at which a ring edge still counts
/// as lying on the route.
const COLLINEAR_TOLERANCE_DEG: f64 = 1e-9;

// ── Records ───────────────────────────────────────────────────────────────────

/// The part of a route that lies inside one zone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneCrossing {
    pub zone_name: String,
    pub distance_km: f64,
}

impl ZoneCrossing {
    pub fn new(zone_name: impl Into<String>, distance_km: f64) -> Self {
        Self { zone_name: zone_name.into(), distance_km }
    }
}

/// Result of [`compute_route`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    pub start: GeoPoint,
    pub end: GeoPoint,
    /// Great-circle distance between the endpoints.
    pub total_distance_km: f64,
    /// Crossed zones in zone-table order.
    pub crossings: Vec<ZoneCrossing>,
}

impl RouteSummary {
    /// `true` if start and end are the same point.
    pub fn is_trivial(&self) -> bool {
        self.start == self.end
    }

    /// Sum of all in-zone distances.  Overlapping zones count their shared
    /// stretch once per zone.
    pub fn tolled_distance_km(&self) -> f64 {
        self.crossings.iter().map(|c| c.distance_km).sum()
    }

}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Resolve `start` and `end`, measure the trip, and list the zones crossed.
///
/// Fails with [`toll_core::TollError::UnknownLocation`] if either name is
/// absent (start is checked first); no partial result is produced.
pub fn compute_route(
    locations: &LocationTable,
    zones: &ZoneTable,
    start: &str,
    end: &str,
) -> TollResult<RouteSummary> {
    let start = locations.resolve(start)?;
    let end = locations.resolve(end)?;

    let total_distance_km = start.distance_km(end);
    let line = segment(start, end);

    let crossings = zones
        .iter()
        .filter_map(|zone| {
            in_zone_length_deg(zone, &line)
                .map(|deg| ZoneCrossing::new(zone.name.clone(), deg * KM_PER_DEGREE))
        })
        .collect();

    Ok(RouteSummary { start, end, total_distance_km, crossings })
}

/// Length in degrees of the part of `line` inside `zone`, or `None` if the
/// two do not intersect.
pub fn in_zone_length_deg(zone: &Zone, line: &Line<f64>) -> Option<f64> {
    if line.start == line.end {
        let p = Point::from(line.start);
        return p.intersects(&zone.polygon).then_some(0.0);
    }

    if !line.intersects(&zone.polygon) {
        return None;
    }

    let path = MultiLineString::new(vec![LineString::from(*line)]);
    let inside = zone.polygon.clip(&path, false);
    Some(inside.euclidean_length() + boundary_overlap_deg(&zone.polygon, line))
}

/// Total length of `line` lying on the polygon's ring edges.
fn boundary_overlap_deg(polygon: &Polygon<f64>, line: &Line<f64>) -> f64 {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .flat_map(|ring| ring.lines())
        .map(|edge| collinear_overlap_deg(line, &edge))
        .sum()
}

/// Length of the shared stretch of `line` and `edge`, or 0 unless the edge
/// lies on the line's supporting line.
fn collinear_overlap_deg(line: &Line<f64>, edge: &Line<f64>) -> f64 {
    let d = line.delta();
    let len_sq = d.x * d.x + d.y * d.y;
    if len_sq == 0.0 {
        return 0.0;
    }
    let len = len_sq.sqrt();
    let o = line.start;

    let offset = |c: Coord<f64>| (d.x * (c.y - o.y) - d.y * (c.x - o.x)).abs() / len;
    if offset(edge.start) > COLLINEAR_TOLERANCE_DEG || offset(edge.end) > COLLINEAR_TOLERANCE_DEG {
        return 0.0;
    }

    // Edge endpoints as fractions along `line`.
    let t = |c: Coord<f64>| (d.x * (c.x - o.x) + d.y * (c.y - o.y)) / len_sq;
    let (a, b) = (t(edge.start), t(edge.end));
    let lo = a.min(b).max(0.0);
    let hi = a.max(b).min(1.0);
    (hi - lo).max(0.0) * len
}

#[inline]
fn segment(start: GeoPoint, end: GeoPoint) -> Line<f64> {
    let (x0, y0) = start.lon_lat();
    let (x1, y1) = end.lon_lat();
    Line::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 })
}
