//! Named locations and their coordinates.
//!
//! The table is small (a handful of cities), so it is a plain `Vec` scanned
//! linearly.  Iteration order is insertion order; congestion draws and map
//! heat points rely on that order being stable.

use crate::{GeoPoint, TollError, TollResult};

/// Ordered `name → GeoPoint` mapping.  Names are unique.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationTable {
    entries: Vec<(String, GeoPoint)>,
}

impl LocationTable {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// The four-city reference deployment.
    pub fn reference() -> Self {
        let mut t = Self::new();
        t.insert("Meerut",   GeoPoint::new(28.9845, 77.7064));
        t.insert("Mathura",  GeoPoint::new(27.4924, 77.6737));
        t.insert("Gurugram", GeoPoint::new(28.4595, 77.0266));
        t.insert("Agra",     GeoPoint::new(27.1767, 78.0081));
        t
    }

    /// Add a location.  Re-inserting an existing name replaces its
    /// coordinates and keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, pos: GeoPoint) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = pos,
            None => self.entries.push((name, pos)),
        }
    }

    pub fn get(&self, name: &str) -> Option<GeoPoint> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| *p)
    }

    /// Like [`get`](Self::get) but fails with [`TollError::UnknownLocation`].
    pub fn resolve(&self, name: &str) -> TollResult<GeoPoint> {
        self.get(name)
            .ok_or_else(|| TollError::UnknownLocation(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, GeoPoint)> + '_ {
        self.entries.iter().map(|(n, p)| (n.as_str(), *p))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
