//! Per-zone toll multipliers.
//!
//! Lookup is total: a zone missing from the table gets the table's default
//! factor instead of an error, so new zones price without a code change.
//! The flip side is that a misspelt zone name also silently prices at the
//! default.  [`MultiplierTable::lookup`] returns which branch was taken so
//! callers (and tests) can tell the two apart.
//!
//! # CSV format
//!
//! ```csv
//! zone,multiplier
//! Zone 1,1.55
//! Zone 2,1.25
//! *,1.45
//! ```
//!
//! The reserved name `*` sets the default factor.  Without it the default is
//! [`DEFAULT_MULTIPLIER`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use toll_core::{TollError, TollResult};

/// Factor applied to zones absent from the table.
pub const DEFAULT_MULTIPLIER: f64 = 1.45;

/// Zone name that sets the default factor in a multiplier CSV.
const DEFAULT_KEY: &str = "*";

/// Outcome of a multiplier lookup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Multiplier {
    /// The zone has its own entry.
    Listed(f64),
    /// The zone is not in the table; the default factor applies.
    Default(f64),
}

impl Multiplier {
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            Multiplier::Listed(f) | Multiplier::Default(f) => f,
        }
    }

    #[inline]
    pub fn is_default(self) -> bool {
        matches!(self, Multiplier::Default(_))
    }
}

/// Ordered `zone name → factor` mapping with an explicit default.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiplierTable {
    entries: Vec<(String, f64)>,
    default: f64,
}

impl MultiplierTable {
    /// An empty table: every zone prices at `default`.
    pub fn new(default: f64) -> Self {
        Self { entries: Vec::new(), default }
    }

    /// Zone 1 → 1.55, Zone 2 → 1.25, Zone 3 → 1.35, anything else → 1.45.
    pub fn reference() -> Self {
        let mut t = Self::new(DEFAULT_MULTIPLIER);
        t.insert("Zone 1", 1.55);
        t.insert("Zone 2", 1.25);
        t.insert("Zone 3", 1.35);
        t
    }

    /// Set the factor for `zone`, replacing any previous entry.
    pub fn insert(&mut self, zone: impl Into<String>, factor: f64) {
        let zone = zone.into();
        match self.entries.iter_mut().find(|(z, _)| *z == zone) {
            Some(entry) => entry.1 = factor,
            None => self.entries.push((zone, factor)),
        }
    }

    pub fn set_default(&mut self, factor: f64) {
        self.default = factor;
    }

    pub fn default_factor(&self) -> f64 {
        self.default
    }

    pub fn lookup(&self, zone: &str) -> Multiplier {
        self.entries
            .iter()
            .find(|(z, _)| z == zone)
            .map_or(Multiplier::Default(self.default), |(_, f)| Multiplier::Listed(*f))
    }

    #[inline]
    pub fn factor(&self, zone: &str) -> f64 {
        self.lookup(zone).factor()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(z, f)| (z.as_str(), *f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MultiplierTable {
    fn default() -> Self {
        Self::reference()
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MultiplierRecord {
    zone:       String,
    multiplier: f64,
}

/// Load a [`MultiplierTable`] from a CSV file.
pub fn load_multipliers_csv(path: &Path) -> TollResult<MultiplierTable> {
    let file = std::fs::File::open(path)?;
    load_multipliers_reader(file)
}

/// Like [`load_multipliers_csv`] but accepts any `Read` source.
pub fn load_multipliers_reader<R: Read>(reader: R) -> TollResult<MultiplierTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut table = MultiplierTable::new(DEFAULT_MULTIPLIER);

    for result in csv_reader.deserialize::<MultiplierRecord>() {
        let row = result.map_err(|e| TollError::Parse(e.to_string()))?;
        if !row.multiplier.is_finite() {
            return Err(TollError::Config(format!(
                "multiplier for {:?} is not a finite number",
                row.zone
            )));
        }
        match row.zone.trim() {
            DEFAULT_KEY => table.set_default(row.multiplier),
            zone => table.insert(zone, row.multiplier),
        }
    }

    Ok(table)
}
