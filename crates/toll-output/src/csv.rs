//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trips.csv`
//! - `line_items.csv`
//!
//! Money and distances are written with two decimals, the precision the
//! text report shows.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use toll_sim::TripQuote;

use crate::row::{LineItemRow, TripRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

pub const TRIPS_FILE: &str = "trips.csv";
pub const LINE_ITEMS_FILE: &str = "line_items.csv";

/// Writes quoted trips to two CSV files.
pub struct CsvWriter {
    trips:      Writer<File>,
    line_items: Writer<File>,
    next_trip:  u64,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join(TRIPS_FILE))?;
        trips.write_record([
            "trip", "start", "end", "vehicle", "distance_km", "rate_per_km",
            "total_toll", "penalty", "discount", "final_amount",
        ])?;

        let mut line_items = Writer::from_path(dir.join(LINE_ITEMS_FILE))?;
        line_items.write_record(["trip", "zone", "distance_km", "cost", "discounted"])?;

        Ok(Self {
            trips,
            line_items,
            next_trip: 0,
            finished: false,
        })
    }

    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()> {
        self.trips.write_record(&[
            row.trip.to_string(),
            row.start.clone(),
            row.end.clone(),
            row.vehicle.to_owned(),
            format!("{:.2}", row.distance_km),
            format!("{:.2}", row.rate_per_km),
            format!("{:.2}", row.total_toll),
            format!("{:.2}", row.penalty),
            format!("{:.2}", row.discount),
            format!("{:.2}", row.final_amount),
        ])?;
        Ok(())
    }

    fn write_line_items(&mut self, rows: &[LineItemRow]) -> OutputResult<()> {
        for row in rows {
            self.line_items.write_record(&[
                row.trip.to_string(),
                row.zone.clone(),
                format!("{:.2}", row.distance_km),
                format!("{:.2}", row.cost),
                (row.discounted as u8).to_string(),
            ])?;
        }
        Ok(())
    }
}

impl OutputWriter for CsvWriter {
    fn write_quote(&mut self, quote: &TripQuote) -> OutputResult<()> {
        let trip = self.next_trip;
        self.next_trip += 1;
        self.write_trip(&TripRow::from_quote(trip, quote))?;
        self.write_line_items(&LineItemRow::from_quote(trip, quote))
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.line_items.flush()?;
        Ok(())
    }
}
