//! Plain-text trip report.
//!
//! Four sections, in order: dynamic pricing, speeds, toll line items, and
//! the total.  Figures carry two decimals; speed limits print as whole km/h.

use std::fmt::Write as _;
use std::io::Write;

use toll_sim::TripQuote;

use crate::writer::OutputWriter;
use crate::OutputResult;

pub const TITLE: &str = "GPS-Based Toll System Simulation";

/// Render `quote` as a multi-line report.
pub fn render_text(quote: &TripQuote) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = fill(&mut out, quote);
    out
}

/// Write the report for `quote` to `w`.
pub fn write_text<W: Write>(w: &mut W, quote: &TripQuote) -> OutputResult<()> {
    w.write_all(render_text(quote).as_bytes())?;
    Ok(())
}

fn fill(out: &mut String, q: &TripQuote) -> std::fmt::Result {
    let start = &q.request.start;

    writeln!(out, "=== {TITLE} ===")?;
    writeln!(out, "{} -> {} ({})", start, q.request.end, q.request.vehicle)?;

    writeln!(out)?;
    writeln!(out, "-- Dynamic Pricing Information --")?;
    for (loc, level) in q.congestion.iter() {
        writeln!(out, "{loc}: {:.2}%", level * 100.0)?;
    }
    writeln!(out, "Price per km in {start}: {:.2} INR/km", q.rate_per_km)?;
    writeln!(out, "Number of vehicles on the road in {start}: {}", q.vehicles_on_road)?;

    writeln!(out)?;
    writeln!(out, "-- Speed Information --")?;
    for s in &q.sections {
        match s.limit_kmh {
            Some(limit) => writeln!(out, "{} - Speed Limit: {limit:.0} km/h", s.section)?,
            None => writeln!(out, "{} - Speed Limit: No limit", s.section)?,
        }
        writeln!(out, "{} - Vehicle Speed: {:.2} km/h", s.section, s.speed_kmh)?;
    }
    for s in q.violations() {
        writeln!(out, "Speeding violation in {}", s.section)?;
    }

    writeln!(out)?;
    writeln!(out, "-- Toll Information --")?;
    if q.toll.is_empty() {
        writeln!(out, "No toll zones crossed")?;
    }
    for item in &q.toll.items {
        writeln!(
            out,
            "{}: Distance: {:.2} km, Cost: {:.2} INR",
            item.zone_name, item.distance_km, item.cost
        )?;
    }

    writeln!(out)?;
    writeln!(out, "-- Total Amount --")?;
    writeln!(out, "Total Distance: {:.2} km", q.route.total_distance_km)?;
    writeln!(out, "Total Toll: {:.2} INR", q.toll.total_cost)?;
    writeln!(out, "Penalties: {:.2} INR", q.penalty)?;
    writeln!(out, "Toll Discount: {:.2} INR", q.discount)?;
    writeln!(out, "Final Amount: {:.2} INR", q.final_amount)?;
    Ok(())
}

// ── TextWriter ────────────────────────────────────────────────────────────────

/// [`OutputWriter`] that appends text reports to any `io::Write`, separated
/// by blank lines.
pub struct TextWriter<W: Write> {
    inner:    W,
    written:  usize,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0, finished: false }
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_quote(&mut self, quote: &TripQuote) -> OutputResult<()> {
        if self.written > 0 {
            writeln!(self.inner)?;
        }
        write_text(&mut self.inner, quote)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
