//! The `OutputWriter` trait implemented by all backend writers.

use toll_sim::TripQuote;

use crate::OutputResult;

/// Trait implemented by the CSV and text writers.
pub trait OutputWriter {
    /// Write one quoted trip.
    fn write_quote(&mut self, quote: &TripQuote) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
