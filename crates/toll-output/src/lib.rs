//! `toll-output` — rendering and exporting trip quotes.
//!
//! | Module     | Output                                                   |
//! |------------|----------------------------------------------------------|
//! | [`report`] | Plain-text report (`render_text`, `TextWriter`)          |
//! | [`csv`]    | `trips.csv`, `line_items.csv` (`CsvWriter`)              |
//! | [`map`]    | GeoJSON `FeatureCollection` (`MapDocument`)              |
//!
//! `TextWriter` and `CsvWriter` implement [`OutputWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use toll_output::{CsvWriter, OutputWriter, render_text};
//!
//! let mut csv = CsvWriter::new(Path::new("./output"))?;
//! csv.write_quote(&quote)?;
//! csv.finish()?;
//! print!("{}", render_text(&quote));
//! ```

pub mod csv;
pub mod error;
pub mod map;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use map::{Feature, Geometry, MapDocument};
pub use report::{TextWriter, render_text, write_text};
pub use row::{LineItemRow, TripRow};
pub use writer::OutputWriter;
