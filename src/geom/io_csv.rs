//! CSV reading of labeled rectangle sets.
//!
//! One rectangle per row with the header `id,x0,y0,x1,y1`, where
//! `(x0, y0)` and `(x1, y1)` are opposite corners in any order.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::model::{RectEntry, RectSet};
use super::{Rect, RectId};
use crate::error::OverlapError;

#[derive(Debug, Deserialize)]
struct RectRow {
    id: u64,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl From<RectRow> for RectEntry {
    fn from(row: RectRow) -> Self {
        RectEntry {
            id: RectId(row.id),
            rect: Rect::from_corners(row.x0, row.y0, row.x1, row.y1),
        }
    }
}

/// Reads a rectangle set from a CSV file.
///
/// # Errors
/// Returns an error if the file cannot be read or a row does not parse.
pub fn read_rects_csv(path: &Path) -> Result<RectSet, OverlapError> {
    let file = File::open(path).map_err(OverlapError::Io)?;
    read_rows(BufReader::new(file)).map_err(|source| OverlapError::CsvParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a rectangle set from a CSV string.
pub fn from_csv_str(csv: &str) -> Result<RectSet, csv::Error> {
    read_rows(csv.as_bytes())
}

/// Reads a rectangle set from CSV bytes.
pub fn from_csv_slice(bytes: &[u8]) -> Result<RectSet, csv::Error> {
    read_rows(bytes)
}

fn read_rows<R: Read>(reader: R) -> Result<RectSet, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<RectRow>()
        .map(|row| row.map(RectEntry::from))
        .collect()
}
