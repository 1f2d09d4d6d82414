//! Row parsing: decoded text rows into typed daily records

use crate::types::{DailyRecord, Dataset, Fahrenheit};
use thiserror::Error;
use tracing::debug;

/// Minimum number of fields a data row needs: date, min, max
pub const REQUIRED_FIELDS: usize = 3;

/// Why a data row was left out of the dataset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowRejection {
    #[error("expected at least 3 fields, found {0}")]
    TooFewFields(usize),

    #[error("field {field} is not an integer temperature: {value:?}")]
    InvalidTemperature { field: usize, value: String },
}

/// Parse a single data row (`date,min_temp,max_temp[,...]`)
///
/// Fields past the third are ignored. The date is taken verbatim; it is only
/// validated when it is formatted for display.
pub fn parse_row<S: AsRef<str>>(row: &[S]) -> Result<DailyRecord, RowRejection> {
    if row.len() < REQUIRED_FIELDS {
        return Err(RowRejection::TooFewFields(row.len()));
    }

    let min_temp = parse_temperature(row, 1)?;
    let max_temp = parse_temperature(row, 2)?;

    Ok(DailyRecord {
        date: row[0].as_ref().to_string(),
        min_temp,
        max_temp,
    })
}

fn parse_temperature<S: AsRef<str>>(row: &[S], field: usize) -> Result<Fahrenheit, RowRejection> {
    let raw = row[field].as_ref();
    raw.trim()
        .parse()
        .map_err(|_| RowRejection::InvalidTemperature {
            field,
            value: raw.to_string(),
        })
}

/// Build a dataset from raw rows
///
/// The first row is a header and is always skipped. Malformed rows are
/// dropped; the remaining records keep their input order.
pub fn parse_records<I, R, S>(rows: I) -> Dataset
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut dataset = Dataset::new();
    let mut dropped = 0usize;

    // Row numbers are 1-based and count the header, like line numbers.
    for (number, row) in rows.into_iter().enumerate().skip(1) {
        match parse_row(row.as_ref()) {
            Ok(record) => dataset.push(record),
            Err(reason) => {
                dropped += 1;
                debug!(row = number + 1, %reason, "Dropping malformed row");
            }
        }
    }

    debug!(kept = dataset.len(), dropped, "Parsed daily records");
    dataset
}
