//! CSV layout of the log: comma separated, LF terminated, no header handling
//! at this level.

use crate::errors::{AppError, AppResult};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::io;

/// One decoded CSV row with the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line: usize,
    pub fields: Vec<String>,
}

pub fn encode_row<I, T>(fields: I) -> AppResult<Vec<u8>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    encode_rows(std::iter::once(fields))
}

pub fn encode_rows<R, I, T>(rows: R) -> AppResult<Vec<u8>>
where
    R: IntoIterator<Item = I>,
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    wtr.into_inner()
        .map_err(|e| AppError::Io(io::Error::other(e.to_string())))
}

/// Decode every row. Rows of any width are accepted so that a damaged
/// header can still be inspected; blank lines are skipped.
pub fn decode_rows(bytes: &[u8]) -> AppResult<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        rows.push(RawRow {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(rows)
}
