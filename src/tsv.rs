//! # Tab-Separated Row Streams
//!
//! Reads investigation-style TSV text into sparse rows and writes rows back.
//! There is no header line: every line is a row, cell `k` of a line has
//! sparse index `k`, and empty cells are left out of the sparse row.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::table::SparseRow;

/// Errors that can occur while reading or writing TSV rows
#[derive(Debug, thiserror::Error)]
pub enum TsvError {
    /// I/O error reading or writing a file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("TSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Read all rows of a TSV file
pub fn read_rows_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SparseRow>, TsvError> {
    let file = File::open(path)?;
    read_rows(BufReader::new(file))
}

/// Read all rows from a TSV reader
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<SparseRow>, TsvError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: SparseRow = record
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_empty())
            .map(|(index, value)| (index, value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Write rows as TSV lines, filling gaps with empty cells
pub fn write_rows<W, I>(writer: W, rows: I) -> Result<(), TsvError>
where
    W: Write,
    I: IntoIterator<Item = SparseRow>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_writer(writer);

    for row in rows {
        let width = row.iter().map(|(index, _)| index + 1).max().unwrap_or(0);
        let mut line = vec![String::new(); width];
        for (index, value) in row {
            line[index] = value;
        }
        csv_writer.write_record(&line)?;
    }

    csv_writer.flush()?;
    Ok(())
}
