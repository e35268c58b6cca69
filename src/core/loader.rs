use crate::core::Record;
use crate::utils::error::{ApicError, Result};
use indexmap::IndexMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load every row of an analytics CSV, in file order.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    tracing::info!("Loading file: {}", path.display());

    let file = File::open(path).map_err(|source| ApicError::FileError {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(file)?;

    tracing::debug!("{} row(s) loaded from CSV", records.len());
    Ok(records)
}

/// Parse CSV text with a header row into records keyed by header name.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result.map_err(malformed_row)?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();

        let fields: IndexMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        records.push(Record::new(line, fields));
    }

    Ok(records)
}

fn malformed_row(err: csv::Error) -> ApicError {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => ApicError::MalformedRow {
            line: pos.as_ref().map(|p| p.line()).unwrap_or_default(),
            reason: format!("expected {} field(s), found {}", expected_len, len),
        },
        _ => ApicError::CsvError(err),
    }
}
