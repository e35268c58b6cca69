use crate::config::RunConfig;
use crate::core::decoder::decode_latency;
use crate::core::{LatencyEntry, Record};
use crate::utils::error::Result;
use std::io::Write;

/// Render one record as
/// `time_to_serve_request,timestamp,transaction_id,api_name,task=time,...`.
pub fn format_flat_line(record: &Record, config: &RunConfig) -> Result<String> {
    let columns = &config.columns;
    let tts = record.require(&columns.time_to_serve_request)?;
    let timestamp = record.require(&columns.timestamp)?;
    let transaction_id = record.require(&columns.transaction_id)?;
    let api_name = record.require(&columns.api_name)?;

    let trace = render_trace(&decode_latency(record, config)?);

    let mut line = format!("{},{},{},{}", tts, timestamp, transaction_id, api_name);
    if !trace.is_empty() {
        line.push(',');
        line.push_str(&trace);
    }
    Ok(line)
}

pub fn render_trace(entries: &[LatencyEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}={}", entry.task, entry.time))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write one line per record, in input order. Stops at the first bad record.
pub fn write_flat_report<W: Write>(
    records: &[Record],
    config: &RunConfig,
    out: &mut W,
) -> Result<usize> {
    for record in records {
        let line = format_flat_line(record, config)?;
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(records.len())
}
