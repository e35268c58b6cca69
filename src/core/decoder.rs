use crate::config::RunConfig;
use crate::core::{LatencyEntry, Record};
use crate::utils::error::{ApicError, Result};
use serde_json::Value;

/// Decode the latency trace embedded in one record.
///
/// The column and the time key both come from `config.latency_mode`, so the
/// two never disagree. Entries keep the order they have in the JSON array.
pub fn decode_latency(record: &Record, config: &RunConfig) -> Result<Vec<LatencyEntry>> {
    let field = config.latency_field();
    let raw = record.get(field).ok_or_else(|| ApicError::DecodeError {
        line: record.line,
        reason: format!("missing latency column '{}'", field),
    })?;

    let entries = parse_latency(raw, config.time_key(), record.line)?;

    tracing::debug!("Raw latency info: {}", raw);
    tracing::debug!("Decoded latency info: {:?}", entries);
    Ok(entries)
}

/// Parse a JSON array of `{"task": ..., <time_key>: ...}` objects.
pub fn parse_latency(raw: &str, time_key: &str, line: u64) -> Result<Vec<LatencyEntry>> {
    let decode_error = |reason: String| ApicError::DecodeError { line, reason };

    let value: Value =
        serde_json::from_str(raw).map_err(|e| decode_error(format!("invalid JSON: {}", e)))?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(decode_error(format!(
                "expected a JSON array, found {}",
                json_kind(&other)
            )))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<LatencyEntry> {
            let object = item.as_object().ok_or_else(|| {
                decode_error(format!(
                    "entry {} is {}, not an object",
                    index,
                    json_kind(item)
                ))
            })?;

            let task = match object.get("task") {
                Some(Value::String(task)) => task.clone(),
                Some(other) => {
                    return Err(decode_error(format!(
                        "entry {} has a non-string task ({})",
                        index,
                        json_kind(other)
                    )))
                }
                None => return Err(decode_error(format!("entry {} has no 'task' key", index))),
            };

            let time = object.get(time_key).ok_or_else(|| {
                decode_error(format!("entry {} has no '{}' key", index, time_key))
            })?;

            Ok(LatencyEntry::new(task, render_time(time)))
        })
        .collect()
}

/// Task names in trace order; used as a CSV header.
pub fn task_names(entries: &[LatencyEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.task.clone()).collect()
}

fn render_time(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
