use crate::config::RunConfig;
use crate::core::decoder::{decode_latency, task_names};
use crate::core::{Record, Storage};
use crate::utils::error::Result;
use crate::utils::validation::validate_task_schema;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Input path with its extension removed, e.g. `data/march.csv` -> `data/march`.
pub fn output_stem(input: &Path) -> PathBuf {
    input.with_extension("")
}

/// `<stem>-<api>-latency.csv`
pub fn output_file_name(stem: &Path, api: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push("-");
    name.push(api);
    name.push("-latency.csv");
    PathBuf::from(name)
}

/// Write the latency table for one API.
///
/// The header is the task list of the group's first record. Every record,
/// the first included, becomes one row of time values in its own entry order,
/// so rows from records with a different task layout are not realigned.
/// Returns `Ok(None)` when the first record has no latency entries.
pub fn generate_latency_csv<S: Storage>(
    storage: &S,
    stem: &Path,
    api: &str,
    records: &[Record],
    config: &RunConfig,
) -> Result<Option<PathBuf>> {
    let Some(first) = records.first() else {
        tracing::debug!("Cannot generate latency CSV for API: {} (no records)", api);
        return Ok(None);
    };

    let header = task_names(&decode_latency(first, config)?);
    tracing::debug!("Fieldnames: {:?}", header);
    if header.is_empty() {
        tracing::debug!("Cannot generate latency CSV for API: {}", api);
        return Ok(None);
    }

    let out_file = output_file_name(stem, api);
    tracing::info!("Generating latency CSV for API: {}", api);
    tracing::debug!("Output file will be: {}", out_file.display());

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(storage.create(&out_file)?);
    writer.write_record(&header)?;

    for record in records {
        let entries = decode_latency(record, config)?;
        if config.strict_schema {
            validate_task_schema(api, record.line, &header, &task_names(&entries))?;
        }

        let row: Vec<&str> = entries.iter().map(|entry| entry.time.as_str()).collect();
        tracing::debug!("Latency CSV row: {:?}", row);
        if row.is_empty() {
            // csv writes a zero-field record as `""`; an empty trace is a blank line
            writer.flush()?;
            writer.get_mut().write_all(b"\n")?;
        } else {
            writer.write_record(&row)?;
        }
    }
    writer.flush()?;

    tracing::debug!("Successfully written latency data to {}", out_file.display());
    Ok(Some(out_file))
}
