use crate::config::{OutputMode, RunConfig};
use crate::core::grouper::split_apis;
use crate::core::latency_csv::{generate_latency_csv, output_stem};
use crate::core::loader::load_records;
use crate::core::report::write_flat_report;
use crate::core::Storage;
use crate::utils::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What one input file produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub input: PathBuf,
    pub rows: usize,
    /// Latency CSVs written; always empty in flat-report mode
    pub outputs: Vec<PathBuf>,
}

pub struct Engine<S: Storage> {
    storage: S,
    config: RunConfig,
}

impl<S: Storage> Engine<S> {
    pub fn new(storage: S, config: RunConfig) -> Self {
        Self { storage, config }
    }

    /// Process every input in order. The first error ends the run.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<FileSummary>> {
        let mut summaries = Vec::with_capacity(self.config.inputs.len());
        for input in &self.config.inputs {
            summaries.push(self.process_file(input, out)?);
        }
        Ok(summaries)
    }

    pub fn process_file<W: Write>(&self, input: &Path, out: &mut W) -> Result<FileSummary> {
        let records = load_records(input)?;
        let rows = records.len();

        let outputs = match self.config.output_mode {
            OutputMode::FlatReport => {
                write_flat_report(&records, &self.config, out)?;
                Vec::new()
            }
            OutputMode::LatencyCsv => {
                let stem = output_stem(input);
                let apis = split_apis(records, &self.config)?;

                let mut outputs = Vec::new();
                for (api, api_records) in &apis {
                    if let Some(file) =
                        generate_latency_csv(&self.storage, &stem, api, api_records, &self.config)?
                    {
                        outputs.push(file);
                    }
                }

                writeln!(out, "Successfully generated the following output files:")?;
                for file in &outputs {
                    writeln!(out, "{}", file.display())?;
                }
                out.flush()?;
                outputs
            }
        };

        Ok(FileSummary {
            input: input.to_path_buf(),
            rows,
            outputs,
        })
    }
}
