use crate::config::toml_config::TomlConfig;
use crate::config::{OutputMode, RunConfig};
use crate::domain::model::LatencyMode;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "apic-lat")]
#[command(about = "Flatten API analytics CSV exports or split their latency traces per API")]
pub struct CliConfig {
    /// Analytics CSV files to process
    #[arg(value_name = "CSV", required = true, num_args = 1..)]
    pub csv: Vec<PathBuf>,

    /// Generate CSV for latency steps, one file per API
    #[arg(short = 'L', long)]
    pub lat_csv: bool,

    /// Use latency_info (started) instead of latency_info2 (ended)
    #[arg(short = 'i', long)]
    pub lat_info: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// TOML file overriding column names
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail when a record's latency tasks differ from its API's header
    #[arg(long)]
    pub strict_schema: bool,
}

impl CliConfig {
    /// Resolve flags and the optional config file into one run configuration.
    pub fn into_run_config(self) -> Result<RunConfig> {
        let latency_mode = LatencyMode::from_legacy_flag(self.lat_info);
        if latency_mode == LatencyMode::Legacy {
            tracing::debug!("Using latency_info for latency data, instead of latency_info2");
            tracing::debug!("Switching latency time key from ended to started");
        }

        let mut config = RunConfig {
            inputs: self.csv,
            output_mode: if self.lat_csv {
                OutputMode::LatencyCsv
            } else {
                OutputMode::FlatReport
            },
            latency_mode,
            strict_schema: self.strict_schema,
            ..RunConfig::default()
        };

        if let Some(path) = &self.config {
            tracing::debug!("Loading column configuration from {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_flat_report() {
        let cli = CliConfig::try_parse_from(["apic-lat", "a.csv"]).unwrap();
        let config = cli.into_run_config().unwrap();

        assert_eq!(config.inputs, vec![PathBuf::from("a.csv")]);
        assert_eq!(config.output_mode, OutputMode::FlatReport);
        assert_eq!(config.latency_mode, LatencyMode::V2);
        assert!(!config.strict_schema);
    }

    #[test]
    fn test_short_flags() {
        let cli = CliConfig::try_parse_from(["apic-lat", "-L", "-i", "-v", "a.csv", "b.csv"]).unwrap();
        assert!(cli.verbose);

        let config = cli.into_run_config().unwrap();
        assert_eq!(config.inputs.len(), 2);
        assert_eq!(config.output_mode, OutputMode::LatencyCsv);
        assert_eq!(config.latency_field(), "latency_info");
        assert_eq!(config.time_key(), "started");
    }

    #[test]
    fn test_requires_an_input() {
        assert!(CliConfig::try_parse_from(["apic-lat", "--lat-csv"]).is_err());
    }
}
