#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::LatencyMode;
use crate::utils::error::{ApicError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Names of the top-level analytics columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnNames {
    pub api_name: String,
    pub transaction_id: String,
    pub time_to_serve_request: String,
    pub timestamp: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            api_name: "api_name".to_string(),
            transaction_id: "transaction_id".to_string(),
            time_to_serve_request: "time_to_serve_request".to_string(),
            timestamp: "@timestamp".to_string(),
        }
    }
}

/// Names of the two columns that may carry serialized latency data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatencyFields {
    pub v2_field: String,
    pub legacy_field: String,
}

impl Default for LatencyFields {
    fn default() -> Self {
        Self {
            v2_field: "latency_info2".to_string(),
            legacy_field: "latency_info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One printed line per record
    #[default]
    FlatReport,
    /// One latency CSV per API
    LatencyCsv,
}

/// Settings for a whole run. Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub inputs: Vec<PathBuf>,
    pub output_mode: OutputMode,
    pub latency_mode: LatencyMode,
    pub columns: ColumnNames,
    pub latency_fields: LatencyFields,
    pub strict_schema: bool,
}

impl RunConfig {
    /// Column holding the latency JSON for the selected mode.
    pub fn latency_field(&self) -> &str {
        match self.latency_mode {
            LatencyMode::V2 => &self.latency_fields.v2_field,
            LatencyMode::Legacy => &self.latency_fields.legacy_field,
        }
    }

    pub fn time_key(&self) -> &'static str {
        self.latency_mode.time_key()
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(ApicError::ConfigError {
                message: "at least one input CSV file is required".to_string(),
            });
        }
        for input in &self.inputs {
            validate_path("inputs", &input.to_string_lossy())?;
        }

        validate_non_empty_string("columns.api_name", &self.columns.api_name)?;
        validate_non_empty_string("columns.transaction_id", &self.columns.transaction_id)?;
        validate_non_empty_string(
            "columns.time_to_serve_request",
            &self.columns.time_to_serve_request,
        )?;
        validate_non_empty_string("columns.timestamp", &self.columns.timestamp)?;
        validate_non_empty_string("latency.v2_field", &self.latency_fields.v2_field)?;
        validate_non_empty_string("latency.legacy_field", &self.latency_fields.legacy_field)?;
        Ok(())
    }
}
