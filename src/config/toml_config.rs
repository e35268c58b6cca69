use crate::config::{ColumnNames, LatencyFields, RunConfig};
use crate::utils::error::{ApicError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file that renames the columns of an analytics export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub columns: ColumnNames,
    pub latency: LatencyFields,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ApicError::FileError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ApicError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Copy the column names into a run configuration.
    pub fn apply_to(self, config: &mut RunConfig) {
        config.columns = self.columns;
        config.latency_fields = self.latency;
    }
}
