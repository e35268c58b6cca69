use crate::utils::error::{ApicError, Result};
use indexmap::IndexMap;

/// One analytics row. Every value is kept as the raw text from the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source file
    pub line: u64,
    pub fields: IndexMap<String, String>,
}

impl Record {
    pub fn new(line: u64, fields: IndexMap<String, String>) -> Self {
        Self { line, fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Look up a column that every analytics row is expected to carry.
    pub fn require(&self, column: &str) -> Result<&str> {
        self.get(column).ok_or_else(|| ApicError::MalformedRow {
            line: self.line,
            reason: format!("missing column '{}'", column),
        })
    }
}

/// Which latency column is read and which timestamp is taken out of each entry.
///
/// The field and the time key always switch together, so they live in one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatencyMode {
    /// `latency_info2`, keyed by `ended`
    #[default]
    V2,
    /// `latency_info`, keyed by `started`
    Legacy,
}

impl LatencyMode {
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy {
            LatencyMode::Legacy
        } else {
            LatencyMode::V2
        }
    }

    pub fn time_key(self) -> &'static str {
        match self {
            LatencyMode::V2 => "ended",
            LatencyMode::Legacy => "started",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyEntry {
    pub task: String,
    pub time: String,
}

impl LatencyEntry {
    pub fn new(task: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            time: time.into(),
        }
    }
}

/// Records of a single API, in input order.
pub type ApiGroups = IndexMap<String, Vec<Record>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_reports_missing_column() {
        let mut fields = IndexMap::new();
        fields.insert("api_name".to_string(), "login".to_string());
        let record = Record::new(4, fields);

        assert_eq!(record.require("api_name").unwrap(), "login");
        match record.require("transaction_id") {
            Err(ApicError::MalformedRow { line, reason }) => {
                assert_eq!(line, 4);
                assert!(reason.contains("transaction_id"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_mode_couples_time_key() {
        assert_eq!(LatencyMode::from_legacy_flag(false).time_key(), "ended");
        assert_eq!(LatencyMode::from_legacy_flag(true).time_key(), "started");
        assert_eq!(LatencyMode::default(), LatencyMode::V2);
    }
}
