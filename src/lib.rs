pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::{OutputMode, RunConfig};
pub use crate::core::engine::{Engine, FileSummary};
pub use domain::model::{LatencyEntry, LatencyMode, Record};
pub use utils::error::{ApicError, Result};
