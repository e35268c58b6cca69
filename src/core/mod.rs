pub mod decoder;
pub mod engine;
pub mod grouper;
pub mod latency_csv;
pub mod loader;
pub mod report;

pub use crate::domain::model::{ApiGroups, LatencyEntry, LatencyMode, Record};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
