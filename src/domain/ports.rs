use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Where per-API latency tables are written.
pub trait Storage {
    type Writer: Write;

    /// Create or truncate the file at `path`.
    fn create(&self, path: &Path) -> Result<Self::Writer>;
}
