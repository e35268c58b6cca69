use crate::domain::ports::Storage;
use crate::utils::error::{ApicError, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes straight to the local filesystem, relative to the working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    type Writer = BufWriter<File>;

    fn create(&self, path: &Path) -> Result<Self::Writer> {
        let file = File::create(path).map_err(|source| ApicError::FileError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufWriter::new(file))
    }
}
