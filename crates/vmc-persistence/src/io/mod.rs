//! File I/O for the file-backed storage.
//!
//! This module handles:
//! - Reading the storage document with format validation
//! - Replacing it with atomic writes

mod load;
mod save;

pub use load::read_document;
pub use save::write_document;

use std::path::{Path, PathBuf};

use crate::backend::StorageBackend;
use crate::error::Result;

/// Storage backed by a single JSON document of `{ key: value }` strings.
///
/// Every write rewrites the whole document through a temp file and a
/// rename, so readers see either the old or the new document. A missing
/// file reads as empty.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(read_document(&self.path)?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut document = load::read_document_for_update(&self.path)?;
        document.insert(key.to_string(), value.to_string());
        write_document(&document, &self.path)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut document = load::read_document_for_update(&self.path)?;
        if document.remove(key).is_none() {
            return Ok(());
        }
        write_document(&document, &self.path)
    }
}
