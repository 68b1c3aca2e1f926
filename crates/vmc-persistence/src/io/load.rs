//! Storage document loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{PersistenceError, Result};

/// Read the storage document at `path`.
///
/// A missing file is an empty document.
pub fn read_document(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(PersistenceError::io("read", path, e)),
    };

    serde_json::from_str(&content).map_err(|e| PersistenceError::InvalidFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Read the document for a rewrite. An unparseable document is discarded;
/// any other failure is returned so the rewrite cannot drop its keys.
pub(crate) fn read_document_for_update(path: &Path) -> Result<BTreeMap<String, String>> {
    match read_document(path) {
        Err(e @ PersistenceError::InvalidFormat { .. }) => {
            tracing::warn!("Discarding unreadable storage file: {}", e);
            Ok(BTreeMap::new())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let document = read_document(&dir.path().join("absent.json")).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn non_object_document_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            read_document(&path),
            Err(PersistenceError::InvalidFormat { .. })
        ));
        assert!(read_document_for_update(&path).unwrap().is_empty());
    }

    #[test]
    fn unreadable_file_is_not_discarded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::create_dir(&path).unwrap();

        assert!(matches!(
            read_document_for_update(&path),
            Err(PersistenceError::Io { .. })
        ));
    }
}
