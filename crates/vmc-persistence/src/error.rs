//! Persistence error types.
//!
//! Only writes surface errors. Reads of the status mapping never fail:
//! see [`crate::StateStore::load`].

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Storage file exists but is not a key-value document.
    #[error("Invalid storage file format: {path}")]
    InvalidFormat { path: PathBuf, reason: String },

    /// Serialization error.
    #[error("Failed to serialize status data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Write would exceed the backend's storage quota.
    #[error("Storage quota exceeded writing {key} ({needed} bytes, quota {quota})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}.", operation, path.display()),
            Self::InvalidFormat { path, reason } => format!(
                "The storage file at {} could not be read: {}.",
                path.display(),
                reason
            ),
            Self::Serialization { .. } => {
                "An error occurred while saving machine statuses.".to_string()
            }
            Self::QuotaExceeded { .. } => {
                "There is no storage space left for machine statuses.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the file to {}. Please check disk space and permissions.",
                target_path.display()
            ),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidFormat { .. } => {
                Some("Remove the storage file to start over with every machine available.".into())
            }
            Self::Serialization { .. } => None,
            Self::QuotaExceeded { .. } => Some("Clear stored statuses to free up space.".into()),
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different storage location.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_error_mentions_key() {
        let error = PersistenceError::QuotaExceeded {
            key: "vintage-computer-checkouts".to_string(),
            needed: 120,
            quota: 64,
        };
        assert!(error.to_string().contains("vintage-computer-checkouts"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn read_and_write_suggestions_differ() {
        let read = PersistenceError::io("read", "a.json", std::io::Error::other("x"));
        let write = PersistenceError::io("write", "a.json", std::io::Error::other("x"));
        assert_ne!(read.suggestion(), write.suggestion());
    }
}
