//! Persistent storage for machine statuses.
//!
//! The whole status mapping lives as one JSON value under one key of a
//! string key-value backend.
//!
//! # Features
//!
//! - **Corruption tolerant reads**: anything unreadable degrades to "available"
//! - **Full-replace writes** with no merging or batching
//! - **Atomic file writes** for the file-backed backend
//! - **Quota-limited memory backend** for exercising write failures
//!
//! # Example
//!
//! ```ignore
//! use vmc_persistence::{FileBackend, StateStore};
//!
//! let store = StateStore::new(FileBackend::new("storage.json"));
//! let mut state = store.load();
//! // ... mutate ...
//! store.save(&state)?;
//! ```

mod backend;
mod codec;
mod error;
mod io;
mod store;

pub use backend::{MemoryBackend, StorageBackend};
pub use codec::{decode_state, encode_state};
pub use error::{PersistenceError, Result};
pub use io::{FileBackend, read_document, write_document};
pub use store::{DEFAULT_STORAGE_KEY, StateStore};
