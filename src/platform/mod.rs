//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Fetching the level list (web only)

#[cfg(target_arch = "wasm32")]
pub mod fetch;
pub mod storage;

pub use storage::{KeyValueStore, MemoryStorage, StorageError};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
