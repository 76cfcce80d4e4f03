//! Catalog persistence
//!
//! The whole collection is read on every request and written back whole
//! on mutation. Nothing serializes overlapping load/save cycles, so two
//! concurrent creates can lose one of the writes.

pub mod json_file;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::book::Collection;

pub use json_file::JsonFileStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize collection for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable home of the book collection
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Read the full collection. A missing or unreadable store is an error.
    async fn load(&self) -> StoreResult<Collection>;

    /// Replace the persisted collection with `collection`.
    async fn save(&self, collection: &Collection) -> StoreResult<()>;
}
