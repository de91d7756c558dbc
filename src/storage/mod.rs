/// Storage layer for persisting habit data
///
/// This module handles persistence of the habit collection as a single
/// JSON value under one well-known key. Every save overwrites the whole
/// collection; there are no deltas, versioning, or migrations.

pub mod file;
pub mod memory;

// Re-export the main storage types
pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

use crate::domain::Habit;

/// The well-known key under which the habit collection is persisted
pub const STORED_HABITS_KEY: &str = "stored_habits";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait defining the storage port the store is constructed with
///
/// Abstracting the key-value backend behind this trait lets the store run
/// against a file in production and an in-memory fake in tests. Both
/// operations are synchronous from the store's perspective.
pub trait HabitStorage {
    /// Read and deserialize the stored collection. An absent value yields
    /// an empty collection, not an error.
    fn load(&self) -> Result<Vec<Habit>, StorageError>;

    /// Serialize and write the full collection, overwriting the prior value
    fn save(&self, habits: &[Habit]) -> Result<(), StorageError>;
}
