/// Public library interface for the habit store
///
/// This crate implements a state container for tracking habits: an in-memory
/// habit collection with loading/error status, four operations (bootstrap
/// load, add, toggle completion, delete), and a storage port that mirrors
/// every mutation back to a single-key JSON store.

// Internal modules
mod domain;
mod storage;
mod store;

// Re-export public modules and types
pub use domain::*;
pub use storage::{
    FileStorage, HabitStorage, MemoryStorage, StorageError, STORED_HABITS_KEY,
};
pub use store::{HabitState, HabitStore, DEFAULT_SEED_DELAY};
