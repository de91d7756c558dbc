/// In-memory implementation of the habit storage port
///
/// A substitute for the file backend used in tests. It stores the same
/// serialized JSON form a real backend would hold, so tests can assert
/// that the persisted value matches the in-memory state exactly.

use std::sync::Mutex;

use crate::domain::Habit;
use crate::storage::{HabitStorage, StorageError};

/// In-memory storage holding one serialized value
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-populated with the given habits
    pub fn with_habits(habits: &[Habit]) -> Result<Self, StorageError> {
        let storage = Self::new();
        storage.save(habits)?;
        Ok(storage)
    }

    /// The raw persisted JSON, if any value has been written
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

impl HabitStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Habit>, StorageError> {
        match self.slot.lock().unwrap().as_deref() {
            Some(contents) => Ok(serde_json::from_str(contents)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let contents = serde_json::to_string(habits)?;
        *self.slot.lock().unwrap() = Some(contents);
        Ok(())
    }
}
