/// File-backed implementation of the habit storage port
///
/// This module provides the concrete on-disk implementation: the habit
/// collection lives as a JSON array in a single file named after the
/// well-known storage key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::Habit;
use crate::storage::{HabitStorage, StorageError, STORED_HABITS_KEY};

/// File-based storage
///
/// Holds the path of the backing file. Reads and writes are whole-file
/// operations; a missing file reads as an empty collection.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted in the given directory
    ///
    /// The directory is created if it does not exist. The backing file is
    /// `<dir>/stored_habits.json`.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", STORED_HABITS_KEY));

        tracing::info!("File storage initialized at: {}", path.display());

        Ok(Self { path })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HabitStorage for FileStorage {
    fn load(&self) -> Result<Vec<Habit>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No stored habits at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let habits: Vec<Habit> = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded {} habits from {}", habits.len(), self.path.display());
        Ok(habits)
    }

    fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let contents = serde_json::to_string(habits)?;
        fs::write(&self.path, contents)?;
        tracing::debug!("Saved {} habits to {}", habits.len(), self.path.display());
        Ok(())
    }
}
