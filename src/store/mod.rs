/// The habit store: state shape and the four operations
///
/// This module implements the state container around the habit collection.
/// It holds the in-memory list plus loading/error status, seeds itself from
/// storage on bootstrap, and mirrors every mutation back to storage so the
/// persisted value always equals the in-memory collection.

use std::time::Duration;

use chrono::NaiveDate;

use crate::domain::{Frequency, Habit, HabitId};
use crate::storage::{HabitStorage, StorageError};

/// Delay applied before seeding defaults into an empty store, standing in
/// for a remote fetch. Configurable per store; zero in tests.
pub const DEFAULT_SEED_DELAY: Duration = Duration::from_secs(1);

/// Observable state of the store
///
/// Read-only to consumers; all changes go through the store's operations.
#[derive(Debug, Default)]
pub struct HabitState {
    habits: Vec<Habit>,
    is_loading: bool,
    error: Option<String>,
}

impl HabitState {
    /// The current habit collection, in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// True only while a bootstrap load is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message from the last failed bootstrap load, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// State container for habits, backed by an injected storage port
pub struct HabitStore<S: HabitStorage> {
    storage: S,
    state: HabitState,
    seed_delay: Duration,
}

impl<S: HabitStorage> HabitStore<S> {
    /// Create a store over the given storage with the default seed delay
    ///
    /// The state starts empty; call [`fetch_habits`](Self::fetch_habits) to
    /// populate it from storage.
    pub fn new(storage: S) -> Self {
        Self::with_seed_delay(storage, DEFAULT_SEED_DELAY)
    }

    /// Create a store with an explicit seed delay (use zero in tests)
    pub fn with_seed_delay(storage: S, seed_delay: Duration) -> Self {
        Self {
            storage,
            state: HabitState::default(),
            seed_delay,
        }
    }

    /// Current observable state
    pub fn state(&self) -> &HabitState {
        &self.state
    }

    /// Bootstrap load: populate the store from storage, or seed defaults
    ///
    /// Reads the persisted collection. If it is non-empty it is used as-is.
    /// If it is empty or absent, this waits out the seed delay, builds the
    /// two default habits (Read/daily, Exercise/weekly), persists them, and
    /// uses those. On failure the error message lands in the state; the
    /// load is not retried.
    pub async fn fetch_habits(&mut self) {
        self.state.is_loading = true;

        match self.load_or_seed().await {
            Ok(habits) => {
                tracing::debug!("Bootstrap load finished with {} habits", habits.len());
                self.state.habits = habits;
                self.state.error = None;
            }
            Err(e) => {
                tracing::warn!("Bootstrap load failed: {}", e);
                self.state.error = Some(e.to_string());
            }
        }

        self.state.is_loading = false;
    }

    async fn load_or_seed(&self) -> Result<Vec<Habit>, StorageError> {
        let stored = self.storage.load()?;
        if !stored.is_empty() {
            return Ok(stored);
        }

        // Empty store: pretend this came from a remote source, then seed.
        tokio::time::sleep(self.seed_delay).await;

        let defaults = vec![
            Habit::new("Read", Frequency::Daily),
            Habit::new("Exercise", Frequency::Weekly),
        ];
        self.storage.save(&defaults)?;
        Ok(defaults)
    }

    /// Append a new habit with the given name and frequency
    ///
    /// The habit gets a fresh unique id, the current timestamp, and an empty
    /// completion history. The name is not validated. The full collection is
    /// persisted afterward.
    pub fn add_habit(
        &mut self,
        name: impl Into<String>,
        frequency: Frequency,
    ) -> Result<&Habit, StorageError> {
        let habit = Habit::new(name, frequency);
        tracing::debug!("Adding habit '{}' ({})", habit.name, habit.frequency);

        self.state.habits.push(habit);
        self.storage.save(&self.state.habits)?;

        // Just pushed, so the collection is non-empty.
        Ok(self.state.habits.last().unwrap())
    }

    /// Flip the completion state of a habit for a date
    ///
    /// If the id matches no habit this changes nothing in substance, but the
    /// collection is persisted afterward either way. Toggling the same
    /// (id, date) pair twice restores the prior completion history.
    pub fn toggle_habit(&mut self, id: &HabitId, date: NaiveDate) -> Result<(), StorageError> {
        match self.state.habits.iter_mut().find(|h| h.id == *id) {
            Some(habit) => {
                habit.toggle_completion(date);
                tracing::debug!("Toggled '{}' for {}", habit.name, date);
            }
            None => tracing::debug!("Toggle for unknown habit {}", id),
        }

        self.storage.save(&self.state.habits)
    }

    /// Remove the habit with the given id, if present
    ///
    /// An unknown id is a no-op. The full collection is persisted afterward.
    pub fn delete_habit(&mut self, id: &HabitId) -> Result<(), StorageError> {
        self.state.habits.retain(|h| h.id != *id);
        self.storage.save(&self.state.habits)
    }
}
