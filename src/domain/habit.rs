/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// activity the user wants to track, along with its completion history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Frequency, HabitId};

/// A habit represents something the user wants to do regularly
///
/// Each habit carries its completion history inline: `completed_dates` is the
/// set of days the habit was performed. Field names in the serialized form
/// follow the persisted layout (`completedDates`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Read", "Drink Water")
    pub name: String,
    /// How often this habit should be performed
    pub frequency: Frequency,
    /// Days on which the habit was completed. Semantically a set; kept as an
    /// ordered sequence, membership tested by exact date equality.
    #[serde(rename = "completedDates")]
    pub completed_dates: Vec<NaiveDate>,
    /// When this habit was created. Set once, never mutated.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with a fresh id, the current timestamp, and an
    /// empty completion history. The name is taken as-is; there are no
    /// validation rules on it.
    pub fn new(name: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            id: HabitId::new(),
            name: name.into(),
            frequency,
            completed_dates: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Check whether the habit was completed on the given date
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// Flip the completion state for a date: remove it if present, record it
    /// otherwise. Applying the same date twice restores the prior history.
    pub fn toggle_completion(&mut self, date: NaiveDate) {
        if let Some(index) = self.completed_dates.iter().position(|d| *d == date) {
            self.completed_dates.remove(index);
        } else {
            self.completed_dates.push(date);
        }
    }
}
