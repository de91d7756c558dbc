/// Domain module containing core data types
///
/// This module defines the Habit entity and its supporting types. These
/// represent the fundamental concepts in the habit store.

pub mod habit;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
///
/// The store itself performs no input validation; these surface only when
/// parsing user-supplied text (e.g., CLI arguments) into domain types.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
