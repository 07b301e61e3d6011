/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, MonthRecord, Dataset) together
/// with the calendar arithmetic and streak rules they depend on. These types
/// represent the fundamental concepts in our habit tracking system.

pub mod calendar;
pub mod dataset;
pub mod habit;
pub mod month;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use calendar::*;
pub use dataset::*;
pub use habit::*;
pub use month::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
///
/// None of these are fatal: each one aborts only the operation that raised it
/// and leaves the month's habits untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Duplicate goal: '{name}' already exists")]
    Duplicate { name: String },

    #[error("Habit index {index} is out of range ({len} habits)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Day {day} is out of range (1-{days_in_month})")]
    DayOutOfRange { day: u32, days_in_month: u32 },
}

impl DomainError {
    /// Whether this error belongs to the index family (bad habit index or bad day)
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            DomainError::IndexOutOfRange { .. } | DomainError::DayOutOfRange { .. }
        )
    }

    /// Short message suitable for a transient notification in the UI
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Validation { .. } => "Please enter a goal name".to_string(),
            DomainError::Duplicate { .. } => "This goal already exists".to_string(),
            other => other.to_string(),
        }
    }
}
