/// MonthRecord entity: one calendar month of habits
///
/// The habit store operations (add, remove, toggle) live here and act on a
/// single record. They never touch persistence; the session flushes after
/// each successful call.

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::domain::calendar::{self, month_name};
use crate::domain::{Day, DomainError, Habit};

/// All habits tracked during one month, in insertion (display) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRecord {
    #[serde(with = "month_name")]
    pub month: Month,
    pub year: i32,
    #[serde(default)]
    pub habits: Vec<Habit>,
}

impl MonthRecord {
    /// Create an empty record for the given month
    pub fn new(year: i32, month: Month) -> Self {
        Self {
            month,
            year,
            habits: Vec::new(),
        }
    }

    /// Canonical storage key of this record
    pub fn key(&self) -> String {
        calendar::month_key(self.year, self.month)
    }

    /// Number of days in this record's month
    pub fn days_in_month(&self) -> u32 {
        calendar::days_in_month(self.year, self.month)
    }

    /// Append a new habit, rejecting empty and case-insensitively duplicate names
    ///
    /// Returns the index of the new habit.
    pub fn add_habit(&mut self, name: &str) -> Result<usize, DomainError> {
        let habit = Habit::new(name)?;

        if self.habits.iter().any(|existing| existing.has_name(&habit.name)) {
            return Err(DomainError::Duplicate { name: habit.name });
        }

        tracing::debug!("Adding habit '{}' to {}", habit.name, self.key());
        self.habits.push(habit);
        Ok(self.habits.len() - 1)
    }

    /// Remove the habit at `index`, returning it
    pub fn remove_habit(&mut self, index: usize) -> Result<Habit, DomainError> {
        self.check_index(index)?;
        let removed = self.habits.remove(index);
        tracing::debug!("Removed habit '{}' from {}", removed.name, self.key());
        Ok(removed)
    }

    /// Flip one day for the habit at `index` and refresh its streaks
    ///
    /// Returns whether the day is now completed.
    pub fn toggle_completion(&mut self, index: usize, day: u32) -> Result<bool, DomainError> {
        self.check_index(index)?;
        let days_in_month = self.days_in_month();
        let day = Day::in_month(day, days_in_month)?;

        Ok(self.habits[index].toggle(day, days_in_month))
    }

    /// Habit at `index`, if any
    pub fn habit(&self, index: usize) -> Option<&Habit> {
        self.habits.get(index)
    }

    fn check_index(&self, index: usize) -> Result<(), DomainError> {
        if index >= self.habits.len() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.habits.len(),
            });
        }
        Ok(())
    }
}
