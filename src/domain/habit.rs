/// Habit entity and related functionality
///
/// This module defines the Habit struct that represents one goal tracked
/// during one calendar month, along with name validation and the toggle
/// that keeps its streak cache in sync.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use crate::domain::{Day, DomainError, Streak};

/// A habit represents something the user wants to do every day of a month
///
/// Serialized field names follow the stored document format
/// (`name`, `data`, `currentStreak`, `longestStreak`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Display name (e.g., "Morning Run", "Read 20 pages")
    pub name: String,
    /// Completion flag per day; a missing day counts as not completed
    #[serde(rename = "data", default)]
    pub completions: BTreeMap<Day, bool>,
    /// Cached run of completed days ending on the month's last day
    #[serde(default)]
    pub current_streak: u32,
    /// Cached longest run of completed days in the month
    #[serde(default)]
    pub longest_streak: u32,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The name is stored trimmed. Empty completions and zero streaks.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let trimmed = Self::validate_name(name)?;

        Ok(Self {
            name: trimmed.to_string(),
            completions: BTreeMap::new(),
            current_streak: 0,
            longest_streak: 0,
        })
    }

    /// Whether this habit's name equals `name`, ignoring case
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Whether the habit was completed on the given day number
    pub fn is_completed_on(&self, day: u32) -> bool {
        Day::new(day)
            .and_then(|day| self.completions.get(&day).copied())
            .unwrap_or(false)
    }

    /// Number of completed days within `1..=days_in_month`
    pub fn completed_days(&self, days_in_month: u32) -> u32 {
        (1..=days_in_month)
            .filter(|day| self.is_completed_on(*day))
            .count() as u32
    }

    /// Flip the completion flag for `day` and refresh the streak cache
    ///
    /// Returns the new flag.
    pub fn toggle(&mut self, day: Day, days_in_month: u32) -> bool {
        let flag = self.completions.entry(day).or_insert(false);
        *flag = !*flag;
        let completed = *flag;

        self.recompute_streaks(days_in_month);
        completed
    }

    /// Rebuild the cached streaks from the completion map
    pub fn recompute_streaks(&mut self, days_in_month: u32) {
        let streak = self.streak(days_in_month);
        self.current_streak = streak.current_streak;
        self.longest_streak = streak.longest_streak;
    }

    /// Streaks derived from the completion map, ignoring the cache
    pub fn streak(&self, days_in_month: u32) -> Streak {
        Streak::calculate(days_in_month, |day| self.is_completed_on(day))
    }

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<&str, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::Validation {
                message: "Habit name cannot be empty".to_string(),
            });
        }

        Ok(trimmed)
    }
}
