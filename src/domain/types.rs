/// Core value types used throughout the domain layer
///
/// This module defines the bounded `Day` type used as the key of a habit's
/// completion map.

use serde::{Deserialize, Serialize};
use crate::domain::DomainError;

/// A day of the month, always in `1..=31`
///
/// Stored documents key completions by the day number as a string
/// (`"1"`, `"2"`, ...). Serde goes through `u32`, which serde_json writes and
/// reads as a quoted map key, so no manual string coercion is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Day(u8);

impl Day {
    /// Largest day number any month can have
    pub const MAX: u32 = 31;

    /// Create a day if it is within `1..=31`
    pub fn new(day: u32) -> Option<Self> {
        if (1..=Self::MAX).contains(&day) {
            Some(Self(day as u8))
        } else {
            None
        }
    }

    /// Create a day that must also exist in a month of `days_in_month` days
    pub fn in_month(day: u32, days_in_month: u32) -> Result<Self, DomainError> {
        if day == 0 || day > days_in_month {
            return Err(DomainError::DayOutOfRange { day, days_in_month });
        }
        Self::new(day).ok_or(DomainError::DayOutOfRange { day, days_in_month })
    }

    /// The day number
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for Day {
    type Error = DomainError;

    fn try_from(day: u32) -> Result<Self, Self::Error> {
        Self::new(day).ok_or(DomainError::DayOutOfRange {
            day,
            days_in_month: Self::MAX,
        })
    }
}

impl From<Day> for u32 {
    fn from(day: Day) -> Self {
        day.get()
    }
}
