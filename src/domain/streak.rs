/// Streak calculation for a single month of completions
///
/// This module defines the Streak struct that holds calculated streak
/// information for a habit, and the scan that derives it from the habit's
/// completion map.

use serde::{Deserialize, Serialize};

/// Calculated streak information for a habit within one month
///
/// Streaks are a cache: they can always be rebuilt from the completion map
/// and the month's day count, and the completion map wins if they disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Run of completed days ending on the last day of the month
    pub current_streak: u32,
    /// Longest run of completed days anywhere in the month
    pub longest_streak: u32,
}

impl Streak {
    /// Create a streak from existing data (used when loading stored records)
    pub fn from_existing(current_streak: u32, longest_streak: u32) -> Self {
        Self {
            current_streak,
            longest_streak,
        }
    }

    /// Scan days `1..=days_in_month` in order and compute both streaks
    ///
    /// A missed day resets the running counter. The current streak is the
    /// counter's value when the scan ends, so it is the run that touches the
    /// month's last day, not the run as of today.
    pub fn calculate<F>(days_in_month: u32, is_completed: F) -> Self
    where
        F: Fn(u32) -> bool,
    {
        let mut running = 0;
        let mut longest = 0;

        for day in 1..=days_in_month {
            if is_completed(day) {
                running += 1;
                longest = longest.max(running);
            } else {
                running = 0;
            }
        }

        Self {
            current_streak: running,
            longest_streak: longest,
        }
    }
}
