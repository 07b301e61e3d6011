/// Completion statistics over one month of habits

use serde::Serialize;

use crate::domain::{week_of_month, Habit, WEEKS_PER_MONTH};

/// Default number of entries on the leaderboard
pub const TOP_HABITS_LIMIT: usize = 10;

/// Completed/remaining counts and the rounded completion percentage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub completed: u32,
    pub remaining: u32,
    pub percentage: u32,
}

impl HabitStats {
    /// Build stats from a completed count and the number of trackable days
    pub fn from_totals(completed: u32, total: u32) -> Self {
        let completed = completed.min(total);
        Self {
            completed,
            remaining: total - completed,
            percentage: percentage(completed, total),
        }
    }

    /// Number of trackable days these stats cover
    pub fn total(&self) -> u32 {
        self.completed + self.remaining
    }
}

/// A leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedHabit {
    /// Position of the habit in the month's habit list
    pub index: usize,
    pub name: String,
    pub stats: HabitStats,
}

/// `round(100 * completed / total)` with halves rounded up; 0 when `total` is 0
pub fn percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = u64::from(completed);
    let total = u64::from(total);
    ((200 * completed + total) / (2 * total)) as u32
}

/// Stats for one habit over days `1..=days_in_month`
pub fn habit_stats(habit: &Habit, days_in_month: u32) -> HabitStats {
    HabitStats::from_totals(habit.completed_days(days_in_month), days_in_month)
}

/// Overall stats: totals are summed first, then turned into a percentage
///
/// This is deliberately not the mean of the per-habit percentages.
pub fn global_stats(habits: &[Habit], days_in_month: u32) -> HabitStats {
    let (completed, total) = habits
        .iter()
        .map(|habit| habit_stats(habit, days_in_month))
        .fold((0, 0), |(completed, total), stats| {
            (completed + stats.completed, total + stats.total())
        });

    HabitStats::from_totals(completed, total)
}

/// Habits ordered by percentage, best first, truncated to `limit`
///
/// The sort is stable, so habits with equal percentages keep their
/// insertion order.
pub fn top_habits(habits: &[Habit], days_in_month: u32, limit: usize) -> Vec<RankedHabit> {
    let mut ranked: Vec<RankedHabit> = habits
        .iter()
        .enumerate()
        .map(|(index, habit)| RankedHabit {
            index,
            name: habit.name.clone(),
            stats: habit_stats(habit, days_in_month),
        })
        .collect();

    ranked.sort_by(|a, b| b.stats.percentage.cmp(&a.stats.percentage));
    ranked.truncate(limit);
    ranked
}

/// Completions per week bucket, summed over all habits
pub fn weekly_distribution(habits: &[Habit], days_in_month: u32) -> [u32; WEEKS_PER_MONTH] {
    let mut weeks = [0; WEEKS_PER_MONTH];

    for day in 1..=days_in_month {
        let completions = habits
            .iter()
            .filter(|habit| habit.is_completed_on(day))
            .count() as u32;
        weeks[week_of_month(day) as usize - 1] += completions;
    }

    weeks
}
