/// Tool for marking a day done or not done
///
/// This module implements the day_toggle tool, fired when the user clicks a
/// cell of the habit grid.

use serde::{Deserialize, Serialize};

use crate::analytics::{habit_stats, HabitStats};
use crate::session::Session;
use crate::storage::KeyValueStore;
use crate::TrackerError;

/// Parameters for toggling one day of one goal
#[derive(Debug, Deserialize)]
pub struct ToggleDayParams {
    pub index: usize,
    pub day: u32,
}

/// Response from toggling a day
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleDayResponse {
    pub index: usize,
    pub day: u32,
    pub completed: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub stats: HabitStats,
    pub message: String,
}

/// Flip one day of one goal in the active month
pub fn toggle_day<S: KeyValueStore>(
    session: &mut Session<S>,
    params: ToggleDayParams,
) -> Result<ToggleDayResponse, TrackerError> {
    let completed = session.toggle_completion(params.index, params.day)?;

    let habit = &session.habits()[params.index];
    let stats = habit_stats(habit, session.days_in_month());

    let message = format!(
        "{} day {} of '{}'. Current streak: {} day{}",
        if completed { "Completed" } else { "Cleared" },
        params.day,
        habit.name,
        habit.current_streak,
        if habit.current_streak == 1 { "" } else { "s" }
    );

    Ok(ToggleDayResponse {
        index: params.index,
        day: params.day,
        completed,
        current_streak: habit.current_streak,
        longest_streak: habit.longest_streak,
        stats,
        message,
    })
}
