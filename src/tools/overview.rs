/// Tool for fetching the month dashboard
///
/// This module implements the dashboard tool: everything the tracker view
/// needs to redraw after an event.

use serde::{Deserialize, Serialize};

use crate::analytics::{MonthDashboard, TOP_HABITS_LIMIT};
use crate::session::Session;
use crate::storage::KeyValueStore;

/// Parameters for the dashboard
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    /// Leaderboard length (defaults to 10)
    pub top: Option<usize>,
}

/// Response carrying the dashboard of the active month
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub dashboard: MonthDashboard,
    pub message: String,
}

/// Build the dashboard of the active month
pub fn show_dashboard<S: KeyValueStore>(
    session: &Session<S>,
    params: DashboardParams,
) -> DashboardResponse {
    let dashboard = session.dashboard(params.top.unwrap_or(TOP_HABITS_LIMIT));

    let message = if dashboard.habits.is_empty() {
        "No goals added yet. Add your first goal above!".to_string()
    } else {
        let mut lines = vec![format!(
            "{} {}: {} completed, {} left ({}%)",
            dashboard.month,
            dashboard.year,
            dashboard.global.completed,
            dashboard.global.remaining,
            dashboard.global.percentage
        )];
        lines.extend(dashboard.habits.iter().map(|row| {
            format!(
                "- {}: {}% | Current Streak: {} | Longest: {}",
                row.name, row.stats.percentage, row.current_streak, row.longest_streak
            )
        }));
        lines.join("\n")
    };

    DashboardResponse { dashboard, message }
}
