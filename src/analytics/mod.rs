/// Analytics for habit completion data
///
/// This module derives everything the UI displays from stored habit records:
/// per-habit and overall completion stats, the leaderboard, the weekly
/// distribution, the month dashboard, and year reports. All functions are
/// pure; none of them mutate a record or touch storage.

pub mod dashboard;
pub mod report;
pub mod stats;

pub use dashboard::*;
pub use report::*;
pub use stats::*;
