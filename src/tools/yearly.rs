/// Tool for year reports
///
/// This module implements the year_report tool shown in the reports view.

use serde::{Deserialize, Serialize};

use crate::analytics::YearReport;
use crate::session::Session;
use crate::storage::KeyValueStore;

/// Parameters for a year report
#[derive(Debug, Default, Deserialize)]
pub struct YearReportParams {
    /// Year to report on (defaults to the active year)
    pub year: Option<i32>,
}

/// Response carrying the year report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearReportResponse {
    pub report: YearReport,
    pub message: String,
}

/// Summarize every stored month of the requested year
pub fn generate_report<S: KeyValueStore>(
    session: &Session<S>,
    params: YearReportParams,
) -> YearReportResponse {
    let year = params.year.unwrap_or(session.active().0);
    let report = session.year_report(year);

    let message = if report.is_empty() {
        format!("No data available for {}.", year)
    } else {
        let mut lines = vec![format!(
            "Year {} Summary: {}/12 months active, {} completed, {} left, {}% success",
            year, report.months_active, report.total_completed, report.total_remaining, report.percentage
        )];
        for month in &report.months {
            lines.push(format!(
                "{} {}: {} goals, {} completed, {} left, {}% success",
                month.month, year, month.goal_count, month.completed, month.remaining, month.percentage
            ));
            lines.extend(month.habits.iter().map(|habit| {
                format!("  - {}: {}% ({}/{})", habit.name, habit.percentage, habit.completed, habit.days)
            }));
        }
        lines.join("\n")
    };

    YearReportResponse { report, message }
}
