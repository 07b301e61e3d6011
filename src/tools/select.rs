/// Tool for switching the active month
///
/// This module implements the month_select tool, fired when the user changes
/// the month or year selector.

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::domain::calendar;
use crate::session::Session;
use crate::storage::KeyValueStore;
use crate::TrackerError;

/// A month given either by canonical name ("March") or zero-based index (2)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MonthArg {
    Index(u32),
    Name(String),
}

impl MonthArg {
    /// Resolve to a calendar month
    pub fn resolve(&self) -> Result<Month, TrackerError> {
        let month = match self {
            MonthArg::Index(index) => calendar::month_from_index(*index),
            MonthArg::Name(name) => calendar::month_from_name(name.trim()),
        };

        month.ok_or_else(|| {
            TrackerError::InvalidMonth(match self {
                MonthArg::Index(index) => format!("month index {} is not in 0-11", index),
                MonthArg::Name(name) => format!("'{}' is not a month name", name),
            })
        })
    }
}

/// Parameters for switching months
#[derive(Debug, Deserialize)]
pub struct SelectMonthParams {
    pub year: i32,
    pub month: MonthArg,
}

/// Response from switching months
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectMonthResponse {
    pub key: String,
    pub days_in_month: u32,
    pub goal_count: usize,
    pub message: String,
}

/// Flush the current month and make the requested one active
pub fn select_month<S: KeyValueStore>(
    session: &mut Session<S>,
    params: SelectMonthParams,
) -> Result<SelectMonthResponse, TrackerError> {
    let month = params.month.resolve()?;
    session.select_month(params.year, month)?;

    let goal_count = session.habits().len();
    let message = if goal_count == 0 {
        format!("{} {}: no goals yet", month.name(), params.year)
    } else {
        format!("{} {}: {} goal{}", month.name(), params.year, goal_count, if goal_count == 1 { "" } else { "s" })
    };

    Ok(SelectMonthResponse {
        key: session.active_key(),
        days_in_month: session.days_in_month(),
        goal_count,
        message,
    })
}
