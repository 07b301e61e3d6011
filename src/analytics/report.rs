/// Year reports across every stored month
///
/// Reports read the whole dataset rather than the active month. Months are
/// visited in calendar order and each one is measured against its own day
/// count, so year totals weigh a 31-day month more than February.

use chrono::Month;
use serde::Serialize;

use crate::analytics::stats::{habit_stats, HabitStats};
use crate::domain::{days_in_month, Dataset, MonthRecord};

/// One habit's line in a month report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitBreakdown {
    pub name: String,
    pub completed: u32,
    pub days: u32,
    pub percentage: u32,
}

/// Summary of one stored month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReport {
    pub month: String,
    pub goal_count: usize,
    pub completed: u32,
    pub remaining: u32,
    pub percentage: u32,
    pub habits: Vec<HabitBreakdown>,
}

/// Summary of a whole year plus its per-month breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearReport {
    pub year: i32,
    pub months_active: usize,
    pub total_completed: u32,
    pub total_remaining: u32,
    pub percentage: u32,
    pub months: Vec<MonthReport>,
}

impl YearReport {
    /// Whether no month of the year has a stored record
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Summarize the record stored under the key of `month` in `year`
///
/// The day count and month name come from the key, not the record body.
pub fn month_report(year: i32, month: Month, record: &MonthRecord) -> MonthReport {
    let days = days_in_month(year, month);
    let mut completed = 0;
    let mut total = 0;

    let habits = record
        .habits
        .iter()
        .map(|habit| {
            let stats = habit_stats(habit, days);
            completed += stats.completed;
            total += stats.total();
            HabitBreakdown {
                name: habit.name.clone(),
                completed: stats.completed,
                days,
                percentage: stats.percentage,
            }
        })
        .collect();

    let totals = HabitStats::from_totals(completed, total);
    MonthReport {
        month: month.name().to_string(),
        goal_count: record.habits.len(),
        completed: totals.completed,
        remaining: totals.remaining,
        percentage: totals.percentage,
        habits,
    }
}

/// Summarize every stored month of `year`
pub fn year_summary(dataset: &Dataset, year: i32) -> YearReport {
    let months: Vec<MonthReport> = dataset
        .year_records(year)
        .map(|(month, record)| month_report(year, month, record))
        .collect();

    let completed = months.iter().map(|m| m.completed).sum();
    let total = months.iter().map(|m| m.completed + m.remaining).sum();
    let totals = HabitStats::from_totals(completed, total);

    YearReport {
        year,
        months_active: months.len(),
        total_completed: totals.completed,
        total_remaining: totals.remaining,
        percentage: totals.percentage,
        months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::stats::percentage;
    use chrono::Month;

    fn record(year: i32, month: Month, habits: &[(&str, Vec<u32>)]) -> MonthRecord {
        let mut record = MonthRecord::new(year, month);
        for (index, (name, days)) in habits.iter().enumerate() {
            record.add_habit(name).unwrap();
            for day in days.iter() {
                record.toggle_completion(index, *day).unwrap();
            }
        }
        record
    }

    #[test]
    fn test_empty_year() {
        let report = year_summary(&Dataset::default(), 2024);
        assert!(report.is_empty());
        assert_eq!(report.months_active, 0);
        assert_eq!(report.percentage, 0);
    }

    #[test]
    fn test_year_percentage_is_sum_then_ratio() {
        let mut dataset = Dataset::default();
        // February 2023 has 28 days, March has 31
        let all_feb: Vec<u32> = (1..=28).collect();
        dataset.insert(record(2023, Month::February, &[("Read", all_feb)]));
        dataset.insert(record(2023, Month::March, &[("Read", vec![1])]));
        dataset.insert(record(2022, Month::March, &[("Read", vec![1, 2, 3])]));

        let report = year_summary(&dataset, 2023);
        assert_eq!(report.months_active, 2);
        assert_eq!(report.total_completed, 29);
        assert_eq!(report.total_remaining, 30);
        assert_eq!(report.percentage, percentage(29, 59));
        // Averaging the monthly 100% and 3% would give 51.5%
        assert_eq!(report.percentage, 49);

        let names: Vec<&str> = report.months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(names, vec!["February", "March"]);
    }

    #[test]
    fn test_month_report_breakdown() {
        let record = record(
            2024,
            Month::April,
            &[("Read", vec![1, 2, 3, 4, 5, 10]), ("Run", vec![])],
        );
        let report = month_report(2024, Month::April, &record);

        assert_eq!(report.goal_count, 2);
        assert_eq!(report.completed, 6);
        assert_eq!(report.remaining, 54);
        assert_eq!(report.percentage, 10);
        assert_eq!(
            report.habits[0],
            HabitBreakdown { name: "Read".to_string(), completed: 6, days: 30, percentage: 20 }
        );
    }

    #[test]
    fn test_month_report_follows_the_key() {
        // Body claims March but is stored under the February key
        let body = record(2024, Month::March, &[("Read", vec![1, 30])]);
        let mut dataset = Dataset::default();
        dataset.months.insert("2024_February".to_string(), body);

        let report = year_summary(&dataset, 2024);
        assert_eq!(report.months[0].month, "February");
        assert_eq!(report.months[0].habits[0].days, 29);
        // Day 30 does not exist in February
        assert_eq!(report.total_completed, 1);
        assert_eq!(report.total_remaining, 28);
    }

    #[test]
    fn test_report_keys_are_camel_case() {
        let mut dataset = Dataset::default();
        dataset.insert(record(2024, Month::June, &[("Read", vec![1])]));

        let json = serde_json::to_value(year_summary(&dataset, 2024)).unwrap();
        assert_eq!(json["monthsActive"], 1);
        assert_eq!(json["totalCompleted"], 1);
        assert_eq!(json["months"][0]["goalCount"], 1);
    }

    #[test]
    fn test_month_without_goals_still_counts_as_active() {
        let mut dataset = Dataset::default();
        dataset.insert(MonthRecord::new(2024, Month::June));

        let report = year_summary(&dataset, 2024);
        assert_eq!(report.months_active, 1);
        assert_eq!(report.months[0].goal_count, 0);
        assert_eq!(report.percentage, 0);
    }
}
