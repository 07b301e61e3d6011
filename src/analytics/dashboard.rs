/// Month dashboard: everything the tracker view renders for the active month
///
/// The dashboard is plain data. The UI lays out the habit grid from `habits`,
/// fills the leaderboard from `top_habits`, draws the donut from
/// `overall_chart` and the bar chart from `weekly`.

use chrono::Month;
use serde::Serialize;

use crate::analytics::stats::{
    global_stats, habit_stats, top_habits, weekly_distribution, HabitStats, RankedHabit,
};
use crate::domain::{days_in_month, week_days, Habit, WEEKS_PER_MONTH};

/// One clickable cell of the habit grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub day: u32,
    pub checked: bool,
}

/// One habit's row: grid cells grouped by week, stats and streaks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRow {
    pub index: usize,
    pub name: String,
    pub stats: HabitStats,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub weeks: Vec<Vec<DayCell>>,
}

/// Labelled series for a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

/// Rendering data for the active month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthDashboard {
    pub year: i32,
    pub month: String,
    pub days_in_month: u32,
    pub habits: Vec<HabitRow>,
    pub top_habits: Vec<RankedHabit>,
    pub global: HabitStats,
    pub overall_chart: ChartSeries,
    pub weekly: ChartSeries,
}

impl MonthDashboard {
    /// Build the dashboard for `habits` tracked during `month` of `year`
    pub fn build(year: i32, month: Month, habits: &[Habit], top_limit: usize) -> Self {
        let days = days_in_month(year, month);
        let weeks = week_days(days);

        let rows = habits
            .iter()
            .enumerate()
            .map(|(index, habit)| HabitRow {
                index,
                name: habit.name.clone(),
                stats: habit_stats(habit, days),
                current_streak: habit.current_streak,
                longest_streak: habit.longest_streak,
                weeks: weeks
                    .iter()
                    .map(|week| {
                        week.iter()
                            .map(|day| DayCell {
                                day: *day,
                                checked: habit.is_completed_on(*day),
                            })
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        let global = global_stats(habits, days);

        Self {
            year,
            month: month.name().to_string(),
            days_in_month: days,
            habits: rows,
            top_habits: top_habits(habits, days, top_limit),
            global,
            overall_chart: ChartSeries {
                labels: vec!["Completed".to_string(), "Remaining".to_string()],
                values: vec![global.completed, global.remaining],
            },
            weekly: ChartSeries {
                labels: (1..=WEEKS_PER_MONTH).map(|week| format!("Week {}", week)).collect(),
                values: weekly_distribution(habits, days).to_vec(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::TOP_HABITS_LIMIT;
    use crate::domain::MonthRecord;

    #[test]
    fn test_empty_month_dashboard() {
        let dashboard = MonthDashboard::build(2024, Month::February, &[], TOP_HABITS_LIMIT);
        assert_eq!(dashboard.days_in_month, 29);
        assert!(dashboard.habits.is_empty());
        assert!(dashboard.top_habits.is_empty());
        assert_eq!(dashboard.global, HabitStats::default());
        assert_eq!(dashboard.weekly.values, vec![0, 0, 0, 0, 0]);
        assert_eq!(dashboard.weekly.labels[4], "Week 5");
    }

    #[test]
    fn test_grid_rows_follow_week_buckets() {
        let mut record = MonthRecord::new(2024, Month::April);
        record.add_habit("Read").unwrap();
        record.toggle_completion(0, 8).unwrap();
        record.toggle_completion(0, 30).unwrap();

        let dashboard = MonthDashboard::build(2024, Month::April, &record.habits, TOP_HABITS_LIMIT);
        let row = &dashboard.habits[0];

        assert_eq!(row.weeks.len(), 5);
        assert_eq!(row.weeks[1][0], DayCell { day: 8, checked: true });
        assert_eq!(row.weeks[4], vec![
            DayCell { day: 29, checked: false },
            DayCell { day: 30, checked: true },
        ]);
        assert_eq!(row.current_streak, 1);
        assert_eq!(dashboard.overall_chart.values, vec![2, 28]);
        assert_eq!(dashboard.weekly.values, vec![0, 1, 0, 0, 1]);
    }
}
