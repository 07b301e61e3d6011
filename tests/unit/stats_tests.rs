/// Habit rules and month statistics
use chrono::Month;
use monthly_habit_tracker::*;

fn april_with(goals: &[(&str, Vec<u32>)]) -> MonthRecord {
    let mut record = MonthRecord::new(2024, Month::April);
    for (name, days) in goals {
        let index = record.add_habit(name).unwrap();
        for day in days {
            record.toggle_completion(index, *day).unwrap();
        }
    }
    record
}

#[test]
fn test_duplicate_names_ignore_case() {
    let mut record = april_with(&[("read", vec![])]);
    let err = record.add_habit("  Read ").unwrap_err();
    assert_eq!(err, DomainError::Duplicate { name: "Read".to_string() });
    assert_eq!(err.user_message(), "This goal already exists");
    assert_eq!(record.habits.len(), 1);
}

#[test]
fn test_toggle_twice_restores_stats() {
    let mut record = april_with(&[("Run", vec![3])]);
    let before = habit_stats(&record.habits[0], 30);

    assert!(record.toggle_completion(0, 4).unwrap());
    assert!(!record.toggle_completion(0, 4).unwrap());

    assert_eq!(habit_stats(&record.habits[0], 30), before);
    assert_eq!(record.habits[0].longest_streak, 1);
}

#[test]
fn test_streaks_follow_toggles() {
    let record = april_with(&[("Read", vec![1, 2, 3, 4, 5, 10])]);
    let habit = &record.habits[0];
    assert_eq!(habit.current_streak, 0);
    assert_eq!(habit.longest_streak, 5);

    let ending = april_with(&[("Read", vec![28, 29, 30])]);
    assert_eq!(ending.habits[0].current_streak, 3);
}

#[test]
fn test_global_stats_weigh_by_days() {
    let record = april_with(&[("A", (1..=30).collect()), ("B", vec![])]);
    let global = global_stats(&record.habits, 30);
    assert_eq!(global, HabitStats { completed: 30, remaining: 30, percentage: 50 });
}

#[test]
fn test_top_habits_stable_and_truncated() {
    let record = april_with(&[
        ("A", vec![1]),
        ("B", vec![1, 2]),
        ("C", vec![5]),
        ("D", vec![]),
    ]);
    let top = top_habits(&record.habits, 30, 3);
    let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["B", "A", "C"]);
    assert_eq!(top[0].index, 1);
}

#[test]
fn test_weekly_distribution_sums_to_global() {
    let record = april_with(&[("A", vec![1, 8, 15, 22, 29, 30]), ("B", vec![7, 29])]);
    let weeks = weekly_distribution(&record.habits, 30);
    assert_eq!(weeks, [2, 1, 1, 1, 3]);
    assert_eq!(weeks.iter().sum::<u32>(), global_stats(&record.habits, 30).completed);
}

#[test]
fn test_dashboard_grid() {
    let record = april_with(&[("Read", vec![1, 30])]);
    let dashboard = MonthDashboard::build(2024, Month::April, &record.habits, TOP_HABITS_LIMIT);

    assert_eq!(dashboard.days_in_month, 30);
    let row = &dashboard.habits[0];
    assert_eq!(row.weeks.len(), 5);
    assert_eq!(row.weeks[4].len(), 2);
    assert!(row.weeks[0][0].checked);
    assert!(row.weeks[4][1].checked);
    assert_eq!(dashboard.overall_chart.values, vec![2, 28]);
}
