/// Year summaries across stored months
use chrono::Month;
use monthly_habit_tracker::*;

fn record(year: i32, month: Month, goals: &[(&str, Vec<u32>)]) -> MonthRecord {
    let mut record = MonthRecord::new(year, month);
    for (name, days) in goals {
        let index = record.add_habit(name).unwrap();
        for day in days {
            record.toggle_completion(index, *day).unwrap();
        }
    }
    record
}

#[test]
fn test_year_summary_in_calendar_order() {
    let mut dataset = Dataset::default();
    dataset.insert(record(2024, Month::November, &[("Read", vec![1])]));
    dataset.insert(record(2024, Month::February, &[("Run", vec![1, 2]), ("Read", vec![])]));
    dataset.insert(record(2023, Month::February, &[("Old", vec![1])]));

    let report = year_summary(&dataset, 2024);
    assert_eq!(report.months_active, 2);
    let months: Vec<&str> = report.months.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, ["February", "November"]);

    assert_eq!(report.total_completed, 3);
    assert_eq!(report.total_remaining, (29 * 2 - 2) + (30 - 1));
    assert_eq!(report.months[0].goal_count, 2);
    assert_eq!(report.months[0].habits[0].days, 29);
}

#[test]
fn test_empty_year() {
    let report = year_summary(&Dataset::default(), 2024);
    assert!(report.is_empty());
    assert_eq!(report.months_active, 0);
    assert_eq!(report.percentage, 0);
}

#[test]
fn test_month_without_goals_counts_as_active() {
    let mut dataset = Dataset::default();
    let mut march = record(2024, Month::March, &[("Read", vec![])]);
    march.remove_habit(0).unwrap();
    dataset.insert(march);

    let report = year_summary(&dataset, 2024);
    assert_eq!(report.months_active, 1);
    assert_eq!(report.months[0].goal_count, 0);
    assert_eq!(report.percentage, 0);
}
