/// Calendar arithmetic and month keys
use chrono::Month;
use monthly_habit_tracker::*;

#[test]
fn test_days_in_month_covers_leap_rules() {
    assert_eq!(days_in_month(2024, Month::February), 29);
    assert_eq!(days_in_month(2023, Month::February), 28);
    assert_eq!(days_in_month(1900, Month::February), 28);
    assert_eq!(days_in_month(2000, Month::February), 29);
    assert_eq!(days_in_month(2024, Month::April), 30);
    assert_eq!(days_in_month(2024, Month::December), 31);
}

#[test]
fn test_week_buckets_are_fixed_day_counts() {
    assert_eq!(week_of_month(1), 1);
    assert_eq!(week_of_month(7), 1);
    assert_eq!(week_of_month(8), 2);
    assert_eq!(week_of_month(28), 4);
    assert_eq!(week_of_month(29), 5);
    assert_eq!(week_of_month(31), 5);

    let weeks = week_days(28);
    assert!(weeks[4].is_empty());
    assert_eq!(weeks.iter().map(Vec::len).sum::<usize>(), 28);
}

#[test]
fn test_month_keys() {
    assert_eq!(month_key(2024, Month::March), "2024_March");
    assert_eq!(parse_month_key("2024_March"), Some((2024, Month::March)));
    assert_eq!(parse_month_key("2024_march"), None);
    assert_eq!(parse_month_key("March_2024"), None);
}

#[test]
fn test_month_lookup() {
    assert_eq!(month_from_index(0), Some(Month::January));
    assert_eq!(month_from_index(11), Some(Month::December));
    assert_eq!(month_from_index(12), None);
    assert_eq!(month_from_name("September"), Some(Month::September));
    assert_eq!(month_from_name("Sept"), None);
}
