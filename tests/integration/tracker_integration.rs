/// End-to-end workflows through the tracker server
use chrono::Month;
use monthly_habit_tracker::*;
use tempfile::TempDir;

fn config(dir: &TempDir, year: i32, month: Month) -> TrackerConfig {
    TrackerConfig {
        db_path: dir.path().join("habits.db"),
        storage_key: DEFAULT_STORAGE_KEY.to_string(),
        session: SessionOptions { start: (year, month), resume: false },
    }
}

#[test]
fn test_month_workflow_survives_restart() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let mut server = HabitTrackerServer::new(config(&dir, 2024, Month::April))
            .expect("Failed to create server");
        let session = server.session_mut();

        add_goal(session, AddGoalParams { name: "Read".to_string() }).unwrap();
        for day in [1, 2, 3, 4, 5, 10] {
            toggle_day(session, ToggleDayParams { index: 0, day }).unwrap();
        }
    }

    let server = HabitTrackerServer::new(config(&dir, 2024, Month::April))
        .expect("Failed to reopen server");
    let habit = &server.session().habits()[0];
    assert_eq!(habit.name, "Read");
    assert_eq!(habit.current_streak, 0);
    assert_eq!(habit.longest_streak, 5);
    assert_eq!(
        habit_stats(habit, 30),
        HabitStats { completed: 6, remaining: 24, percentage: 20 }
    );
}

#[test]
fn test_other_month_resolves_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let mut server = HabitTrackerServer::new(config(&dir, 2024, Month::March))
            .expect("Failed to create server");
        server.session_mut().add_habit("Read").unwrap();
    }

    let server = HabitTrackerServer::new(config(&dir, 2024, Month::April))
        .expect("Failed to reopen server");
    assert!(server.session().habits().is_empty());
    assert!(server.session().load_error().is_none());
    assert!(server.session().dataset().month(2024, Month::March).is_some());
}

#[test]
fn test_duplicate_goal_leaves_store_unchanged() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut server = HabitTrackerServer::new(config(&dir, 2024, Month::April))
        .expect("Failed to create server");

    server.session_mut().add_habit("read").unwrap();
    let before = server.session().persistence().load().dataset;

    let err = add_goal(server.session_mut(), AddGoalParams { name: "Read".to_string() })
        .unwrap_err();
    assert_eq!(err.user_message(), "This goal already exists");
    assert_eq!(server.session().persistence().load().dataset, before);
}

#[test]
fn test_resume_reopens_last_active_month() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let mut server = HabitTrackerServer::new(config(&dir, 2024, Month::January))
            .expect("Failed to create server");
        let session = server.session_mut();
        select_month(
            session,
            SelectMonthParams { year: 2023, month: MonthArg::Name("October".to_string()) },
        )
        .unwrap();
    }

    let mut resumed = config(&dir, 2024, Month::January);
    resumed.session.resume = true;
    let server = HabitTrackerServer::new(resumed).expect("Failed to reopen server");
    assert_eq!(server.session().active(), (2023, Month::October));
}

#[test]
fn test_year_report_and_dashboard_tools() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut server = HabitTrackerServer::new(config(&dir, 2024, Month::February))
        .expect("Failed to create server");
    let session = server.session_mut();

    session.add_habit("Run").unwrap();
    session.toggle_completion(0, 29).unwrap();
    session.select_month(2024, Month::May).unwrap();
    session.add_habit("Read").unwrap();
    session.add_habit("Stretch").unwrap();
    session.toggle_completion(1, 1).unwrap();
    session.toggle_completion(1, 2).unwrap();

    let dashboard = show_dashboard(server.session(), DashboardParams::default());
    assert_eq!(dashboard.dashboard.top_habits[0].name, "Stretch");
    assert_eq!(dashboard.dashboard.weekly.values, vec![2, 0, 0, 0, 0]);

    let report = generate_report(server.session(), YearReportParams { year: Some(2024) });
    assert_eq!(report.report.months_active, 2);
    assert_eq!(report.report.total_completed, 3);
    assert_eq!(report.report.total_remaining, 28 + 31 * 2 - 2);
}
