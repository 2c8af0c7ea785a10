//! End-to-end walks through the engine the way the presentation layer
//! drives it: a working day, a manager's month view, and a CSV export.

use chrono::{TimeZone, Utc};

use kintai::engine::{attendance, scope, summary};
use kintai::export;
use kintai::model::RecordPatch;
use kintai::utils::time::{format_hours, split_hours};
use kintai::{AttendanceStore, EngineError};

#[test]
fn full_working_day_with_break() {
    let mut store = AttendanceStore::with_demo_data();

    let opened =
        attendance::clock_in_at(&mut store, "user2", Utc.with_ymd_and_hms(2024, 12, 21, 9, 0, 0).unwrap())
            .unwrap();
    assert!(opened.is_open());

    // A second clock-in is an invalid transition while the first is open.
    let err =
        attendance::clock_in_at(&mut store, "user2", Utc.with_ymd_and_hms(2024, 12, 21, 9, 5, 0).unwrap())
            .unwrap_err();
    assert!(matches!(err, EngineError::InvalidTransition(_)));

    let closed =
        attendance::clock_out_at(&mut store, "user2", Utc.with_ymd_and_hms(2024, 12, 21, 18, 0, 0).unwrap())
            .unwrap();
    assert_eq!(closed.id, opened.id);
    assert_eq!(closed.worked_hours(), 9.0);

    let patch = RecordPatch { break_duration: Some(60), ..Default::default() };
    let updated = attendance::update_record(&mut store, &closed.id, &patch).unwrap();
    assert_eq!(updated.break_duration, 60);
    assert_eq!(split_hours(updated.worked_hours()), (9, 0));
    assert_eq!(format_hours(updated.worked_hours()), "9時間 0分");
}

#[test]
fn manager_month_view_and_late_check() {
    let store = AttendanceStore::with_demo_data();

    let summaries = scope::team_summaries(&store, "manager2", 2024, 12).unwrap();
    assert_eq!(summaries.len(), 1);
    let suzuki = &summaries[0];
    assert_eq!(suzuki.user.id, "user3");
    assert!(suzuki.is_currently_working);
    assert_eq!(suzuki.monthly_hours, 0.0);
    assert_eq!(suzuki.monthly_days, 1);

    let stats = summary::team_stats(&summaries, 9);
    assert_eq!(stats.currently_working, 1);
    // the 09:30 clock-in is not strictly past hour 9
    assert_eq!(stats.late_arrivals, 0);
    assert_eq!(summary::team_stats(&summaries, 8).late_arrivals, 1);
}

#[test]
fn employee_cannot_reach_team_data() {
    let store = AttendanceStore::with_demo_data();

    let err = scope::team_summaries(&store, "user1", 2024, 12).unwrap_err();
    assert!(matches!(err, EngineError::Unauthorized(_)));

    let err = export::export_month_csv(&store, "user1", "user2", 2024, 12).unwrap_err();
    assert!(matches!(err, EngineError::Unauthorized(_)));
}

#[test]
fn export_written_to_disk_round_trips_nothing() {
    let store = AttendanceStore::with_demo_data();
    let csv = export::export_month_csv(&store, "manager1", "user1", 2024, 12).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user1_2024_12.csv");
    std::fs::write(&path, &csv).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 4); // header + three December records
    assert!(written.starts_with("日付,出勤時刻,退勤時刻,勤務時間,休憩時間,備考"));
}

#[test]
fn delete_then_summary_reflects_removal() {
    let mut store = AttendanceStore::with_demo_data();
    let before = summary::summarize_month(&store, "user1", 2024, 12).unwrap();
    assert_eq!(before.monthly_days, 3);

    attendance::delete_record(&mut store, "3").unwrap();
    let after = summary::summarize_month(&store, "user1", 2024, 12).unwrap();
    assert_eq!(after.monthly_days, 2);
    assert_eq!(after.monthly_hours, 18.0);

    // deletion is permanent; the id is gone
    let err = attendance::delete_record(&mut store, "3").unwrap_err();
    assert_eq!(err, EngineError::record_not_found("3"));
}
