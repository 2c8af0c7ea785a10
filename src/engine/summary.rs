//! Derived aggregates: monthly summaries, daily totals, team statistics.
//!
//! Everything here is a pure projection over the working set; calling any
//! of these twice with the same inputs yields the same output. Months are
//! 1-indexed (January = 1) throughout, matching `chrono::Datelike::month`.

use chrono::{DateTime, Timelike, Utc};

use crate::error::{EngineError, Result};
use crate::model::{EmployeeSummary, MonthlyStats, TeamStats, TimeRecord};
use crate::store::AttendanceStore;
use crate::utils::time::in_month;

/// Monthly summary for one user.
///
/// Records are filtered by their `created_at` business day, not by
/// `clock_in`. Open records contribute no hours but drive
/// `last_clock_in` / `is_currently_working`.
pub fn summarize_month(
    store: &AttendanceStore,
    user_id: &str,
    year: i32,
    month: u32,
) -> Result<EmployeeSummary> {
    let user = store
        .user(user_id)
        .ok_or_else(|| EngineError::user_not_found(user_id))?;

    let in_scope: Vec<&TimeRecord> = store
        .records()
        .iter()
        .filter(|r| r.user_id == user_id && in_month(r.created_at, year, month))
        .collect();

    let monthly_hours: f64 = in_scope.iter().map(|r| r.worked_hours()).sum();
    let open = in_scope.iter().find(|r| r.is_open());

    Ok(EmployeeSummary {
        user: user.clone(),
        monthly_hours,
        monthly_days: in_scope.len(),
        last_clock_in: open.map(|r| r.clock_in),
        is_currently_working: open.is_some(),
    })
}

/// Records of one user inside the given month, in working-set order.
pub fn month_records<'a>(
    records: &'a [TimeRecord],
    user_id: &str,
    year: i32,
    month: u32,
) -> Vec<&'a TimeRecord> {
    records
        .iter()
        .filter(|r| r.user_id == user_id && in_month(r.created_at, year, month))
        .collect()
}

/// Total closed-interval hours for records whose business day equals `date`.
pub fn hours_for_day(records: &[TimeRecord], date: chrono::NaiveDate) -> f64 {
    records
        .iter()
        .filter(|r| r.created_at.date_naive() == date)
        .map(|r| r.worked_hours())
        .sum()
}

/// Per-user statistics for one month. `standard_workday` is the hour
/// threshold beyond which a record counts as overtime (config default 8.0).
pub fn monthly_stats(
    records: &[TimeRecord],
    user_id: &str,
    year: i32,
    month: u32,
    standard_workday: f64,
) -> MonthlyStats {
    let in_scope = month_records(records, user_id, year, month);
    let total_hours: f64 = in_scope.iter().map(|r| r.worked_hours()).sum();
    let total_days = in_scope.len();
    let average_hours = if total_days > 0 {
        total_hours / total_days as f64
    } else {
        0.0
    };
    let overtime_hours = in_scope
        .iter()
        .map(|r| (r.worked_hours() - standard_workday).max(0.0))
        .sum();

    MonthlyStats { total_hours, total_days, average_hours, overtime_hours }
}

/// Summaries whose open-record clock-in falls strictly after `cutoff_hour`
/// (hour-of-day of the stored UTC instant). Summaries without a
/// `last_clock_in` are skipped.
pub fn late_arrival_count(summaries: &[EmployeeSummary], cutoff_hour: u32) -> usize {
    summaries
        .iter()
        .filter(|s| match s.last_clock_in {
            Some(ts) => ts.hour() > cutoff_hour,
            None => false,
        })
        .count()
}

/// The admin dashboard's stat cards over a set of scoped summaries.
pub fn team_stats(summaries: &[EmployeeSummary], cutoff_hour: u32) -> TeamStats {
    let total_employees = summaries.len();
    let currently_working = summaries.iter().filter(|s| s.is_currently_working).count();
    let average_hours = if total_employees > 0 {
        summaries.iter().map(|s| s.monthly_hours).sum::<f64>() / total_employees as f64
    } else {
        0.0
    };

    TeamStats {
        total_employees,
        currently_working,
        average_hours,
        late_arrivals: late_arrival_count(summaries, cutoff_hour),
    }
}

/// Elapsed hours of a user's open record against `now`, for the
/// once-per-second presentation refresh. None when not clocked in.
pub fn current_working_hours(
    store: &AttendanceStore,
    user_id: &str,
    now: DateTime<Utc>,
) -> Option<f64> {
    store
        .open_record_for(user_id)
        .map(|r| crate::utils::time::elapsed_hours(r.clock_in, r.clock_out, now))
}
