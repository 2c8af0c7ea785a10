use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Derived monthly aggregate for one user. Recomputed on demand from the
/// working set, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub user: User,
    /// Sum of closed-interval hours in the selected month.
    pub monthly_hours: f64,
    /// Record count in the selected month. Deliberately counts records,
    /// not distinct calendar days: two records on one day count as 2.
    pub monthly_days: usize,
    /// Clock-in of the open record in the selected month, if any.
    pub last_clock_in: Option<DateTime<Utc>>,
    pub is_currently_working: bool,
}

/// Per-user statistics for one month of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub total_hours: f64,
    /// Record count, same semantics as `EmployeeSummary::monthly_days`.
    pub total_days: usize,
    pub average_hours: f64,
    /// Hours beyond the standard workday, summed per record.
    pub overtime_hours: f64,
}

/// Aggregate over a set of scoped summaries, the admin dashboard's
/// four stat cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStats {
    pub total_employees: usize,
    pub currently_working: usize,
    pub average_hours: f64,
    pub late_arrivals: usize,
}
