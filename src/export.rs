//! CSV projection of one month of records. Write-only: there is no
//! import path back into the working set.

use crate::engine::scope::records_for_member;
use crate::error::Result;
use crate::model::TimeRecord;
use crate::store::AttendanceStore;
use crate::utils::time::format_hours_compact;

const HEADERS: [&str; 6] = ["日付", "出勤時刻", "退勤時刻", "勤務時間", "休憩時間", "備考"];

/// Serialise a filtered record set as CSV, one row per record:
/// business-day date, clock-in time, clock-out time (勤務中 while open),
/// worked duration as H:MM (勤務中 while open), break minutes, notes.
pub fn month_csv(records: &[TimeRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADERS.join(","));
    for record in records {
        let row = [
            record.created_at.format("%Y/%m/%d").to_string(),
            record.clock_in.format("%H:%M:%S").to_string(),
            record
                .clock_out
                .map(|out| out.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "勤務中".to_string()),
            if record.is_open() {
                "勤務中".to_string()
            } else {
                format_hours_compact(record.worked_hours())
            },
            format!("{}分", record.break_duration),
            record.notes.clone(),
        ];
        lines.push(row.map(|field| escape(&field)).join(","));
    }
    lines.join("\n")
}

/// Scoped export: the acting user must be allowed to view the target.
/// Month is 1-indexed.
pub fn export_month_csv(
    store: &AttendanceStore,
    acting_user_id: &str,
    target_user_id: &str,
    year: i32,
    month: u32,
) -> Result<String> {
    let records = records_for_member(store, acting_user_id, target_user_id, year, month)?;
    Ok(month_csv(&records))
}

// Notes are free text; quote anything that would break the row shape.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
