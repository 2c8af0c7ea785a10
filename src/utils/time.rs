use chrono::{DateTime, Datelike, Utc};

/// Worked hours for one record interval.
///
/// An absent clock-out means the record is still open and contributes
/// nothing to totals; only closed intervals count.
pub fn worked_hours(clock_in: DateTime<Utc>, clock_out: Option<DateTime<Utc>>) -> f64 {
    match clock_out {
        Some(out) => (out - clock_in).num_milliseconds() as f64 / 3_600_000.0,
        None => 0.0,
    }
}

/// Elapsed hours of an open interval against an externally supplied "now".
///
/// Closed records report their fixed duration instead. The presentation
/// tick calls this once a second; it never mutates anything.
pub fn elapsed_hours(clock_in: DateTime<Utc>, clock_out: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    match clock_out {
        Some(out) => (out - clock_in).num_milliseconds() as f64 / 3_600_000.0,
        None => (now - clock_in).num_milliseconds() as f64 / 3_600_000.0,
    }
}

/// Floor decomposition of fractional hours into (whole hours, minutes).
pub fn split_hours(hours: f64) -> (i64, i64) {
    let h = hours.floor() as i64;
    let m = ((hours - h as f64) * 60.0).floor() as i64;
    (h, m)
}

/// Display form used throughout the UI, e.g. 9.0 -> "9時間 0分".
pub fn format_hours(hours: f64) -> String {
    let (h, m) = split_hours(hours);
    format!("{}時間 {}分", h, m)
}

/// Compact H:MM form used in the CSV export, e.g. 7.5 -> "7:30".
pub fn format_hours_compact(hours: f64) -> String {
    let (h, m) = split_hours(hours);
    format!("{}:{:02}", h, m)
}

/// True when `ts` falls inside the given calendar month.
/// `month` is 1-indexed (January = 1), matching `chrono::Datelike::month`.
pub fn in_month(ts: DateTime<Utc>, year: i32, month: u32) -> bool {
    ts.year() == year && ts.month() == month
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn worked_hours_closed_interval() {
        let start = Utc.with_ymd_and_hms(2024, 12, 20, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 20, 18, 0, 0).unwrap();
        assert_eq!(worked_hours(start, Some(end)), 9.0);
    }

    #[test]
    fn worked_hours_open_interval_is_zero() {
        let start = Utc.with_ymd_and_hms(2024, 12, 20, 9, 30, 0).unwrap();
        assert_eq!(worked_hours(start, None), 0.0);
    }

    #[test]
    fn elapsed_hours_uses_now_for_open_record() {
        let start = Utc.with_ymd_and_hms(2024, 12, 20, 9, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 12, 20, 10, 30, 0).unwrap();
        assert_eq!(elapsed_hours(start, None, now), 1.5);
    }

    #[test]
    fn split_hours_floors_both_parts() {
        assert_eq!(split_hours(9.0), (9, 0));
        assert_eq!(split_hours(7.5), (7, 30));
        assert_eq!(split_hours(0.999), (0, 59));
    }

    #[test]
    fn formats_japanese_display_form() {
        assert_eq!(format_hours(9.0), "9時間 0分");
        assert_eq!(format_hours(7.25), "7時間 15分");
    }

    #[test]
    fn formats_compact_form() {
        assert_eq!(format_hours_compact(7.5), "7:30");
        assert_eq!(format_hours_compact(9.0), "9:00");
    }

    #[test]
    fn in_month_checks_year_and_month() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 20, 9, 0, 0).unwrap();
        assert!(in_month(ts, 2024, 12));
        assert!(!in_month(ts, 2024, 11));
        assert!(!in_month(ts, 2023, 12));
    }
}
