use anyhow::Context;
use chrono::{Datelike, Utc};
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use kintai::engine::{attendance, scope, summary};
use kintai::export;
use kintai::utils::time::format_hours;
use kintai::{AttendanceStore, Config};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("attendance engine demo starting");

    let mut store = if config.seed_demo_data {
        AttendanceStore::with_demo_data()
    } else {
        AttendanceStore::new()
    };

    // Login stub: plain email lookup, no credential verification.
    let employee_id = store
        .find_user_by_email("employee@company.com")
        .map(|u| u.id.clone())
        .context("demo employee missing from seed")?;

    // A full working day for the employee.
    let opened = attendance::clock_in(&mut store, &employee_id)?;
    info!(record_id = %opened.id, "employee clocked in");
    let closed = attendance::clock_out(&mut store, &employee_id)?;
    info!(
        record_id = %closed.id,
        duration = %format_hours(closed.worked_hours()),
        "employee clocked out"
    );

    // Personal monthly view.
    let now = Utc::now();
    let mine = summary::summarize_month(&store, &employee_id, now.year(), now.month())?;
    info!(
        hours = %format_hours(mine.monthly_hours),
        days = mine.monthly_days,
        working = mine.is_currently_working,
        "personal monthly summary"
    );

    // Team view for December 2024, the month the seed data lives in.
    let summaries = scope::team_summaries(&store, "manager1", 2024, 12)?;
    let stats = summary::team_stats(&summaries, config.late_cutoff_hour);
    info!(
        employees = stats.total_employees,
        working = stats.currently_working,
        average = %format_hours(stats.average_hours),
        late = stats.late_arrivals,
        "team statistics"
    );

    // Scoped CSV export of one subordinate's month.
    let csv = export::export_month_csv(&store, "manager1", &employee_id, 2024, 12)?;
    std::fs::create_dir_all(&config.export_dir)
        .with_context(|| format!("creating export dir {}", config.export_dir))?;
    let path = format!("{}/user1_2024_12.csv", config.export_dir);
    std::fs::write(&path, csv).with_context(|| format!("writing {path}"))?;
    info!(%path, "monthly CSV exported");

    Ok(())
}
