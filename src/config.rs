use std::env;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    /// Clock-in hour-of-day strictly after which an arrival counts as late.
    pub late_cutoff_hour: u32,
    /// Hours per record beyond which time counts as overtime.
    pub standard_workday_hours: f64,
    /// Seed the store with the demo data set on startup.
    pub seed_demo_data: bool,
    pub log_dir: String,
    pub export_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            late_cutoff_hour: env::var("LATE_CUTOFF_HOUR")
                .unwrap_or_else(|_| "9".to_string())
                .parse()
                .unwrap_or(9),
            standard_workday_hours: env::var("STANDARD_WORKDAY_HOURS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .unwrap_or(8.0),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            export_dir: env::var("EXPORT_DIR").unwrap_or_else(|_| "exports".to_string()),
        }
    }
}
