pub mod role;
pub mod summary;
pub mod time_record;
pub mod user;

pub use role::Role;
pub use summary::{EmployeeSummary, MonthlyStats, TeamStats};
pub use time_record::{RecordPatch, TimeRecord};
pub use user::User;
