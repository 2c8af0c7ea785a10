pub mod attendance;
pub mod scope;
pub mod summary;

pub use attendance::{clock_in, clock_out, delete_record, update_record};
pub use scope::{records_for_member, subordinates, team_summaries};
pub use summary::{late_arrival_count, summarize_month, team_stats};
