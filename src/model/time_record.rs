use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::utils::time::worked_hours;

/// One clock-in/clock-out interval belonging to a user.
///
/// An absent `clock_out` is the "currently working" signal; there is no
/// separate flag. `created_at` is the business day the record belongs to,
/// which monthly filtering keys on (distinct from `clock_in`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRecord {
    pub id: String,
    pub user_id: String,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    /// Break duration in minutes.
    pub break_duration: u32,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimeRecord {
    /// A fresh open record for `user_id`, clocked in at `now`.
    pub fn open(user_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            clock_in: now,
            clock_out: None,
            break_duration: 0,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Hours of the closed interval, 0.0 while open.
    pub fn worked_hours(&self) -> f64 {
        worked_hours(self.clock_in, self.clock_out)
    }
}

/// Partial update for the editable fields of a record.
///
/// Absent fields are left untouched. `clock_out` is doubly optional so a
/// patch can distinguish "leave alone" (outer `None`) from "clear it",
/// i.e. reopen the record (`Some(None)`); in JSON a missing key is the
/// former and an explicit `null` the latter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordPatch {
    pub clock_in: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub clock_out: Option<Option<DateTime<Utc>>>,
    pub break_duration: Option<u32>,
    pub notes: Option<String>,
}

// A present-but-null key must become Some(None); serde's stock Option
// deserializer would collapse it to None.
fn double_option<'de, D>(de: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DateTime<Utc>>::deserialize(de).map(Some)
}
