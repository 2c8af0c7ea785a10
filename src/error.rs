use chrono::{DateTime, Utc};
use thiserror::Error;

/// Engine error taxonomy.
///
/// The original treated most invalid inputs as silent no-ops; here every
/// invalid input is reported to the caller. The presentation layer decides
/// user-facing messaging.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An operation targeted an id absent from the working set.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Clock-in while already clocked in, clock-out with no open record,
    /// or an edit that would reopen a record while another one is open.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// A supplied clock-out precedes the clock-in it is paired with.
    #[error("clock-out {clock_out} precedes clock-in {clock_in}")]
    InvalidInterval {
        clock_in: DateTime<Utc>,
        clock_out: DateTime<Utc>,
    },

    /// The acting user has no visibility into the requested data.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl EngineError {
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::NotFound { entity: "user", id: id.into() }
    }

    pub fn record_not_found(id: impl Into<String>) -> Self {
        Self::NotFound { entity: "time record", id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
