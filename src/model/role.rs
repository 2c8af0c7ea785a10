use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Closed role set. Every decision point matches exhaustively on this;
/// no string comparisons downstream.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
    Admin,
}

impl Role {
    /// Whether this role may request team-scoped views at all.
    pub fn can_view_team(self) -> bool {
        match self {
            Role::Employee => false,
            Role::Manager | Role::Admin => true,
        }
    }
}
