use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Unique within the user set; the login stub looks users up by email.
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Free-text department label, e.g. "営業部".
    pub department: String,
    /// Reporting line. Domain semantics expect the referenced user to be a
    /// manager or admin; the store does not enforce this, matching the
    /// original data set.
    pub manager_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
