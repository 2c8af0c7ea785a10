//! Role-scoped visibility: which users an actor may see, and the
//! team-view projections built on top of that scope.

use crate::error::{EngineError, Result};
use crate::model::{EmployeeSummary, Role, TimeRecord, User};
use crate::store::AttendanceStore;

/// The users the acting user is allowed to view.
///
/// Pure filter, no side effects:
/// - admin: every other user, regardless of manager linkage;
/// - manager: direct reports by `manager_id`;
/// - employee: nobody.
pub fn subordinates<'a>(acting: &User, all_users: &'a [User]) -> Vec<&'a User> {
    match acting.role {
        Role::Admin => all_users.iter().filter(|u| u.id != acting.id).collect(),
        Role::Manager => all_users
            .iter()
            .filter(|u| u.manager_id.as_deref() == Some(acting.id.as_str()))
            .collect(),
        Role::Employee => Vec::new(),
    }
}

/// Case-insensitive name/email substring search plus an exact department
/// filter over an already scoped user list. `department: None` means all.
pub fn filter_employees<'a>(
    users: &[&'a User],
    search: &str,
    department: Option<&str>,
) -> Vec<&'a User> {
    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|u| {
            let matches_search = needle.is_empty()
                || u.name.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle);
            let matches_department = match department {
                Some(d) => u.department == d,
                None => true,
            };
            matches_search && matches_department
        })
        .copied()
        .collect()
}

/// Distinct department labels of a scoped user list, first-seen order.
pub fn departments(users: &[&User]) -> Vec<String> {
    let mut seen = Vec::new();
    for user in users {
        if !seen.contains(&user.department) {
            seen.push(user.department.clone());
        }
    }
    seen
}

fn require_team_access(acting: &User) -> Result<()> {
    if acting.role.can_view_team() {
        Ok(())
    } else {
        Err(EngineError::Unauthorized(format!(
            "user {} ({}) may not view team data",
            acting.id, acting.role
        )))
    }
}

/// Monthly summaries for everyone in the actor's subordinate scope.
/// Month is 1-indexed. `Unauthorized` for an employee-role actor.
pub fn team_summaries(
    store: &AttendanceStore,
    acting_user_id: &str,
    year: i32,
    month: u32,
) -> Result<Vec<EmployeeSummary>> {
    let acting = store
        .user(acting_user_id)
        .ok_or_else(|| EngineError::user_not_found(acting_user_id))?;
    require_team_access(acting)?;

    subordinates(acting, store.users())
        .into_iter()
        .map(|u| super::summary::summarize_month(store, &u.id, year, month))
        .collect()
}

/// One subordinate's records for a month, for the drill-down view and the
/// CSV export. `Unauthorized` when the target is outside the actor's
/// reporting line.
pub fn records_for_member(
    store: &AttendanceStore,
    acting_user_id: &str,
    target_user_id: &str,
    year: i32,
    month: u32,
) -> Result<Vec<TimeRecord>> {
    let acting = store
        .user(acting_user_id)
        .ok_or_else(|| EngineError::user_not_found(acting_user_id))?;
    require_team_access(acting)?;
    if store.user(target_user_id).is_none() {
        return Err(EngineError::user_not_found(target_user_id));
    }

    let visible = subordinates(acting, store.users());
    if !visible.iter().any(|u| u.id == target_user_id) {
        return Err(EngineError::Unauthorized(format!(
            "user {target_user_id} is not in the reporting line of {acting_user_id}"
        )));
    }

    Ok(super::summary::month_records(store.records(), target_user_id, year, month)
        .into_iter()
        .cloned()
        .collect())
}
