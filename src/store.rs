use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::model::{Role, TimeRecord, User};

/// In-memory working set: the user directory and the flat record list.
///
/// Constructed once per session, empty or seeded, and discarded on
/// teardown. All engine operations borrow it; nothing module-level holds
/// a copy. State is ephemeral by design, there is no persistence layer.
#[derive(Debug, Clone, Default)]
pub struct AttendanceStore {
    users: Vec<User>,
    records: Vec<TimeRecord>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo data set: six users across three departments and six
    /// December 2024 records, one of them still open.
    pub fn with_demo_data() -> Self {
        let now = Utc::now();
        let users = vec![
            User {
                id: "user1".into(),
                email: "employee@company.com".into(),
                name: "田中太郎".into(),
                role: Role::Employee,
                department: "営業部".into(),
                manager_id: Some("manager1".into()),
                created_at: now,
            },
            User {
                id: "user2".into(),
                email: "employee2@company.com".into(),
                name: "佐藤花子".into(),
                role: Role::Employee,
                department: "営業部".into(),
                manager_id: Some("manager1".into()),
                created_at: now,
            },
            User {
                id: "user3".into(),
                email: "employee3@company.com".into(),
                name: "鈴木一郎".into(),
                role: Role::Employee,
                department: "開発部".into(),
                manager_id: Some("manager2".into()),
                created_at: now,
            },
            User {
                id: "manager1".into(),
                email: "manager@company.com".into(),
                name: "山田部長".into(),
                role: Role::Manager,
                department: "営業部".into(),
                manager_id: None,
                created_at: now,
            },
            User {
                id: "manager2".into(),
                email: "manager2@company.com".into(),
                name: "高橋部長".into(),
                role: Role::Manager,
                department: "開発部".into(),
                manager_id: None,
                created_at: now,
            },
            User {
                id: "admin1".into(),
                email: "admin@company.com".into(),
                name: "管理者".into(),
                role: Role::Admin,
                department: "総務部".into(),
                manager_id: None,
                created_at: now,
            },
        ];

        let demo_record = |id: &str, user_id: &str, day: u32, in_hm: (u32, u32), out_hm: Option<(u32, u32)>, brk: u32, notes: &str| {
            let created = Utc.with_ymd_and_hms(2024, 12, day, 0, 0, 0).unwrap();
            TimeRecord {
                id: id.into(),
                user_id: user_id.into(),
                clock_in: Utc.with_ymd_and_hms(2024, 12, day, in_hm.0, in_hm.1, 0).unwrap(),
                clock_out: out_hm.map(|(h, m)| Utc.with_ymd_and_hms(2024, 12, day, h, m, 0).unwrap()),
                break_duration: brk,
                notes: notes.into(),
                created_at: created,
                updated_at: created,
            }
        };

        let records = vec![
            demo_record("1", "user1", 20, (9, 0), Some((18, 0)), 60, "通常勤務"),
            demo_record("2", "user1", 19, (8, 30), Some((17, 30)), 60, "早出勤務"),
            demo_record("3", "user1", 18, (9, 15), Some((18, 30)), 60, "残業あり"),
            demo_record("4", "user2", 20, (8, 45), Some((17, 45)), 60, "通常勤務"),
            demo_record("5", "user2", 19, (9, 10), Some((18, 10)), 60, "少し遅刻"),
            demo_record("6", "user3", 20, (9, 30), None, 0, "現在勤務中"),
        ];

        Self { users, records }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn records(&self) -> &[TimeRecord] {
        &self.records
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Login stub: a plain lookup, no credential verification.
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Registration stub: appends a default employee-role user with no
    /// reporting line.
    pub fn register_user(&mut self, email: impl Into<String>, name: impl Into<String>, department: impl Into<String>) -> &User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            name: name.into(),
            role: Role::Employee,
            department: department.into(),
            manager_id: None,
            created_at: Utc::now(),
        };
        self.users.push(user);
        // push above makes the list non-empty
        &self.users[self.users.len() - 1]
    }

    pub fn records_for(&self, user_id: &str) -> Vec<&TimeRecord> {
        self.records.iter().filter(|r| r.user_id == user_id).collect()
    }

    /// The user's open record, if any. The engine maintains the invariant
    /// that at most one exists per user.
    pub fn open_record_for(&self, user_id: &str) -> Option<&TimeRecord> {
        self.records.iter().find(|r| r.user_id == user_id && r.is_open())
    }

    pub(crate) fn record(&self, id: &str) -> Option<&TimeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub(crate) fn record_mut(&mut self, id: &str) -> Option<&mut TimeRecord> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    pub(crate) fn push_record(&mut self, record: TimeRecord) {
        self.records.push(record);
    }

    pub(crate) fn remove_record(&mut self, id: &str) -> Option<TimeRecord> {
        let idx = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_users_or_records() {
        let store = AttendanceStore::new();
        assert!(store.users().is_empty());
        assert!(store.records().is_empty());
    }

    #[test]
    fn demo_seed_matches_original_data_set() {
        let store = AttendanceStore::with_demo_data();
        assert_eq!(store.users().len(), 6);
        assert_eq!(store.records().len(), 6);
        // one open record, owned by user3
        let open: Vec<_> = store.records().iter().filter(|r| r.is_open()).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].user_id, "user3");
    }

    #[test]
    fn login_stub_finds_user_by_email() {
        let store = AttendanceStore::with_demo_data();
        let user = store.find_user_by_email("manager@company.com").unwrap();
        assert_eq!(user.name, "山田部長");
        assert!(store.find_user_by_email("nobody@company.com").is_none());
    }

    #[test]
    fn registration_appends_default_employee() {
        let mut store = AttendanceStore::new();
        let id = store.register_user("new@company.com", "テストユーザー", "テスト部").id.clone();
        let user = store.user(&id).unwrap();
        assert_eq!(user.role, Role::Employee);
        assert!(user.manager_id.is_none());
    }

    #[test]
    fn open_record_lookup_is_per_user() {
        let store = AttendanceStore::with_demo_data();
        assert!(store.open_record_for("user3").is_some());
        assert!(store.open_record_for("user1").is_none());
    }
}
