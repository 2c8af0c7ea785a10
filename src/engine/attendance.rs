//! Record mutations: clock-in, clock-out, edit, delete.
//!
//! Every mutation targets exactly one record by id and refreshes its
//! `updated_at`. Invalid inputs are reported as errors, never silently
//! ignored.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{EngineError, Result};
use crate::model::{RecordPatch, TimeRecord};
use crate::store::AttendanceStore;

/// Open a new record for `user_id` at the current instant.
///
/// Fails with `InvalidTransition` when the user already has an open
/// record; a user cannot be clocked in twice concurrently.
pub fn clock_in(store: &mut AttendanceStore, user_id: &str) -> Result<TimeRecord> {
    clock_in_at(store, user_id, Utc::now())
}

/// Same as [`clock_in`] with an explicit instant.
pub fn clock_in_at(store: &mut AttendanceStore, user_id: &str, now: DateTime<Utc>) -> Result<TimeRecord> {
    if store.user(user_id).is_none() {
        return Err(EngineError::user_not_found(user_id));
    }
    if store.open_record_for(user_id).is_some() {
        return Err(EngineError::InvalidTransition(format!(
            "user {user_id} is already clocked in"
        )));
    }

    let record = TimeRecord::open(user_id, now);
    info!(user_id, record_id = %record.id, "clocked in");
    store.push_record(record.clone());
    Ok(record)
}

/// Close the user's open record at the current instant.
///
/// Fails with `InvalidTransition` when no open record exists.
pub fn clock_out(store: &mut AttendanceStore, user_id: &str) -> Result<TimeRecord> {
    clock_out_at(store, user_id, Utc::now())
}

/// Same as [`clock_out`] with an explicit instant.
pub fn clock_out_at(store: &mut AttendanceStore, user_id: &str, now: DateTime<Utc>) -> Result<TimeRecord> {
    let record_id = store
        .open_record_for(user_id)
        .map(|r| r.id.clone())
        .ok_or_else(|| {
            EngineError::InvalidTransition(format!("user {user_id} has no open record"))
        })?;

    // lookup above guarantees the id is present
    let record = match store.record_mut(&record_id) {
        Some(r) => r,
        None => return Err(EngineError::record_not_found(record_id)),
    };
    record.clock_out = Some(now);
    record.updated_at = now;
    let record = record.clone();
    info!(user_id, record_id = %record.id, hours = record.worked_hours(), "clocked out");
    Ok(record)
}

/// Merge `patch` into the record with the given id.
///
/// Fields absent from the patch are preserved. Validation:
/// - the resulting interval must be chronological (`InvalidInterval`);
/// - clearing `clock_out` reopens the record, which is rejected when the
///   owner already has a different open record (`InvalidTransition`).
pub fn update_record(store: &mut AttendanceStore, id: &str, patch: &RecordPatch) -> Result<TimeRecord> {
    update_record_at(store, id, patch, Utc::now())
}

/// Same as [`update_record`] with an explicit instant for `updated_at`.
pub fn update_record_at(
    store: &mut AttendanceStore,
    id: &str,
    patch: &RecordPatch,
    now: DateTime<Utc>,
) -> Result<TimeRecord> {
    let current = store
        .record(id)
        .ok_or_else(|| EngineError::record_not_found(id))?;

    let clock_in = patch.clock_in.unwrap_or(current.clock_in);
    let clock_out = match patch.clock_out {
        Some(value) => value,
        None => current.clock_out,
    };

    if let Some(out) = clock_out {
        if out < clock_in {
            return Err(EngineError::InvalidInterval { clock_in, clock_out: out });
        }
    }

    // Reopening: was closed, patch clears clock_out. Guard the
    // one-open-record-per-user invariant.
    if clock_out.is_none() && current.clock_out.is_some() {
        let owner = current.user_id.clone();
        if let Some(open) = store.open_record_for(&owner) {
            if open.id != id {
                return Err(EngineError::InvalidTransition(format!(
                    "user {owner} already has open record {}",
                    open.id
                )));
            }
        }
    }

    let record = match store.record_mut(id) {
        Some(r) => r,
        None => return Err(EngineError::record_not_found(id)),
    };
    record.clock_in = clock_in;
    record.clock_out = clock_out;
    if let Some(break_duration) = patch.break_duration {
        record.break_duration = break_duration;
    }
    if let Some(notes) = &patch.notes {
        record.notes = notes.clone();
    }
    record.updated_at = now;
    let record = record.clone();
    debug!(record_id = id, "record updated");
    Ok(record)
}

/// Remove exactly the record with the given id, returning it.
pub fn delete_record(store: &mut AttendanceStore, id: &str) -> Result<TimeRecord> {
    let record = store
        .remove_record(id)
        .ok_or_else(|| EngineError::record_not_found(id))?;
    info!(record_id = id, user_id = %record.user_id, "record deleted");
    Ok(record)
}
