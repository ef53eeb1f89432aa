//! Payroll record storage.
//!
//! The store is the only shared mutable resource in the engine. It enforces
//! the two storage-layer guarantees the rest of the engine relies on:
//!
//! - at most one non-superseded record per (employee, period), checked and
//!   inserted under one lock so concurrent batch runs cannot race a duplicate
//!   past an application-level check;
//! - optimistic-concurrency version checks on update, so two concurrent
//!   approvals cannot both succeed against a stale state.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayPeriod, PayrollRecord};

/// Storage abstraction for payroll records.
///
/// Records are append-only: they are inserted, updated through lifecycle
/// transitions, and superseded by corrections, but never deleted.
pub trait PayrollStore: Send + Sync {
    /// Inserts a freshly generated record.
    ///
    /// Fails with `DuplicatePeriod` when a non-superseded record already
    /// exists for the employee and period. The check and the insert happen
    /// atomically.
    fn insert(&self, record: PayrollRecord) -> PayrollResult<PayrollRecord>;

    /// Fetches a record by id.
    fn get(&self, id: Uuid) -> PayrollResult<PayrollRecord>;

    /// Returns the non-superseded record for an employee and period, if any.
    fn find_active(&self, employee_id: &str, period: PayPeriod) -> Option<PayrollRecord>;

    /// Persists a mutated record.
    ///
    /// The caller's copy must carry the version it was read at; a mismatch
    /// fails with `ConcurrentModification` and the store is left untouched.
    /// On success the stored version is bumped and the updated record
    /// returned.
    fn update(&self, record: PayrollRecord) -> PayrollResult<PayrollRecord>;

    /// Replaces a record with a correction.
    ///
    /// The old record keeps its status, is chained to the replacement via
    /// `superseded_by`, and becomes read-only. The replacement takes over the
    /// (employee, period) slot. Fails with `RecordSuperseded` when the old
    /// record was already replaced.
    fn supersede(&self, old_id: Uuid, replacement: PayrollRecord)
    -> PayrollResult<PayrollRecord>;

    /// Returns the non-superseded records for a period, ordered by employee.
    fn list_period(&self, period: PayPeriod) -> Vec<PayrollRecord>;

    /// Returns the total number of stored records, superseded ones included.
    fn count(&self) -> usize;
}

#[derive(Default)]
struct StoreInner {
    records: HashMap<Uuid, PayrollRecord>,
    /// Index of non-superseded records by (employee, period).
    active: HashMap<(String, PayPeriod), Uuid>,
}

/// In-memory [`PayrollStore`] implementation.
///
/// A single `RwLock` guards both the record map and the uniqueness index so
/// check-and-insert is atomic.
#[derive(Default)]
pub struct InMemoryPayrollStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryPayrollStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PayrollStore for InMemoryPayrollStore {
    fn insert(&self, record: PayrollRecord) -> PayrollResult<PayrollRecord> {
        // A poisoned lock means a panic elsewhere; the guarded maps are
        // still structurally valid, so recover rather than propagate.
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let key = (record.employee_id.clone(), record.period);
        if inner.active.contains_key(&key) {
            return Err(PayrollError::DuplicatePeriod {
                employee_id: record.employee_id.clone(),
                period: record.period,
            });
        }

        inner.active.insert(key, record.id);
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    fn get(&self, id: Uuid) -> PayrollResult<PayrollRecord> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or(PayrollError::RecordNotFound { id })
    }

    fn find_active(&self, employee_id: &str, period: PayPeriod) -> Option<PayrollRecord> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let id = inner
            .active
            .get(&(employee_id.to_string(), period))
            .copied()?;
        inner.records.get(&id).cloned()
    }

    fn update(&self, record: PayrollRecord) -> PayrollResult<PayrollRecord> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let stored = inner
            .records
            .get_mut(&record.id)
            .ok_or(PayrollError::RecordNotFound { id: record.id })?;

        if stored.version != record.version {
            return Err(PayrollError::ConcurrentModification { id: record.id });
        }

        let mut updated = record;
        updated.version += 1;
        *stored = updated.clone();
        Ok(updated)
    }

    fn supersede(
        &self,
        old_id: Uuid,
        replacement: PayrollRecord,
    ) -> PayrollResult<PayrollRecord> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let old = inner
            .records
            .get(&old_id)
            .ok_or(PayrollError::RecordNotFound { id: old_id })?;

        if old.superseded_by.is_some() {
            return Err(PayrollError::RecordSuperseded { id: old_id });
        }

        let replacement_id = replacement.id;
        let old_key = (old.employee_id.clone(), old.period);
        let key = (replacement.employee_id.clone(), replacement.period);

        // Free the old slot before claiming the replacement's, so a
        // correction for the same employee and period always succeeds while
        // a replacement colliding with a third record is still rejected.
        if inner.active.get(&old_key) == Some(&old_id) {
            inner.active.remove(&old_key);
        }
        if inner.active.contains_key(&key) {
            inner.active.insert(old_key, old_id);
            return Err(PayrollError::DuplicatePeriod {
                employee_id: replacement.employee_id.clone(),
                period: replacement.period,
            });
        }

        if let Some(old) = inner.records.get_mut(&old_id) {
            old.superseded_by = Some(replacement_id);
        }
        inner.active.insert(key, replacement_id);
        inner.records.insert(replacement_id, replacement.clone());
        Ok(replacement)
    }

    fn list_period(&self, period: PayPeriod) -> Vec<PayrollRecord> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut records: Vec<PayrollRecord> = inner
            .records
            .values()
            .filter(|r| r.period == period && !r.is_superseded())
            .cloned()
            .collect();
        records.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        records
    }

    fn count(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.records.len()
    }
}
