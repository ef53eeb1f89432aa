//! Bulk lifecycle transitions.
//!
//! Applies one lifecycle transition to a set of records, atomically per
//! record: each record's guard is evaluated independently, a failing record
//! becomes a per-item report entry, and the rest proceed. HR can approve 49
//! of 50 payrolls and separately fix the one exception.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::PayrollResult;
use crate::lifecycle::{TransitionRequest, apply_transition};
use crate::store::PayrollStore;

/// A per-record failure in a bulk transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkFailure {
    /// The record that failed its guard.
    pub id: Uuid,
    /// The guard violation, verbatim from the underlying error.
    pub reason: String,
}

/// The per-record outcome of one bulk transition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BulkOutcome {
    /// Records whose transition succeeded.
    pub succeeded: Vec<Uuid>,
    /// Records whose transition failed, with reasons.
    pub failed: Vec<BulkFailure>,
}

/// Applies one transition to each of the given records.
///
/// The shared metadata (approver, comments, payment details) is used for
/// every record; each record's guard is checked independently against its
/// own current state. Nothing is thrown past this function: guard
/// violations, missing records, and version conflicts all become per-item
/// failures.
pub fn bulk_transition(
    store: &dyn PayrollStore,
    ids: &[Uuid],
    request: &TransitionRequest,
) -> BulkOutcome {
    let mut outcome = BulkOutcome::default();

    for &id in ids {
        match transition_one(store, id, request) {
            Ok(()) => outcome.succeeded.push(id),
            Err(error) => outcome.failed.push(BulkFailure {
                id,
                reason: error.to_string(),
            }),
        }
    }

    info!(
        target_status = %request.target,
        succeeded = outcome.succeeded.len(),
        failed = outcome.failed.len(),
        "Bulk transition completed"
    );

    outcome
}

/// Runs the read-transition-update cycle for a single record.
fn transition_one(
    store: &dyn PayrollStore,
    id: Uuid,
    request: &TransitionRequest,
) -> PayrollResult<()> {
    let mut record = store.get(id)?;
    apply_transition(&mut record, request)?;
    store.update(record)?;
    Ok(())
}
