//! Batch payroll generation.
//!
//! One invocation generates payroll for an employee population for a period,
//! handling partial failures and skip-if-exists idempotency. Per-employee
//! work is pure and fans out on the rayon pool; the store insert is the only
//! synchronized step, and its uniqueness constraint makes concurrent batch
//! runs race-free.

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::calculation::{PayrollInput, build_record};
use crate::config::StatutoryConfigLoader;
use crate::error::{PayrollError, PayrollResult};
use crate::models::PayPeriod;
use crate::store::PayrollStore;

/// Parameters for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    /// The period to generate payroll for.
    pub period: PayPeriod,
    /// Restrict generation to one department.
    pub department: Option<String>,
    /// Include employees flagged inactive.
    pub include_inactive: bool,
}

/// A successfully generated record, as reported to the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedRecord {
    /// The stored record's id.
    pub record_id: Uuid,
    /// The employee the record pays.
    pub employee_id: String,
    /// The derived net salary, for the operator's completeness check.
    pub net_salary: Decimal,
}

/// A per-employee failure, reported without aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    /// The employee that failed.
    pub employee_id: String,
    /// Why generation failed, verbatim from the underlying error.
    pub reason: String,
}

/// The report of one batch run.
///
/// The generated/failed/skipped counts are the contract the operator relies
/// on to judge completeness; nothing in a batch run is thrown past this
/// report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRun {
    /// The period the batch covered.
    pub period: PayPeriod,
    /// Records created by this run.
    pub generated: Vec<GeneratedRecord>,
    /// Employees skipped because a record already existed (idempotent
    /// re-run) or the filters excluded them.
    pub skipped: Vec<String>,
    /// Employees whose generation failed, with reasons.
    pub failed: Vec<BatchFailure>,
}

/// The per-employee outcome used internally before the report is assembled.
enum Outcome {
    Generated(GeneratedRecord),
    Skipped(String),
    Failed(BatchFailure),
}

/// Generates payroll records for a period across an employee population.
///
/// Employees are filtered by department and active flag, then processed
/// independently: an employee with an existing non-superseded record for the
/// period is skipped (making re-runs idempotent), a malformed snapshot fails
/// that employee alone, and everything else becomes a stored record in
/// status `Generated`.
///
/// # Errors
///
/// Only preconditions fail the batch as a whole: a missing statutory rate
/// table for the period. Per-employee problems are reported in the
/// [`BatchRun`], never thrown.
pub fn generate_batch(
    store: &dyn PayrollStore,
    config: &StatutoryConfigLoader,
    request: &BatchRequest,
    inputs: Vec<PayrollInput>,
) -> PayrollResult<BatchRun> {
    let rates = config.rates_for(request.period.first_day())?;

    let outcomes: Vec<Outcome> = inputs
        .into_par_iter()
        .map(|input| {
            let employee_id = input.employee.id.clone();

            if let Some(department) = &request.department {
                if &input.employee.department != department {
                    return Outcome::Skipped(employee_id);
                }
            }
            if !input.employee.is_active && !request.include_inactive {
                return Outcome::Skipped(employee_id);
            }

            let record = match build_record(&input, request.period, rates) {
                Ok(record) => record,
                Err(error) => {
                    return Outcome::Failed(BatchFailure {
                        employee_id,
                        reason: error.to_string(),
                    });
                }
            };

            match store.insert(record) {
                Ok(stored) => Outcome::Generated(GeneratedRecord {
                    record_id: stored.id,
                    employee_id,
                    net_salary: stored.net_salary(),
                }),
                // The uniqueness constraint caught an existing record:
                // an idempotent re-run, not an error.
                Err(PayrollError::DuplicatePeriod { .. }) => Outcome::Skipped(employee_id),
                Err(error) => Outcome::Failed(BatchFailure {
                    employee_id,
                    reason: error.to_string(),
                }),
            }
        })
        .collect();

    let mut run = BatchRun {
        period: request.period,
        generated: Vec::new(),
        skipped: Vec::new(),
        failed: Vec::new(),
    };
    for outcome in outcomes {
        match outcome {
            Outcome::Generated(generated) => run.generated.push(generated),
            Outcome::Skipped(employee_id) => run.skipped.push(employee_id),
            Outcome::Failed(failure) => run.failed.push(failure),
        }
    }

    info!(
        period = %run.period,
        generated = run.generated.len(),
        skipped = run.skipped.len(),
        failed = run.failed.len(),
        "Batch generation completed"
    );

    Ok(run)
}
