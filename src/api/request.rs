//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the operator
//! commands. Payloads are explicit tagged records validated at the
//! boundary; the domain snapshot types (employee, salary structure,
//! attendance) deserialize directly and are validated before use.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::batch::BatchRequest;
use crate::calculation::PayrollInput;
use crate::error::PayrollResult;
use crate::lifecycle::TransitionRequest;
use crate::models::{Approver, PayPeriod, PaymentDetails, PaymentMode, PayrollStatus};

/// Request body for `POST /payroll/batches`.
///
/// Carries the period and filters plus the per-employee snapshots supplied
/// by the employee, salary, and attendance services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBatchBody {
    /// The period to generate for.
    pub period: PeriodBody,
    /// Restrict generation to one department.
    #[serde(default)]
    pub department: Option<String>,
    /// Include employees flagged inactive.
    #[serde(default)]
    pub include_inactive: bool,
    /// The per-employee input snapshots.
    pub employees: Vec<PayrollInput>,
}

/// A pay period in a request body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodBody {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl PeriodBody {
    /// Validates the body into a domain period.
    pub fn into_period(self) -> PayrollResult<PayPeriod> {
        PayPeriod::new(self.year, self.month)
    }
}

impl GenerateBatchBody {
    /// Splits the body into the batch request and the employee inputs.
    pub fn into_parts(self) -> PayrollResult<(BatchRequest, Vec<PayrollInput>)> {
        let period = self.period.into_period()?;
        Ok((
            BatchRequest {
                period,
                department: self.department,
                include_inactive: self.include_inactive,
            },
            self.employees,
        ))
    }
}

/// Request body for `POST /payroll/records/{id}/transition`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionBody {
    /// The status to move the record to.
    pub target_status: PayrollStatus,
    /// Who is acting, for approvals and rejections.
    #[serde(default)]
    pub approver: Option<Approver>,
    /// Free-text comments; required for rejections.
    #[serde(default)]
    pub comments: Option<String>,
    /// Payment value date; required together with `payment_mode` for the
    /// transition to paid.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    /// Payment channel.
    #[serde(default)]
    pub payment_mode: Option<PaymentMode>,
}

impl From<TransitionBody> for TransitionRequest {
    fn from(body: TransitionBody) -> Self {
        let payment = match (body.payment_date, body.payment_mode) {
            (Some(date), Some(mode)) => Some(PaymentDetails { date, mode }),
            _ => None,
        };
        TransitionRequest {
            target: body.target_status,
            approver: body.approver,
            comments: body.comments,
            payment,
        }
    }
}

/// Request body for `POST /payroll/records/transitions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkTransitionBody {
    /// The records to transition.
    pub record_ids: Vec<Uuid>,
    /// The shared transition metadata applied to every record.
    #[serde(flatten)]
    pub transition: TransitionBody,
}
