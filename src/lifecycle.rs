//! Payroll lifecycle state machine.
//!
//! Governs the valid status transitions of a payroll record and the side
//! effects each transition is allowed to have:
//!
//! ```text
//! Generated -> PendingApproval -> Approved -> Paid
//!                     |              |
//!                     +-> Rejected <-+
//! ```
//!
//! `Paid` and `Rejected` are terminal; a correction creates a new superseding
//! record rather than reopening a terminal one. Any other transition attempt
//! fails with `InvalidTransition`, naming the current and requested states.

use chrono::Utc;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    ApprovalDecision, ApprovalEntry, Approver, PaymentDetails, PayrollRecord, PayrollStatus,
};

/// A requested lifecycle transition with the metadata its guard may require.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    /// The status to move the record to.
    pub target: PayrollStatus,
    /// Who is acting. Required for approvals (role-checked) and rejections
    /// (recorded on the trail).
    pub approver: Option<Approver>,
    /// Free-text comments. Required (non-empty) for rejections.
    pub comments: Option<String>,
    /// Payment details. Required for the transition to `Paid`.
    pub payment: Option<PaymentDetails>,
}

impl TransitionRequest {
    /// Creates a bare request carrying only the target status.
    pub fn to(target: PayrollStatus) -> Self {
        Self {
            target,
            approver: None,
            comments: None,
            payment: None,
        }
    }

    /// Attaches the acting approver.
    pub fn by(mut self, approver: Approver) -> Self {
        self.approver = Some(approver);
        self
    }

    /// Attaches comments.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Attaches payment details.
    pub fn with_payment(mut self, payment: PaymentDetails) -> Self {
        self.payment = Some(payment);
        self
    }
}

/// Applies one lifecycle transition to a record in place.
///
/// The guard table:
///
/// | From | To | Guard | Side effect |
/// |------|----|-------|-------------|
/// | Generated | PendingApproval | none | `submitted_at` stamped |
/// | PendingApproval | Approved | approver role is HR or Admin | approval entry appended |
/// | PendingApproval | Rejected | non-empty comments | rejection entry appended |
/// | Approved | Paid | payment date and mode supplied | payment stamped |
/// | Approved | Rejected | non-empty comments | rejection entry appended |
///
/// Superseded records are frozen for audit and refuse every transition.
///
/// # Errors
///
/// `InvalidTransition` for any pair outside the table, `MissingApprovalComment`
/// for a rejection without comments, `MissingPaymentDetails` for a payment
/// without its details, `UnauthorizedApprover` for an approval without an
/// HR/Admin actor, and `RecordSuperseded` for frozen records.
pub fn apply_transition(
    record: &mut PayrollRecord,
    request: &TransitionRequest,
) -> PayrollResult<()> {
    if record.is_superseded() {
        return Err(PayrollError::RecordSuperseded { id: record.id });
    }

    match (record.status, request.target) {
        (PayrollStatus::Generated, PayrollStatus::PendingApproval) => {
            record.status = PayrollStatus::PendingApproval;
            record.submitted_at = Some(Utc::now());
            Ok(())
        }
        (PayrollStatus::PendingApproval, PayrollStatus::Approved) => {
            let approver = authorized_approver(request)?;
            record.approvals.push(ApprovalEntry {
                approver,
                decision: ApprovalDecision::Approved,
                comments: request.comments.clone(),
                timestamp: Utc::now(),
            });
            record.status = PayrollStatus::Approved;
            Ok(())
        }
        (PayrollStatus::PendingApproval | PayrollStatus::Approved, PayrollStatus::Rejected) => {
            let comments = match request.comments.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => return Err(PayrollError::MissingApprovalComment),
            };
            let approver = named_actor(request)?;
            record.approvals.push(ApprovalEntry {
                approver,
                decision: ApprovalDecision::Rejected,
                comments: Some(comments),
                timestamp: Utc::now(),
            });
            record.status = PayrollStatus::Rejected;
            Ok(())
        }
        (PayrollStatus::Approved, PayrollStatus::Paid) => {
            let payment = request
                .payment
                .ok_or(PayrollError::MissingPaymentDetails)?;
            record.payment = Some(payment);
            record.status = PayrollStatus::Paid;
            Ok(())
        }
        (from, to) => Err(PayrollError::InvalidTransition { from, to }),
    }
}

/// Resolves the acting approver for an approval, enforcing the role guard.
fn authorized_approver(request: &TransitionRequest) -> PayrollResult<Approver> {
    match &request.approver {
        Some(approver) if approver.role.can_approve() => Ok(approver.clone()),
        Some(approver) => Err(PayrollError::UnauthorizedApprover {
            role: approver.role.to_string(),
        }),
        None => Err(PayrollError::UnauthorizedApprover {
            role: "anonymous".to_string(),
        }),
    }
}

/// Resolves the acting user for a rejection; any role may reject, but the
/// trail entry needs an identity.
fn named_actor(request: &TransitionRequest) -> PayrollResult<Approver> {
    request
        .approver
        .clone()
        .ok_or(PayrollError::UnauthorizedApprover {
            role: "anonymous".to_string(),
        })
}
