//! Payroll record model.
//!
//! This module contains the [`PayrollRecord`] type and its associated
//! structures: the earnings and deductions breakdowns, the frozen attendance
//! snapshot, the approval trail, and the derived pay summary.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{BankDetails, PayPeriod};

/// The lifecycle status of a payroll record.
///
/// `Generated` is the initial state; `Paid` and `Rejected` are terminal.
/// A correction to a terminal record creates a new superseding record
/// rather than reopening the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Freshly generated, not yet submitted for approval.
    Generated,
    /// Submitted and awaiting an approval decision.
    PendingApproval,
    /// Approved and eligible for payment.
    Approved,
    /// Payment has been made. Terminal.
    Paid,
    /// Rejected with a reason. Terminal.
    Rejected,
}

impl PayrollStatus {
    /// Returns true for states that admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PayrollStatus::Paid | PayrollStatus::Rejected)
    }
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayrollStatus::Generated => "generated",
            PayrollStatus::PendingApproval => "pending_approval",
            PayrollStatus::Approved => "approved",
            PayrollStatus::Paid => "paid",
            PayrollStatus::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// The role an approver acts under. Only HR and Admin may approve payroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproverRole {
    /// Human-resources staff.
    Hr,
    /// System administrators.
    Admin,
    /// Line managers; may view but not approve.
    Manager,
}

impl ApproverRole {
    /// Returns true if this role may approve payroll records.
    pub fn can_approve(&self) -> bool {
        matches!(self, ApproverRole::Hr | ApproverRole::Admin)
    }
}

impl fmt::Display for ApproverRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApproverRole::Hr => "hr",
            ApproverRole::Admin => "admin",
            ApproverRole::Manager => "manager",
        };
        f.write_str(name)
    }
}

/// Identifies the person acting on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approver {
    /// The acting user's id.
    pub id: String,
    /// The role the user acts under.
    pub role: ApproverRole,
}

/// The decision recorded by an approval-trail entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalDecision {
    /// The record was approved.
    Approved,
    /// The record was rejected for correction.
    Rejected,
}

/// One entry in a record's ordered approval trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalEntry {
    /// Who acted.
    pub approver: Approver,
    /// The decision taken.
    pub decision: ApprovalDecision,
    /// Free-text comments; required for rejections.
    #[serde(default)]
    pub comments: Option<String>,
    /// When the decision was recorded.
    pub timestamp: DateTime<Utc>,
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// Electronic bank transfer.
    BankTransfer,
    /// Physical cheque.
    Cheque,
    /// Cash disbursement.
    Cash,
}

/// Payment details stamped on the transition to `Paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    /// The value date of the payment.
    pub date: NaiveDate,
    /// The payment channel used.
    pub mode: PaymentMode,
}

/// The earnings breakdown of a payroll record, scaled to the period's
/// payable-days fraction. Overtime is valued at the structure's hourly rate
/// and is not prorated. Every field is a non-negative amount in minor
/// currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earnings {
    /// Basic salary.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// CTC balancing component.
    pub special_allowance: Decimal,
    /// Conveyance allowance.
    pub conveyance: Decimal,
    /// Medical allowance.
    pub medical: Decimal,
    /// Children's education allowance.
    pub education: Decimal,
    /// Leave travel allowance.
    pub lta: Decimal,
    /// Other fixed allowances.
    pub other: Decimal,
    /// Overtime pay.
    pub overtime: Decimal,
}

impl Earnings {
    /// Returns the exact sum of all earnings fields.
    pub fn total(&self) -> Decimal {
        self.basic
            + self.hra
            + self.special_allowance
            + self.conveyance
            + self.medical
            + self.education
            + self.lta
            + self.other
            + self.overtime
    }
}

/// The deductions breakdown of a payroll record. Employer contributions are
/// carried for reporting but excluded from the employee's total deductions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Employee provident-fund contribution.
    pub pf_employee: Decimal,
    /// Employer provident-fund contribution (reporting only).
    pub pf_employer: Decimal,
    /// Employee state-insurance contribution.
    pub esi_employee: Decimal,
    /// Employer state-insurance contribution (reporting only).
    pub esi_employer: Decimal,
    /// Professional tax from the bracket table.
    pub professional_tax: Decimal,
    /// Tax deducted at source.
    pub tds: Decimal,
    /// The named loss-of-pay amount. The earnings scaling already reduces
    /// gross pay; this line names that reduction for the payslip and is not
    /// subtracted a second time.
    pub loss_of_pay: Decimal,
}

impl Deductions {
    /// Returns the amount withheld from the employee: employee-side statutory
    /// contributions plus TDS. Employer contributions and the named
    /// loss-of-pay line are excluded.
    pub fn total_withheld(&self) -> Decimal {
        self.pf_employee + self.esi_employee + self.professional_tax + self.tds
    }
}

/// The attendance counts frozen onto a record at generation time. Later
/// attendance corrections never mutate an existing record; they require a
/// superseding record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSnapshot {
    /// Total days in the period.
    pub total_days: u32,
    /// Days present.
    pub present_days: u32,
    /// Compensable days (total minus loss of pay).
    pub paid_days: u32,
    /// Loss-of-pay days.
    pub loss_of_pay_days: u32,
}

/// The derived pay summary. Always recomputed from the earnings and
/// deductions breakdowns; never stored independently of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySummary {
    /// Sum of all earnings fields.
    pub gross_earnings: Decimal,
    /// Sum of employee-side deductions.
    pub total_deductions: Decimal,
    /// `gross_earnings - total_deductions`.
    pub net_salary: Decimal,
}

/// One employee's payroll for one period.
///
/// Created by batch generation in status `Generated`, mutated only through
/// lifecycle transitions, and never deleted: a correction creates a new
/// record that supersedes this one, freezing it for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The employee this record pays.
    pub employee_id: String,
    /// The period this record covers.
    pub period: PayPeriod,
    /// The earnings breakdown.
    pub earnings: Earnings,
    /// The deductions breakdown.
    pub deductions: Deductions,
    /// Attendance counts frozen at generation time.
    pub attendance: AttendanceSnapshot,
    /// The lifecycle status.
    pub status: PayrollStatus,
    /// Ordered approval trail.
    #[serde(default)]
    pub approvals: Vec<ApprovalEntry>,
    /// Payment details, set only on the transition to `Paid`.
    #[serde(default)]
    pub payment: Option<PaymentDetails>,
    /// Bank details carried from the salary structure for payment consumers.
    #[serde(default)]
    pub bank: Option<BankDetails>,
    /// Set when proration hit the malformed-period edge case and the record
    /// needs manual review before approval.
    #[serde(default)]
    pub needs_review: bool,
    /// The correction record that replaced this one, if any.
    #[serde(default)]
    pub superseded_by: Option<Uuid>,
    /// Optimistic-concurrency token, bumped on every store update.
    pub version: u64,
    /// When the record was generated.
    pub generated_at: DateTime<Utc>,
    /// When the record was submitted for approval.
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl PayrollRecord {
    /// Returns the gross earnings: the exact sum of the earnings fields.
    pub fn gross_earnings(&self) -> Decimal {
        self.earnings.total()
    }

    /// Returns the employee's total deductions.
    pub fn total_deductions(&self) -> Decimal {
        self.deductions.total_withheld()
    }

    /// Returns the net salary. Derived on every read so a deduction
    /// correction can never leave a stale figure behind.
    pub fn net_salary(&self) -> Decimal {
        self.gross_earnings() - self.total_deductions()
    }

    /// Materializes the derived summary for presentation.
    pub fn summary(&self) -> PaySummary {
        PaySummary {
            gross_earnings: self.gross_earnings(),
            total_deductions: self.total_deductions(),
            net_salary: self.net_salary(),
        }
    }

    /// Returns true once this record has been replaced by a correction.
    pub fn is_superseded(&self) -> bool {
        self.superseded_by.is_some()
    }
}
