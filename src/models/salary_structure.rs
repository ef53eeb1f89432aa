//! Salary structure model.
//!
//! This module defines the [`SalaryStructure`] type describing an employee's
//! compensation breakdown: annual CTC, basic pay, HRA percentage, fixed
//! allowances, and statutory applicability flags. Structures are effective-dated
//! and treated as immutable snapshots once a finalized record references them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// How the monthly basic salary is derived.
///
/// # Example
///
/// ```
/// use payroll_engine::models::BasicPay;
/// use rust_decimal::Decimal;
///
/// let fixed = BasicPay::Amount(Decimal::new(50_000, 0));
/// let pct = BasicPay::PercentOfCtc(Decimal::new(40, 2)); // 40% of annual CTC
/// assert_ne!(fixed, pct);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicPay {
    /// A fixed monthly basic amount.
    Amount(Decimal),
    /// A fraction of the annual CTC, converted to a monthly figure.
    PercentOfCtc(Decimal),
}

/// Fixed monthly allowances paid at full rate for a full month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedAllowances {
    /// Conveyance allowance.
    #[serde(default)]
    pub conveyance: Decimal,
    /// Medical allowance.
    #[serde(default)]
    pub medical: Decimal,
    /// Children's education allowance.
    #[serde(default)]
    pub education: Decimal,
    /// Leave travel allowance.
    #[serde(default)]
    pub lta: Decimal,
    /// Any other fixed allowance.
    #[serde(default)]
    pub other: Decimal,
}

impl FixedAllowances {
    /// Returns the sum of all fixed allowance heads.
    pub fn total(&self) -> Decimal {
        self.conveyance + self.medical + self.education + self.lta + self.other
    }
}

/// Bank payment details carried on the record for downstream payment
/// consumers. The engine never interprets these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    /// The account number payments are made to.
    pub account_number: String,
    /// The branch routing code.
    pub ifsc: String,
    /// The bank's display name.
    pub bank_name: String,
}

/// An employee's salary structure for a period.
///
/// Owned by HR and versioned by effective date; the engine consumes it as a
/// read-only snapshot.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{BasicPay, FixedAllowances, SalaryStructure};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let structure = SalaryStructure {
///     effective_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     annual_ctc: Decimal::new(1_200_000, 0),
///     basic: BasicPay::Amount(Decimal::new(50_000, 0)),
///     hra_percentage: Decimal::new(40, 2),
///     allowances: FixedAllowances::default(),
///     overtime_hourly_rate: None,
///     pf_applicable: true,
///     esi_applicable: false,
///     bank: None,
/// };
/// assert_eq!(structure.monthly_basic(), Decimal::new(50_000, 0));
/// assert!(structure.validate("emp_001").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// The date this structure version takes effect.
    pub effective_from: NaiveDate,
    /// Annual cost to company.
    pub annual_ctc: Decimal,
    /// How the monthly basic is derived.
    pub basic: BasicPay,
    /// HRA as a fraction of basic (e.g. 0.40).
    pub hra_percentage: Decimal,
    /// Fixed monthly allowances.
    #[serde(default)]
    pub allowances: FixedAllowances,
    /// Hourly rate used to value overtime hours. Absent means overtime
    /// hours pay nothing.
    #[serde(default)]
    pub overtime_hourly_rate: Option<Decimal>,
    /// Whether provident fund contributions apply.
    pub pf_applicable: bool,
    /// Whether state insurance contributions apply.
    pub esi_applicable: bool,
    /// Bank payment details, if on file.
    #[serde(default)]
    pub bank: Option<BankDetails>,
}

impl SalaryStructure {
    /// Derives the monthly basic salary.
    ///
    /// For [`BasicPay::PercentOfCtc`] the annual figure is divided by 12 and
    /// rounded to minor currency units.
    pub fn monthly_basic(&self) -> Decimal {
        match self.basic {
            BasicPay::Amount(amount) => amount,
            BasicPay::PercentOfCtc(pct) => {
                (self.annual_ctc * pct / Decimal::from(12)).round_dp(2)
            }
        }
    }

    /// Derives the monthly HRA at the full (unprorated) rate.
    pub fn monthly_hra(&self) -> Decimal {
        (self.monthly_basic() * self.hra_percentage).round_dp(2)
    }

    /// Validates the structure, rejecting non-positive CTC or basic.
    ///
    /// A rejected structure excludes the employee from the batch; it never
    /// aborts the batch itself.
    pub fn validate(&self, employee_id: &str) -> PayrollResult<()> {
        if self.annual_ctc <= Decimal::ZERO {
            return Err(PayrollError::InvalidSalaryStructure {
                employee_id: employee_id.to_string(),
                message: "annual CTC must be positive".to_string(),
            });
        }
        if self.monthly_basic() <= Decimal::ZERO {
            return Err(PayrollError::InvalidSalaryStructure {
                employee_id: employee_id.to_string(),
                message: "basic salary must be positive".to_string(),
            });
        }
        if self.hra_percentage < Decimal::ZERO {
            return Err(PayrollError::InvalidSalaryStructure {
                employee_id: employee_id.to_string(),
                message: "HRA percentage must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
