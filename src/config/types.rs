//! Configuration types for statutory deductions.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the statutory policy set.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// A short code identifying the policy set (e.g. "IN-STAT").
    pub code: String,
    /// The human-readable name of the policy set.
    pub name: String,
    /// The version or review date of the policy set.
    pub version: String,
    /// URL to the policy documentation.
    pub source_url: String,
}

/// Provident-fund contribution rules.
///
/// Contributions are computed on basic salary clamped to the wage ceiling.
#[derive(Debug, Clone, Deserialize)]
pub struct PfRules {
    /// The monthly wage ceiling contributions are computed up to.
    pub wage_ceiling: Decimal,
    /// The employee contribution rate (fraction of clamped basic).
    pub employee_rate: Decimal,
    /// The employer contribution rate (fraction of clamped basic).
    pub employer_rate: Decimal,
}

/// State-insurance contribution rules.
///
/// Contributions apply only while gross earnings stay at or under the wage
/// ceiling; an employee crossing it stops contributing entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct EsiRules {
    /// The monthly gross-earnings ceiling for applicability.
    pub wage_ceiling: Decimal,
    /// The employee contribution rate (fraction of gross).
    pub employee_rate: Decimal,
    /// The employer contribution rate (fraction of gross).
    pub employer_rate: Decimal,
}

/// One professional-tax bracket.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfessionalTaxBracket {
    /// The upper bound of monthly gross this bracket covers; `None` means
    /// the bracket is open-ended.
    pub gross_up_to: Option<Decimal>,
    /// The flat monthly tax for the bracket.
    pub tax: Decimal,
}

/// One income-tax slab for the annualized projection.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxSlab {
    /// The upper bound of annual income this slab covers; `None` means the
    /// slab is open-ended.
    pub annual_up_to: Option<Decimal>,
    /// The marginal rate applied to income inside the slab.
    pub rate: Decimal,
}

/// The statutory rates effective from a specific date, deserialized from one
/// file under `rates/`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRates {
    /// The date these rates take effect.
    pub effective_date: NaiveDate,
    /// Provident-fund rules.
    pub provident_fund: PfRules,
    /// State-insurance rules.
    pub state_insurance: EsiRules,
    /// Professional-tax brackets, ordered by ascending upper bound.
    pub professional_tax: Vec<ProfessionalTaxBracket>,
    /// Income-tax slabs, ordered by ascending upper bound.
    pub income_tax: Vec<IncomeTaxSlab>,
}

/// The complete statutory configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    /// Policy metadata.
    metadata: PolicyMetadata,
    /// Rate tables by effective date (sorted oldest first).
    rates: Vec<StatutoryRates>,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, rates: Vec<StatutoryRates>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns all rate tables, oldest first.
    pub fn rates(&self) -> &[StatutoryRates] {
        &self.rates
    }
}
