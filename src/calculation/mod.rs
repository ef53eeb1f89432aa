//! Calculation logic for the payroll engine.
//!
//! This module contains all the pure calculation functions for deriving a
//! payroll record: attendance proration, earnings resolution from a salary
//! structure, the statutory deduction set (provident fund, state insurance,
//! professional tax, income tax), and the record builder that composes them.

mod earnings;
mod income_tax;
mod professional_tax;
mod proration;
mod provident_fund;
mod record_builder;
mod state_insurance;

pub use earnings::resolve_earnings;
pub use income_tax::calculate_tds;
pub use professional_tax::calculate_professional_tax;
pub use proration::{Proration, prorate_attendance};
pub use provident_fund::{PfContribution, calculate_pf};
pub use record_builder::{PayrollInput, build_record};
pub use state_insurance::{EsiContribution, calculate_esi};
