//! Professional tax.
//!
//! Professional tax is a flat monthly amount looked up from a bracket table
//! keyed by gross earnings; it is not a formula.

use rust_decimal::Decimal;

use crate::config::ProfessionalTaxBracket;
use crate::error::{PayrollError, PayrollResult};

/// Looks up the professional tax for the period's gross earnings.
///
/// The first bracket whose upper bound is at or above the gross wins; the
/// open-ended bracket catches everything else. An empty table yields zero:
/// a jurisdiction without professional tax simply configures no brackets.
///
/// # Errors
///
/// Returns `InvalidEarnings` for a negative gross.
pub fn calculate_professional_tax(
    gross: Decimal,
    brackets: &[ProfessionalTaxBracket],
) -> PayrollResult<Decimal> {
    if gross < Decimal::ZERO {
        return Err(PayrollError::InvalidEarnings {
            message: format!("gross earnings {} is negative", gross),
        });
    }

    for bracket in brackets {
        match bracket.gross_up_to {
            Some(bound) if gross <= bound => return Ok(bracket.tax),
            Some(_) => continue,
            None => return Ok(bracket.tax),
        }
    }

    Ok(Decimal::ZERO)
}
