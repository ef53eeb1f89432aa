//! Tax deducted at source.
//!
//! TDS is projected from an annualized gross against a progressive slab
//! table, then spread back over twelve months. An external tax engine may
//! supply the figure pre-computed, in which case the calculator trusts it
//! and does not re-derive.

use rust_decimal::Decimal;

use crate::config::IncomeTaxSlab;
use crate::error::{PayrollError, PayrollResult};

/// Computes the month's TDS withholding.
///
/// When `external_tds` is supplied the value is trusted verbatim (the
/// documented escape hatch for an external tax engine) after a
/// non-negativity check. Otherwise the monthly gross is annualized
/// (`gross * 12`), run through the progressive slab table, and the annual
/// liability is divided by 12 and rounded.
///
/// An empty slab table yields zero.
///
/// # Errors
///
/// Returns `InvalidEarnings` for a negative gross or a negative external
/// value.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_tds;
/// use payroll_engine::config::IncomeTaxSlab;
/// use rust_decimal::Decimal;
///
/// let slabs = vec![
///     IncomeTaxSlab { annual_up_to: Some(Decimal::new(300_000, 0)), rate: Decimal::ZERO },
///     IncomeTaxSlab { annual_up_to: None, rate: Decimal::new(10, 2) },
/// ];
///
/// // 50,000/month annualizes to 600,000: 300,000 exempt, 300,000 at 10%
/// // = 30,000/year = 2,500/month.
/// let tds = calculate_tds(Decimal::new(50_000, 0), &slabs, None).unwrap();
/// assert_eq!(tds, Decimal::new(2_500_00, 2));
/// ```
pub fn calculate_tds(
    gross: Decimal,
    slabs: &[IncomeTaxSlab],
    external_tds: Option<Decimal>,
) -> PayrollResult<Decimal> {
    if gross < Decimal::ZERO {
        return Err(PayrollError::InvalidEarnings {
            message: format!("gross earnings {} is negative", gross),
        });
    }

    if let Some(supplied) = external_tds {
        if supplied < Decimal::ZERO {
            return Err(PayrollError::InvalidEarnings {
                message: format!("externally supplied TDS {} is negative", supplied),
            });
        }
        return Ok(supplied.round_dp(2));
    }

    let annual_gross = gross * Decimal::from(12);
    let mut annual_tax = Decimal::ZERO;
    let mut lower_bound = Decimal::ZERO;

    for slab in slabs {
        let upper = slab.annual_up_to.unwrap_or(annual_gross.max(lower_bound));
        let taxable_in_slab = (annual_gross.min(upper) - lower_bound).max(Decimal::ZERO);
        annual_tax += taxable_in_slab * slab.rate;
        if annual_gross <= upper {
            break;
        }
        lower_bound = upper;
    }

    Ok((annual_tax / Decimal::from(12)).round_dp(2))
}
