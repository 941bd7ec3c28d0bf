//! Loan payment math.

use rust_decimal::{Decimal, MathematicalOps};

use super::loans_model::LoanTerms;
use crate::assets::RepaymentType;
use crate::errors::{Error, Result};

/// Actual monthly outflow for a loan.
///
/// Bullet loans pay interest only (principal is due at maturity and not part
/// of the monthly figure). Amortizing loans pay the standard blended
/// installment `P * r * (1+r)^n / ((1+r)^n - 1)`.
///
/// Zero-rate loans resolve to the interest-free forms: 0 for bullet,
/// `P / n` for amortizing. No division by zero can occur.
pub fn monthly_payment(terms: &LoanTerms) -> Result<Decimal> {
    let rate = terms.monthly_rate();

    match terms.repayment_type {
        RepaymentType::Bullet => Ok(terms.principal * rate),
        RepaymentType::Amortizing => {
            if rate.is_zero() {
                // 0/0 in the blended formula; interest-free installment.
                return Ok(terms.principal / Decimal::from(terms.months));
            }
            let compound = compound_factor(rate, terms.months)?;
            Ok(terms.principal * rate * compound / (compound - Decimal::ONE))
        }
    }
}

/// Annual principal+interest figure for DSR, per banking convention.
///
/// Bullet loans impute straight-line principal amortization over the full
/// term on top of full annual interest on the undiminished principal, which
/// is intentionally NOT `monthly_payment * 12`. Amortizing loans simply
/// annualize the blended installment.
pub fn annual_debt_service(terms: &LoanTerms) -> Result<Decimal> {
    let years = terms.years();
    let annual_rate_fraction = terms.annual_rate_percent / Decimal::from(100);

    match terms.repayment_type {
        RepaymentType::Bullet => {
            let annual_principal = terms.principal / years;
            let annual_interest = terms.principal * annual_rate_fraction;
            Ok(annual_principal + annual_interest)
        }
        RepaymentType::Amortizing => {
            if terms.monthly_rate().is_zero() {
                return Ok(terms.principal / years);
            }
            Ok(monthly_payment(terms)? * Decimal::from(12))
        }
    }
}

/// `(1 + r)^n` with overflow surfaced as an error instead of a panic.
fn compound_factor(monthly_rate: Decimal, months: u32) -> Result<Decimal> {
    (Decimal::ONE + monthly_rate)
        .checked_powi(i64::from(months))
        .ok_or_else(|| {
            Error::Calculation(format!(
                "compound factor overflow for rate {} over {} months",
                monthly_rate, months
            ))
        })
}
