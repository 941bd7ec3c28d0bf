//! Loan domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{AssetCategory, Holding, RepaymentType};
use crate::constants::DEFAULT_LOAN_PERIOD_MONTHS;
use crate::errors::{Result, ValidationError};

/// Normalized repayment terms extracted from a loan holding.
///
/// `months` is always >= 1 here: an absent or zero term defaults to
/// 12 months so the term never appears as a divisor of zero downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    /// Outstanding principal in won
    pub principal: Decimal,
    /// Annual interest rate in percent (4.5 means 4.5%)
    pub annual_rate_percent: Decimal,
    /// Loan term in months
    pub months: u32,
    pub repayment_type: RepaymentType,
}

impl LoanTerms {
    /// Extracts terms from a LOAN holding.
    ///
    /// Absent interest rate resolves to 0 (interest-free math downstream);
    /// absent repayment type resolves to amortizing, matching how the
    /// original dashboard treated untyped loans.
    pub fn from_holding(holding: &Holding) -> Result<Self> {
        if holding.category != AssetCategory::Loan {
            return Err(ValidationError::InvalidInput(format!(
                "holding '{}' is not a loan (category {:?})",
                holding.name, holding.category
            ))
            .into());
        }
        holding.validate()?;

        let months = match holding.metadata.loan_period_months {
            Some(m) if m > 0 => m,
            _ => DEFAULT_LOAN_PERIOD_MONTHS,
        };

        Ok(Self {
            principal: holding.amount,
            annual_rate_percent: holding.metadata.interest_rate.unwrap_or(Decimal::ZERO),
            months,
            repayment_type: holding
                .metadata
                .repayment_type
                .unwrap_or(RepaymentType::Amortizing),
        })
    }

    /// Monthly rate as a fraction (6% annual -> 0.005).
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate_percent / Decimal::from(100) / Decimal::from(12)
    }

    /// Term in years, as a decimal fraction.
    pub fn years(&self) -> Decimal {
        Decimal::from(self.months) / Decimal::from(12)
    }
}

/// Computed payment figures for one loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSchedule {
    /// Actual monthly outflow under the repayment scheme
    pub monthly_payment: Decimal,
    /// Regulatory annual principal+interest figure used for DSR
    pub annual_debt_service: Decimal,
}

impl LoanSchedule {
    /// Computes both figures for a LOAN holding.
    pub fn for_holding(holding: &Holding) -> Result<Self> {
        let terms = LoanTerms::from_holding(holding)?;
        Ok(Self {
            monthly_payment: super::monthly_payment(&terms)?,
            annual_debt_service: super::annual_debt_service(&terms)?,
        })
    }
}
