//! DSR calculation service.

use log::debug;
use rust_decimal::Decimal;

use super::dsr_model::{DsrLoanEntry, DsrProfile, DsrResult};
use crate::assets::Holding;
use crate::constants::DSR_BANK_LIMIT_PERCENT;
use crate::errors::Result;
use crate::loans::{annual_debt_service, LoanTerms};

/// Computes the debt service ratio against a configurable bank limit.
#[derive(Debug, Clone, Copy)]
pub struct DsrService {
    bank_limit_percent: Decimal,
}

impl Default for DsrService {
    fn default() -> Self {
        Self {
            bank_limit_percent: DSR_BANK_LIMIT_PERCENT,
        }
    }
}

impl DsrService {
    /// Service with a non-default limit (the regulatory threshold moves).
    pub fn with_bank_limit(bank_limit_percent: Decimal) -> Self {
        Self { bank_limit_percent }
    }

    pub fn bank_limit_percent(&self) -> Decimal {
        self.bank_limit_percent
    }

    /// Convenience over [`Self::compute`] for a stored borrower profile.
    pub fn compute_for_profile(&self, holdings: &[Holding], profile: &DsrProfile) -> Result<DsrResult> {
        self.compute(holdings, profile.annual_income)
    }

    /// Partitions loans into DSR-included and DSR-excluded sets, sums the
    /// regulatory annual debt service across the included set, and
    /// evaluates the ratio against the bank limit.
    ///
    /// Non-loan holdings are ignored. Non-positive income yields a zero
    /// ratio rather than an error: the dashboard renders before the
    /// profile is filled in.
    pub fn compute(&self, holdings: &[Holding], annual_income: Decimal) -> Result<DsrResult> {
        let mut included_loans = Vec::new();
        let mut excluded_loans = Vec::new();
        let mut total_annual_debt_service = Decimal::ZERO;

        for holding in holdings.iter().filter(|h| h.category.is_loan()) {
            let terms = LoanTerms::from_holding(holding)?;

            if holding.is_dsr_excluded() {
                excluded_loans.push(entry(holding, &terms, Decimal::ZERO));
                continue;
            }

            let annual = annual_debt_service(&terms)?;
            total_annual_debt_service += annual;
            included_loans.push(entry(holding, &terms, annual));
        }

        let ratio_percent = if annual_income > Decimal::ZERO {
            total_annual_debt_service / annual_income * Decimal::from(100)
        } else {
            Decimal::ZERO
        };
        let is_exceeded = ratio_percent > self.bank_limit_percent;

        let available_additional_annual_capacity = if is_exceeded {
            Decimal::ZERO
        } else {
            let limit = annual_income * self.bank_limit_percent / Decimal::from(100);
            (limit - total_annual_debt_service).max(Decimal::ZERO)
        };

        debug!(
            "DSR: {} included / {} excluded loans, annual debt service {}, ratio {}%",
            included_loans.len(),
            excluded_loans.len(),
            total_annual_debt_service,
            ratio_percent
        );

        Ok(DsrResult {
            ratio_percent,
            total_annual_debt_service,
            is_exceeded,
            included_loans,
            excluded_loans,
            available_additional_annual_capacity,
        })
    }
}

fn entry(holding: &Holding, terms: &LoanTerms, annual_debt_service: Decimal) -> DsrLoanEntry {
    DsrLoanEntry {
        holding_id: holding.id.clone(),
        name: holding.name.clone(),
        owner: holding.owner,
        principal: terms.principal,
        interest_rate_percent: terms.annual_rate_percent,
        repayment_type: terms.repayment_type,
        loan_type: holding.metadata.loan_type,
        annual_debt_service,
    }
}
