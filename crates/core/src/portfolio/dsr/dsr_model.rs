//! DSR domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{HoldingOwner, LoanType, RepaymentType};

/// Borrower profile. Externally supplied and persisted by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DsrProfile {
    pub annual_income: Decimal,
}

/// One loan as it appears in the DSR drill-down lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DsrLoanEntry {
    pub holding_id: String,
    pub name: String,
    pub owner: HoldingOwner,
    /// Outstanding principal in won
    pub principal: Decimal,
    pub interest_rate_percent: Decimal,
    pub repayment_type: RepaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<LoanType>,
    /// Regulatory annual principal+interest figure. Zero for excluded
    /// loans, which never enter the ratio.
    pub annual_debt_service: Decimal,
}

/// Result of a DSR calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DsrResult {
    /// DSR in percent; zero when income is not positive
    pub ratio_percent: Decimal,
    /// Sum of annual debt service across included loans
    pub total_annual_debt_service: Decimal,
    /// Whether the ratio is above the bank lending limit
    pub is_exceeded: bool,
    /// Loans counted toward the ratio, with their individual figures
    pub included_loans: Vec<DsrLoanEntry>,
    /// Loans excluded from DSR by regulation
    pub excluded_loans: Vec<DsrLoanEntry>,
    /// Annual repayment headroom before hitting the limit; zero once
    /// exceeded
    pub available_additional_annual_capacity: Decimal,
}
