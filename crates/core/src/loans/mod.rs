//! Loan module - repayment terms and amortization math.
//!
//! Two deliberately distinct figures exist for every loan: the *monthly
//! payment* shown next to a loan in the asset list, and the *annual debt
//! service* used by the DSR aggregator. For bullet loans these diverge by
//! regulation (DSR imputes straight-line principal amortization that the
//! borrower does not actually pay monthly); neither function is ever derived
//! from the other.

mod loans_calculator;
mod loans_model;

pub use loans_calculator::{annual_debt_service, monthly_payment};
pub use loans_model::{LoanSchedule, LoanTerms};

#[cfg(test)]
mod loans_calculator_tests;
