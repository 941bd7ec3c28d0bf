//! Unit tests for loan payment math.

use super::loans_model::{LoanSchedule, LoanTerms};
use super::{annual_debt_service, monthly_payment};
use crate::assets::{AssetCategory, Holding, HoldingOwner, RepaymentType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn terms(
    principal: Decimal,
    annual_rate_percent: Decimal,
    months: u32,
    repayment_type: RepaymentType,
) -> LoanTerms {
    LoanTerms {
        principal,
        annual_rate_percent,
        months,
        repayment_type,
    }
}

fn loan_holding(amount: Decimal) -> Holding {
    let mut h = Holding::new("전세 대출", HoldingOwner::Primary, AssetCategory::Loan, amount);
    h.metadata.interest_rate = Some(dec!(4));
    h.metadata.repayment_type = Some(RepaymentType::Bullet);
    h.metadata.loan_period_months = Some(24);
    h
}

#[test]
fn bullet_monthly_payment_is_interest_only() {
    let t = terms(dec!(100000000), dec!(4), 24, RepaymentType::Bullet);
    let payment = monthly_payment(&t).unwrap();
    // 100,000,000 * 0.04 / 12
    assert_eq!(payment.round_dp(2), dec!(333333.33));
}

#[test]
fn amortizing_monthly_payment_matches_reference_value() {
    // 12,000,000 at 6% over 12 months: r = 0.005,
    // P*r*(1+r)^12/((1+r)^12 - 1) = 1,032,797.16...
    let t = terms(dec!(12000000), dec!(6), 12, RepaymentType::Amortizing);
    let payment = monthly_payment(&t).unwrap();
    assert!(payment > dec!(1032790) && payment < dec!(1032805), "got {}", payment);
}

#[test]
fn zero_rate_amortizing_falls_back_to_straight_line() {
    let t = terms(dec!(12000000), Decimal::ZERO, 12, RepaymentType::Amortizing);
    assert_eq!(monthly_payment(&t).unwrap(), dec!(1000000));
    assert_eq!(annual_debt_service(&t).unwrap(), dec!(12000000));
}

#[test]
fn zero_rate_bullet_pays_nothing_monthly() {
    let t = terms(dec!(50000000), Decimal::ZERO, 24, RepaymentType::Bullet);
    assert_eq!(monthly_payment(&t).unwrap(), Decimal::ZERO);
    // DSR still imputes principal amortization: 50M over 2 years.
    assert_eq!(annual_debt_service(&t).unwrap(), dec!(25000000));
}

#[test]
fn bullet_dsr_figure_diverges_from_annualized_monthly() {
    // 100M at 4% over 24 months.
    let t = terms(dec!(100000000), dec!(4), 24, RepaymentType::Bullet);

    // DSR: principal/2 years + full annual interest = 50M + 4M.
    assert_eq!(annual_debt_service(&t).unwrap(), dec!(54000000));

    // Annualizing the interest-only monthly figure gives 4M, not 54M.
    let annualized_monthly = monthly_payment(&t).unwrap() * dec!(12);
    assert_eq!(annualized_monthly.round_dp(2), dec!(4000000.00));
    assert_ne!(annual_debt_service(&t).unwrap(), annualized_monthly);
}

#[test]
fn amortizing_dsr_figure_is_annualized_monthly() {
    let t = terms(dec!(12000000), dec!(6), 12, RepaymentType::Amortizing);
    let expected = monthly_payment(&t).unwrap() * dec!(12);
    assert_eq!(annual_debt_service(&t).unwrap(), expected);
}

#[test]
fn terms_default_missing_period_to_twelve_months() {
    let mut h = loan_holding(dec!(10000000));
    h.metadata.loan_period_months = None;
    let t = LoanTerms::from_holding(&h).unwrap();
    assert_eq!(t.months, 12);

    h.metadata.loan_period_months = Some(0);
    let t = LoanTerms::from_holding(&h).unwrap();
    assert_eq!(t.months, 12);
}

#[test]
fn terms_default_missing_rate_and_repayment_type() {
    let mut h = loan_holding(dec!(10000000));
    h.metadata.interest_rate = None;
    h.metadata.repayment_type = None;
    let t = LoanTerms::from_holding(&h).unwrap();
    assert_eq!(t.annual_rate_percent, Decimal::ZERO);
    assert_eq!(t.repayment_type, RepaymentType::Amortizing);
}

#[test]
fn terms_reject_non_loan_holdings() {
    let h = Holding::new("예금", HoldingOwner::Primary, AssetCategory::Cash, dec!(1000000));
    assert!(LoanTerms::from_holding(&h).is_err());
}

#[test]
fn terms_reject_negative_principal() {
    let h = loan_holding(dec!(-1));
    assert!(LoanTerms::from_holding(&h).is_err());
}

#[test]
fn schedule_carries_both_figures() {
    let h = loan_holding(dec!(100000000));
    let schedule = LoanSchedule::for_holding(&h).unwrap();
    assert_eq!(schedule.monthly_payment.round_dp(2), dec!(333333.33));
    assert_eq!(schedule.annual_debt_service, dec!(54000000));
}
