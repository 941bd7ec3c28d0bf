//! Unit tests for portfolio aggregation.

use super::net_worth_service::compute_stats;
use crate::assets::{AssetCategory, Holding, HoldingOwner};
use crate::fx::ExchangeRate;
use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn rate(r: Decimal) -> ExchangeRate {
    ExchangeRate::new(r, Utc::now()).unwrap()
}

fn stock(amount: Decimal, avg: Decimal, current: Decimal) -> Holding {
    let mut h = Holding::new("주식", HoldingOwner::Primary, AssetCategory::Stock, amount);
    h.metadata.avg_price = Some(avg);
    h.current_price = Some(current);
    h
}

fn cash(amount: Decimal) -> Holding {
    Holding::new("예금", HoldingOwner::Primary, AssetCategory::Cash, amount)
}

fn loan(amount: Decimal) -> Holding {
    Holding::new("대출", HoldingOwner::Primary, AssetCategory::Loan, amount)
}

fn real_estate(amount: Decimal, purchase: Decimal) -> Holding {
    let mut h = Holding::new("아파트", HoldingOwner::Shared, AssetCategory::RealEstate, amount);
    h.metadata.purchase_price = Some(purchase);
    h
}

#[test]
fn empty_holdings_yield_zeroed_stats() {
    let stats = compute_stats(&[], &rate(dec!(1400))).unwrap();
    assert_eq!(stats.total_assets, Decimal::ZERO);
    assert_eq!(stats.total_liabilities, Decimal::ZERO);
    assert_eq!(stats.net_worth, Decimal::ZERO);
    assert_eq!(stats.total_profit, Decimal::ZERO);
    assert_eq!(stats.total_roi_percent, Decimal::ZERO);
}

#[test]
fn loans_route_into_liabilities() {
    let holdings = vec![cash(dec!(10000000)), loan(dec!(4000000))];
    let stats = compute_stats(&holdings, &rate(dec!(1400))).unwrap();

    assert_eq!(stats.total_assets, dec!(10000000));
    assert_eq!(stats.total_liabilities, dec!(4000000));
    assert_eq!(stats.net_worth, dec!(6000000));
}

#[test]
fn investments_and_real_estate_accumulate_profit_and_roi() {
    let holdings = vec![
        // 10 shares: basis 500,000, value 600,000, profit 100,000.
        stock(dec!(10), dec!(50000), dec!(60000)),
        // Basis 750M, value 900M, profit 150M.
        real_estate(dec!(900000000), dec!(750000000)),
        // Cash contributes value but no principal/profit.
        cash(dec!(5000000)),
    ];
    let stats = compute_stats(&holdings, &rate(dec!(1400))).unwrap();

    assert_eq!(stats.total_assets, dec!(905600000));
    assert_eq!(stats.total_profit, dec!(150100000));
    // ROI = 150,100,000 / 750,500,000 * 100.
    assert_eq!(
        stats.total_roi_percent,
        (dec!(150100000) / dec!(750500000) * dec!(100)).round_dp(6)
    );
}

#[test]
fn zero_principal_portfolio_has_zero_roi() {
    let holdings = vec![cash(dec!(1000000))];
    let stats = compute_stats(&holdings, &rate(dec!(1400))).unwrap();
    assert_eq!(stats.total_roi_percent, Decimal::ZERO);
}

#[test]
fn usd_holdings_are_normalized_into_krw() {
    let mut h = stock(dec!(5), dec!(100), dec!(120));
    h.currency = Some("USD".to_string());
    let stats = compute_stats(&[h], &rate(dec!(1400))).unwrap();

    assert_eq!(stats.total_assets, dec!(840000));
    assert_eq!(stats.total_profit, dec!(140000));
}

#[test]
fn invalid_exchange_rate_is_rejected() {
    let bad = ExchangeRate {
        rate: dec!(-1),
        timestamp: Utc::now(),
    };
    assert!(compute_stats(&[cash(dec!(1000))], &bad).is_err());
}

#[test]
fn negative_amount_is_rejected() {
    assert!(compute_stats(&[cash(dec!(-1))], &rate(dec!(1400))).is_err());
}

proptest! {
    /// Pure function: identical inputs produce identical outputs.
    #[test]
    fn stats_are_idempotent(
        shares in 0u32..10_000,
        avg in 0u32..1_000_000,
        current in 0u32..1_000_000,
        cash_amount in 0u64..1_000_000_000_000,
        loan_amount in 0u64..1_000_000_000_000,
    ) {
        let holdings = vec![
            stock(Decimal::from(shares), Decimal::from(avg), Decimal::from(current)),
            cash(Decimal::from(cash_amount)),
            loan(Decimal::from(loan_amount)),
        ];
        let r = rate(dec!(1400));
        let first = compute_stats(&holdings, &r).unwrap();
        let second = compute_stats(&holdings, &r).unwrap();
        prop_assert_eq!(first, second);
    }

    /// USD totals scale linearly with the exchange rate.
    #[test]
    fn usd_totals_scale_with_the_rate(
        shares in 1u32..10_000,
        avg in 1u32..100_000,
        current in 1u32..100_000,
        factor in 2u32..10,
    ) {
        let mut h = stock(Decimal::from(shares), Decimal::from(avg), Decimal::from(current));
        h.currency = Some("USD".to_string());
        let holdings = vec![h];

        let base = compute_stats(&holdings, &rate(dec!(1000))).unwrap();
        let scaled = compute_stats(
            &holdings,
            &rate(dec!(1000) * Decimal::from(factor)),
        )
        .unwrap();

        prop_assert_eq!(scaled.total_assets, base.total_assets * Decimal::from(factor));
        prop_assert_eq!(scaled.total_profit, base.total_profit * Decimal::from(factor));
    }
}
