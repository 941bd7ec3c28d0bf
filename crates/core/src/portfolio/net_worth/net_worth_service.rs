//! Portfolio aggregation.

use log::debug;
use rust_decimal::Decimal;

use super::net_worth_model::PortfolioStats;
use crate::assets::Holding;
use crate::constants::DECIMAL_PRECISION;
use crate::errors::Result;
use crate::fx::currency::to_reporting_currency;
use crate::fx::ExchangeRate;
use crate::portfolio::valuation::{cost_basis, market_value};

/// Running totals for one aggregation pass.
///
/// The history projector replays this accumulator per month with its
/// variance multiplier; live stats use a multiplier of 1. Keeping a single
/// accumulator is what guarantees the two aggregate identically.
#[derive(Debug, Default)]
pub struct StatsAccumulator {
    total_assets: Decimal,
    total_liabilities: Decimal,
    total_profit: Decimal,
    total_principal: Decimal,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one holding into the totals. `variance` scales investment
    /// market value only; cost basis is never variance-adjusted.
    pub fn add(&mut self, holding: &Holding, rate: &ExchangeRate, variance: Decimal) -> Result<()> {
        holding.validate()?;

        let usd = holding.is_usd_denominated();
        let current = to_reporting_currency(market_value(holding, variance), usd, rate);

        if holding.category.is_loan() {
            self.total_liabilities += current;
            return Ok(());
        }

        self.total_assets += current;
        if let Some(basis) = cost_basis(holding) {
            let basis = to_reporting_currency(basis, usd, rate);
            self.total_principal += basis;
            self.total_profit += current - basis;
        }
        Ok(())
    }

    /// Closes the pass into rounded portfolio stats.
    pub fn finish(self) -> PortfolioStats {
        let total_roi_percent = if self.total_principal > Decimal::ZERO {
            self.total_profit / self.total_principal * Decimal::from(100)
        } else {
            Decimal::ZERO
        };

        PortfolioStats {
            total_assets: self.total_assets.round_dp(DECIMAL_PRECISION),
            total_liabilities: self.total_liabilities.round_dp(DECIMAL_PRECISION),
            net_worth: (self.total_assets - self.total_liabilities).round_dp(DECIMAL_PRECISION),
            total_profit: self.total_profit.round_dp(DECIMAL_PRECISION),
            total_roi_percent: total_roi_percent.round_dp(DECIMAL_PRECISION),
        }
    }
}

/// Rolls all holdings up into portfolio totals.
///
/// Callers narrow the slice with [`crate::portfolio::filter_holdings`]
/// first when an owner or view filter applies.
pub fn compute_stats(holdings: &[Holding], rate: &ExchangeRate) -> Result<PortfolioStats> {
    rate.validate()?;

    let mut acc = StatsAccumulator::new();
    for holding in holdings {
        acc.add(holding, rate, Decimal::ONE)?;
    }
    let stats = acc.finish();

    debug!(
        "Portfolio stats over {} holdings: assets={}, liabilities={}, net_worth={}",
        holdings.len(),
        stats.total_assets,
        stats.total_liabilities,
        stats.net_worth
    );
    Ok(stats)
}
