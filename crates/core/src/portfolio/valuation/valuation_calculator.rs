//! Valuation math for a single holding.

use rust_decimal::Decimal;

use super::valuation_model::AssetValuation;
use crate::assets::Holding;
use crate::fx::currency::to_reporting_currency;
use crate::fx::ExchangeRate;

/// Market value in the holding's own currency, before normalization.
///
/// Investment holdings price via the `currentPrice ?? avgPrice ?? 0` chain
/// times the unit count, with `variance` scaling the price (the history
/// projector passes its per-month multiplier; live valuation passes 1).
/// Every other category is worth its face amount; variance never applies.
pub fn market_value(holding: &Holding, variance: Decimal) -> Decimal {
    if holding.category.is_investment() {
        holding.price_per_unit() * holding.amount * variance
    } else {
        holding.amount
    }
}

/// Cost basis in the holding's own currency: `avgPrice * amount` for
/// investments, `purchasePrice` for real estate, none otherwise.
pub fn cost_basis(holding: &Holding) -> Option<Decimal> {
    if holding.category.is_investment() {
        Some(holding.metadata.avg_price.unwrap_or(Decimal::ZERO) * holding.amount)
    } else if holding.category == crate::assets::AssetCategory::RealEstate {
        Some(holding.metadata.purchase_price.unwrap_or(Decimal::ZERO))
    } else {
        None
    }
}

/// Current value in the reporting currency.
pub fn current_value(holding: &Holding, rate: &ExchangeRate) -> Result<Decimal, crate::Error> {
    rate.validate()?;
    holding.validate()?;
    Ok(to_reporting_currency(
        market_value(holding, Decimal::ONE),
        holding.is_usd_denominated(),
        rate,
    ))
}

/// Full valuation of one holding in the reporting currency.
///
/// The profit rate is computed on per-unit prices in the holding's own
/// currency, so it is invariant under exchange-rate changes; the profit
/// amount normalizes both sides with the same rate. A zero cost basis
/// yields exactly zero profit, never a division by zero.
pub fn valuate(holding: &Holding, rate: &ExchangeRate) -> Result<AssetValuation, crate::Error> {
    rate.validate()?;
    holding.validate()?;

    let usd = holding.is_usd_denominated();
    let current = to_reporting_currency(market_value(holding, Decimal::ONE), usd, rate);

    let (profit_amount, profit_rate_percent) = match cost_basis(holding) {
        Some(basis) => {
            let profit = current - to_reporting_currency(basis, usd, rate);
            (profit, profit_rate(holding))
        }
        None => (Decimal::ZERO, Decimal::ZERO),
    };

    Ok(AssetValuation {
        current_value: current,
        profit_amount,
        profit_rate_percent,
    })
}

/// Profit rate in percent, computed in the holding's own currency.
///
/// Investments compare per-unit prices (`(price - avgPrice) / avgPrice`),
/// so the rate is meaningful even for a zero-unit position; real estate
/// compares face amount against purchase price. Zero cost basis is exactly
/// zero percent.
fn profit_rate(holding: &Holding) -> Decimal {
    let (current, basis) = if holding.category.is_investment() {
        (
            holding.price_per_unit(),
            holding.metadata.avg_price.unwrap_or(Decimal::ZERO),
        )
    } else if holding.category == crate::assets::AssetCategory::RealEstate {
        (
            holding.amount,
            holding.metadata.purchase_price.unwrap_or(Decimal::ZERO),
        )
    } else {
        return Decimal::ZERO;
    };

    if basis.is_zero() {
        Decimal::ZERO
    } else {
        (current - basis) / basis * Decimal::from(100)
    }
}
