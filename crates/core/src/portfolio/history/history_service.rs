//! History projection.
//!
//! There is no real historical price data in this system. The projection
//! replays today's holdings month by month, including each holding only
//! once its creation date has passed, and applies a deterministic
//! `1 - i * variance_factor` multiplier to investment values to sketch a
//! smoothed backward trend. This is a documented presentation
//! approximation, not historical pricing.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;

use super::history_model::{HistoryOptions, HistoryPoint};
use crate::errors::{Error, Result};
use crate::fx::ExchangeRate;
use crate::portfolio::net_worth::StatsAccumulator;

use crate::assets::Holding;

/// Projects portfolio history for the `options.months_count` months ending
/// at `as_of`, oldest first. Always returns exactly `months_count` points;
/// months before any holding existed aggregate to zeros.
pub fn compute_history(
    holdings: &[Holding],
    rate: &ExchangeRate,
    as_of: DateTime<Utc>,
    options: &HistoryOptions,
) -> Result<Vec<HistoryPoint>> {
    rate.validate()?;

    let current_month = NaiveDate::from_ymd_opt(as_of.year(), as_of.month(), 1)
        .ok_or_else(|| Error::Calculation(format!("invalid as-of date {}", as_of)))?;

    let mut points = Vec::with_capacity(options.months_count as usize);

    for i in (0..options.months_count).rev() {
        let month_start = current_month
            .checked_sub_months(Months::new(i))
            .ok_or_else(|| Error::Calculation(format!("history month {} out of range", i)))?;
        let next_month_start = month_start
            .checked_add_months(Months::new(1))
            .ok_or_else(|| Error::Calculation(format!("history month {} out of range", i)))?;

        let market_variance = Decimal::ONE - Decimal::from(i) * options.variance_factor;

        let mut acc = StatsAccumulator::new();
        for holding in holdings {
            // Existed as of this month's end?
            if holding.created_at.date_naive() >= next_month_start {
                continue;
            }
            if !options.owner.matches(holding.owner) || !options.view.matches(holding.category) {
                continue;
            }
            acc.add(holding, rate, market_variance)?;
        }
        let stats = acc.finish();

        points.push(HistoryPoint {
            period_label: format!("{}.{:02}", month_start.year(), month_start.month()),
            net_worth: stats.net_worth,
            total_assets: stats.total_assets,
            total_liabilities: stats.total_liabilities,
            total_profit: stats.total_profit,
            total_roi_percent: stats.total_roi_percent,
        });
    }

    debug!(
        "Projected {} history points ending {}",
        points.len(),
        current_month
    );
    Ok(points)
}
