//! Valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computed valuation for one holding, in the reporting currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValuation {
    /// Current market value
    pub current_value: Decimal,
    /// Unrealized profit against cost basis (zero for cash and loans)
    pub profit_amount: Decimal,
    /// Profit rate in percent; exactly zero when no cost basis exists
    pub profit_rate_percent: Decimal,
}

impl AssetValuation {
    pub fn zero() -> Self {
        Self {
            current_value: Decimal::ZERO,
            profit_amount: Decimal::ZERO,
            profit_rate_percent: Decimal::ZERO,
        }
    }
}
