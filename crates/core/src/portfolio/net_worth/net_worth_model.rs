//! Portfolio statistics models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated portfolio metrics in the reporting currency.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    /// Sum of all non-loan holding values
    pub total_assets: Decimal,
    /// Sum of loan values (positive magnitude)
    pub total_liabilities: Decimal,
    /// `total_assets - total_liabilities`
    pub net_worth: Decimal,
    /// Unrealized profit across investments and real estate
    pub total_profit: Decimal,
    /// `total_profit / total_principal` in percent; zero without principal
    pub total_roi_percent: Decimal,
}
