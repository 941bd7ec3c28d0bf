//! History domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{HISTORY_MONTHS_COUNT, MARKET_VARIANCE_FACTOR};
use crate::portfolio::filters::{OwnerFilter, ViewFilter};

/// One month of the projected history, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    /// Month label, "YYYY.MM" (serialized as `month`, the chart's x-axis key)
    #[serde(rename = "month")]
    pub period_label: String,
    pub net_worth: Decimal,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub total_profit: Decimal,
    pub total_roi_percent: Decimal,
}

/// Knobs for the history projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryOptions {
    /// Number of months to project, newest month being the as-of month
    pub months_count: u32,
    /// Per-month backward variance step applied to investment values
    pub variance_factor: Decimal,
    pub owner: OwnerFilter,
    pub view: ViewFilter,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            months_count: HISTORY_MONTHS_COUNT,
            variance_factor: MARKET_VARIANCE_FACTOR,
            owner: OwnerFilter::Total,
            view: ViewFilter::Dashboard,
        }
    }
}
