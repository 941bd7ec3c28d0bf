use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Reporting currency for all aggregated values
pub const REPORTING_CURRENCY: &str = "KRW";

/// Regulatory DSR lending limit, in percent
pub const DSR_BANK_LIMIT_PERCENT: Decimal = dec!(40);

/// Fallback USD/KRW rate when the rate provider is unavailable
pub const DEFAULT_USD_KRW_RATE: Decimal = dec!(1450);

/// USD/KRW rate assumed before the first successful fetch
pub const INITIAL_USD_KRW_RATE: Decimal = dec!(1300);

/// Number of months rendered in the history chart
pub const HISTORY_MONTHS_COUNT: u32 = 6;

/// Per-month variance multiplier step for the synthetic history trend
pub const MARKET_VARIANCE_FACTOR: Decimal = dec!(0.015);

/// Time-to-live for cached exchange rates, in seconds
pub const EXCHANGE_RATE_TTL_SECS: i64 = 300;

/// Loan period assumed when a loan carries no explicit term
pub const DEFAULT_LOAN_PERIOD_MONTHS: u32 = 12;

/// One 만원 (10,000 KRW), the entry unit for real estate and loan amounts
pub const MAN_WON: Decimal = dec!(10000);

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;
