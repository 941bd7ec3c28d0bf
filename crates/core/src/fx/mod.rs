//! FX module - USD/KRW normalization and the exchange-rate cache.

pub mod currency;
mod fx_errors;
mod fx_model;
mod rate_cache;

pub use currency::{is_usd_denominated, to_reporting_currency};
pub use fx_errors::FxError;
pub use fx_model::ExchangeRate;
pub use rate_cache::{
    CachedRate, Clock, ExchangeRateCache, InMemoryRateStore, RateProvider, RateStore, SystemClock,
    USD_KRW_PAIR,
};
