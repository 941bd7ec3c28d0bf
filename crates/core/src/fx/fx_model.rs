//! FX domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::INITIAL_USD_KRW_RATE;
use crate::errors::{Error, Result};

/// A USD/KRW exchange rate snapshot (KRW per 1 USD).
///
/// Supplied externally and refreshed on a TTL by the surrounding system;
/// the engine treats it as a pure input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub rate: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl ExchangeRate {
    /// Creates a validated rate. `rate <= 0` is rejected.
    pub fn new(rate: Decimal, timestamp: DateTime<Utc>) -> Result<Self> {
        let r = Self { rate, timestamp };
        r.validate()?;
        Ok(r)
    }

    /// Placeholder rate for rendering before the first successful fetch.
    pub fn initial(timestamp: DateTime<Utc>) -> Self {
        Self {
            rate: INITIAL_USD_KRW_RATE,
            timestamp,
        }
    }

    /// Fails fast on non-positive rates so a bad feed can never masquerade
    /// as a real valuation downstream.
    pub fn validate(&self) -> Result<()> {
        if self.rate <= Decimal::ZERO {
            return Err(Error::InvalidExchangeRate(format!(
                "USD/KRW rate must be > 0, got {}",
                self.rate
            )));
        }
        Ok(())
    }
}
