//! TTL-backed exchange-rate cache.
//!
//! The original dashboard kept a module-level singleton cache in front of
//! the rate feed. Here the cache is an explicitly constructed object with
//! injected TTL, clock, storage backend, and provider, so hosts can share
//! one instance by reference and tests can drive it with fakes.

use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::fx_errors::FxError;
use super::fx_model::ExchangeRate;
use crate::constants::{DEFAULT_USD_KRW_RATE, EXCHANGE_RATE_TTL_SECS};

/// Cache key for the only pair the dashboard tracks.
pub const USD_KRW_PAIR: &str = "USDKRW";

/// Time source. Injected so tests can advance time without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation for production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A cached rate plus the instant it was fetched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedRate {
    pub rate: Decimal,
    pub fetched_at: DateTime<Utc>,
}

/// Storage backend for cached rates.
///
/// Implementations may persist across sessions (the original used browser
/// local storage); the in-memory implementation below is the default.
pub trait RateStore: Send + Sync {
    fn load(&self, pair: &str) -> Result<Option<CachedRate>, FxError>;
    fn save(&self, pair: &str, entry: CachedRate) -> Result<(), FxError>;
    fn clear(&self) -> Result<(), FxError>;
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct InMemoryRateStore {
    entries: RwLock<HashMap<String, CachedRate>>,
}

impl InMemoryRateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateStore for InMemoryRateStore {
    fn load(&self, pair: &str) -> Result<Option<CachedRate>, FxError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FxError::StoreFailed(e.to_string()))?;
        Ok(entries.get(pair).copied())
    }

    fn save(&self, pair: &str, entry: CachedRate) -> Result<(), FxError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FxError::StoreFailed(e.to_string()))?;
        entries.insert(pair.to_string(), entry);
        Ok(())
    }

    fn clear(&self) -> Result<(), FxError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FxError::StoreFailed(e.to_string()))?;
        entries.clear();
        Ok(())
    }
}

/// Upstream rate feed. The host implements this over whatever transport it
/// uses; the cache never performs I/O itself beyond this seam.
pub trait RateProvider: Send + Sync {
    fn fetch_usd_krw(&self) -> Result<Decimal, FxError>;
}

/// TTL cache in front of a [`RateProvider`].
///
/// `get_usd_krw` never fails: provider errors and invalid rates degrade to
/// the configured default rate, matching the dashboard's behavior of
/// rendering with a fallback rate rather than blocking on the feed.
pub struct ExchangeRateCache {
    ttl: Duration,
    default_rate: Decimal,
    provider: Arc<dyn RateProvider>,
    store: Arc<dyn RateStore>,
    clock: Arc<dyn Clock>,
}

impl ExchangeRateCache {
    pub fn new(
        provider: Arc<dyn RateProvider>,
        store: Arc<dyn RateStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            ttl: Duration::seconds(EXCHANGE_RATE_TTL_SECS),
            default_rate: DEFAULT_USD_KRW_RATE,
            provider,
            store,
            clock,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_default_rate(mut self, rate: Decimal) -> Self {
        self.default_rate = rate;
        self
    }

    /// Returns the current USD/KRW rate, serving the cached entry while it
    /// is younger than the TTL. `force_refresh` bypasses a fresh cache.
    pub fn get_usd_krw(&self, force_refresh: bool) -> ExchangeRate {
        let now = self.clock.now();

        if !force_refresh {
            match self.store.load(USD_KRW_PAIR) {
                Ok(Some(cached)) if now - cached.fetched_at < self.ttl => {
                    debug!(
                        "Serving cached USD/KRW rate {} fetched at {}",
                        cached.rate, cached.fetched_at
                    );
                    return ExchangeRate {
                        rate: cached.rate,
                        timestamp: cached.fetched_at,
                    };
                }
                Ok(_) => {}
                Err(e) => warn!("Rate cache load failed, fetching fresh: {}", e),
            }
        }

        match self.provider.fetch_usd_krw() {
            Ok(rate) if rate > Decimal::ZERO => {
                let entry = CachedRate {
                    rate,
                    fetched_at: now,
                };
                if let Err(e) = self.store.save(USD_KRW_PAIR, entry) {
                    warn!("Rate cache save failed: {}", e);
                }
                ExchangeRate {
                    rate,
                    timestamp: now,
                }
            }
            Ok(bad) => {
                warn!(
                    "Provider returned non-positive USD/KRW rate {}, using default {}",
                    bad, self.default_rate
                );
                self.fallback(now)
            }
            Err(e) => {
                warn!(
                    "USD/KRW fetch failed ({}), using default rate {}",
                    e, self.default_rate
                );
                self.fallback(now)
            }
        }
    }

    /// Drops any cached entry.
    pub fn clear(&self) {
        if let Err(e) = self.store.clear() {
            warn!("Rate cache clear failed: {}", e);
        }
    }

    fn fallback(&self, now: DateTime<Utc>) -> ExchangeRate {
        ExchangeRate {
            rate: self.default_rate,
            timestamp: now,
        }
    }
}
