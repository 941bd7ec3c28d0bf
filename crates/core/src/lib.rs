//! Wealthdash Core - Portfolio valuation and DSR calculation engine.
//!
//! This crate contains the calculation core for a household finance
//! dashboard: per-holding valuation, loan amortization, debt-service-ratio
//! (DSR) aggregation, portfolio totals, and a synthetic monthly history.
//!
//! The engine is purely synchronous and side-effect-free: it consumes a
//! snapshot of holdings, a USD/KRW exchange rate, and an annual income, and
//! returns derived metrics. Price fetching, persistence, and UI concerns
//! live in the surrounding host.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod loans;
pub mod portfolio;

// Re-export common types
pub use assets::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
