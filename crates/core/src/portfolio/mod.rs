//! Portfolio calculation modules.
//!
//! Valuation per holding, DSR aggregation, portfolio totals, and the
//! synthetic monthly history projection.

pub mod dsr;
pub mod filters;
pub mod history;
pub mod net_worth;
pub mod valuation;

pub use dsr::*;
pub use filters::*;
pub use history::*;
pub use net_worth::*;
pub use valuation::*;
