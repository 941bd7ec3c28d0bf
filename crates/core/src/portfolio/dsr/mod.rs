//! DSR (Debt Service Ratio) aggregation.

mod dsr_model;
mod dsr_service;

pub use dsr_model::*;
pub use dsr_service::*;
