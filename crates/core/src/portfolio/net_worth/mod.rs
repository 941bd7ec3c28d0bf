//! Portfolio totals: assets, liabilities, net worth, profit, ROI.

mod net_worth_model;
mod net_worth_service;

pub use net_worth_model::*;
pub use net_worth_service::*;

#[cfg(test)]
mod net_worth_service_tests;
