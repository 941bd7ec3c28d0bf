//! Synthetic monthly history projection.

mod history_model;
mod history_service;

pub use history_model::*;
pub use history_service::*;
