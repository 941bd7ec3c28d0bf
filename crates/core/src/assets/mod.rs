//! Asset domain module - holding snapshots consumed by the calculators.

mod assets_model;

pub use assets_model::*;
