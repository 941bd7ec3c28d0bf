//! Core error types for the calculation engine.
//!
//! Invalid inputs (negative amounts, non-positive exchange rates, holdings
//! missing fields a computation needs) are rejected with typed errors.
//! Degenerate-but-valid inputs (zero cost basis, zero interest rate) resolve
//! to well-defined values inside the calculators and never surface here.

use thiserror::Error;

use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(String),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),
}

/// Validation errors for holdings and profile input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
