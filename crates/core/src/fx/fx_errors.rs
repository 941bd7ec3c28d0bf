use thiserror::Error;

/// FX-specific errors.
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    #[error("Rate fetch failed: {0}")]
    FetchFailed(String),

    #[error("Rate cache storage failed: {0}")]
    StoreFailed(String),
}
