//! Minimal error set for core-domain construction & parsing.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum CoreError {
    /// A whole-unit value does not fit its field once scaled to tenths.
    #[error("domain out of range: {0}")]
    DomainOutOfRange(&'static str),

    /// Unknown precision token (expected "precise" or "imprecise").
    #[error("invalid precision token")]
    InvalidPrecision,
}

pub type CoreResult<T> = Result<T, CoreError>;
