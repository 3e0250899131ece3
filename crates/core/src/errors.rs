//! Error types

use thiserror::Error;

/// Quote provider failures
///
/// Always recovered locally by serving the last snapshot when one exists;
/// callers only ever see these as an informational annotation.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Price service failures
#[derive(Debug, Error)]
pub enum PriceError {
    /// Terminal: the provider is down and no snapshot was ever stored.
    #[error("quote provider unavailable and no cached prices: {cause}")]
    NoCacheAvailable { cause: QuoteError },
}

/// History query validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown history period: {0}")]
    UnknownPeriod(String),

    #[error("invalid chain id: {0}")]
    InvalidChainId(String),
}

/// Result type aliases
pub type QuoteResult<T> = Result<T, QuoteError>;
pub type PriceResult<T> = Result<T, PriceError>;
