//! Unified error types for the tideswap core.
//!
//! All fallible operations across the crate return [`ExchangeError`] as their
//! error type. Every variant is fatal to the single call that produced it and
//! deterministic on the same input — nothing here is retryable.
//!
//! Two conditions are deliberately *not* errors and never appear in this
//! enum: a structurally malformed location (reported as an invalid-location
//! string by [`Location::describe`](crate::domain::Location::describe)) and a
//! missing fee-table entry (resolved to a fallback by
//! [`FeeTable::resolve_fee`](crate::traits::FeeTable::resolve_fee)). Batch
//! callers must not be interrupted by either.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, ExchangeError>;

/// Errors produced by the codec and swap-math entry points.
///
/// Payload strings are static descriptions of the violated constraint, so
/// variants stay cheap to construct and comparable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ExchangeError {
    /// A value exceeds its declared bit width during encoding.
    ///
    /// Raised for exchange-rate components above 128 bits and pool
    /// identifiers above 248 bits.
    #[error("value out of range: {0}")]
    RangeExceeded(&'static str),

    /// Swap math was invoked with a rate whose `x1` or `x2` is zero.
    ///
    /// An inactive rate cannot convert tokens in either direction; this is
    /// never silently treated as a zero-amount swap.
    #[error("inactive exchange rate: cannot exchange these tokens")]
    InactiveRate,

    /// A fee of 100% or more was passed to a validated constructor.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A computed quantity does not fit its target width.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A zero divisor reached an arithmetic entry point.
    #[error("division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_range_exceeded() {
        let e = ExchangeError::RangeExceeded("pool id exceeds 248 bits");
        assert_eq!(
            e.to_string(),
            "value out of range: pool id exceeds 248 bits"
        );
    }

    #[test]
    fn display_inactive_rate() {
        assert_eq!(
            ExchangeError::InactiveRate.to_string(),
            "inactive exchange rate: cannot exchange these tokens"
        );
    }

    #[test]
    fn display_division_by_zero() {
        assert_eq!(
            ExchangeError::DivisionByZero.to_string(),
            "division by zero"
        );
    }

    #[test]
    fn equality_distinguishes_variants() {
        assert_ne!(ExchangeError::InactiveRate, ExchangeError::DivisionByZero);
        assert_eq!(ExchangeError::Overflow("x"), ExchangeError::Overflow("x"));
    }

    #[test]
    fn copy_semantics() {
        let e = ExchangeError::InactiveRate;
        let f = e;
        assert_eq!(e, f);
    }
}
