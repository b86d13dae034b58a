//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use tideswap_core::prelude::*;
//! ```
//!
//! This re-exports the domain types, the swap-math entry points, the
//! [`FeeTable`] seam, and the error types so that consumers don't need to
//! import from individual submodules.

// Re-export domain types
pub use crate::domain::{
    Amount, Decimals, ExactAFill, ExactBFill, ExchangeRate, FeePpm, Location, LocationKind,
    Rounding, PPM_SCALE,
};

// Re-export math entry points
pub use crate::math::{
    amount_a_from_amount_b, amount_b_from_amount_a, market_order_exact_a, market_order_exact_b,
    mul_div, relative_amounts,
};

// Re-export the ledger seam
pub use crate::traits::FeeTable;

// Re-export error types
pub use crate::error::{ExchangeError, Result};
