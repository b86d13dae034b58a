//! Fee-table lookup seam and resolution rule.
//!
//! The fee table itself lives in the external ledger; this crate only
//! defines the lookup surface and the precedence rule that turns raw table
//! entries into a safe [`FeePpm`]. Resolution is pure precedence — a missing
//! entry is an expected outcome, never an error, so batch callers are not
//! interrupted by unconfigured pairs.

use std::collections::HashMap;

use alloy_primitives::Address;

use crate::domain::FeePpm;

/// Lookup surface for per-pair taker fees, supplied by the external ledger.
///
/// Implementations answer a single question: is a fee configured for this
/// *ordered* token pair? Everything else — fallback precedence and the
/// ≥100% clamp — is the provided [`resolve_fee`](Self::resolve_fee) rule,
/// shared by every implementation.
pub trait FeeTable {
    /// Returns the raw fee entry for the ordered pair, if one is configured.
    fn pair_fee(&self, token_a: Address, token_b: Address) -> Option<u32>;

    /// Resolves the fee for an ordered token pair.
    ///
    /// Precedence:
    ///
    /// 1. the pair-specific entry `(token_a, token_b)`;
    /// 2. the global default entry `(Address::ZERO, Address::ZERO)`;
    /// 3. zero.
    ///
    /// The resolved value is then normalized: an entry of 100% or more is
    /// treated as zero rather than propagated into the swap math.
    fn resolve_fee(&self, token_a: Address, token_b: Address) -> FeePpm {
        let raw = self
            .pair_fee(token_a, token_b)
            .or_else(|| self.pair_fee(Address::ZERO, Address::ZERO))
            .unwrap_or(0);
        FeePpm::normalize(raw)
    }
}

/// Ready-made in-memory fee table keyed by ordered pair.
impl FeeTable for HashMap<(Address, Address), u32> {
    fn pair_fee(&self, token_a: Address, token_b: Address) -> Option<u32> {
        self.get(&(token_a, token_b)).copied()
    }
}
