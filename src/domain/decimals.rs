//! Token decimal places.

use alloy_primitives::U256;

use crate::error::{ExchangeError, Result};

/// The number of decimal places a token's amounts are expressed with.
///
/// Construction is infallible: the only hard limit is that the decimal unit
/// `10^decimals` must fit the 256-bit arithmetic width, and that is checked
/// where the unit is actually materialized, in [`unit_amount`](Self::unit_amount).
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use tideswap_core::domain::Decimals;
///
/// let usdc = Decimals::new(6);
/// assert_eq!(usdc.unit_amount(), Ok(U256::from(1_000_000u64)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Decimals` value.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns the decimal unit `10^decimals` as an exact 256-bit integer.
    ///
    /// Used to re-scale amounts expressed with differing token decimal
    /// precisions, e.g. when comparing an 18-decimal amount against a
    /// 6-decimal one.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Overflow`] when `10^decimals` exceeds
    /// 256 bits (decimals ≥ 78).
    pub fn unit_amount(&self) -> Result<U256> {
        U256::from(10u8)
            .checked_pow(U256::from(self.0))
            .ok_or(ExchangeError::Overflow("decimal unit exceeds 256 bits"))
    }
}
