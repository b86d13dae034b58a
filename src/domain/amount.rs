//! Raw token amount.

use core::fmt;

/// A raw token amount in the smallest unit (wei, satoshi, or equivalent).
///
/// `Amount` never interprets decimals — that responsibility lies with
/// [`Decimals`](super::Decimals). All `u128` values are valid amounts.
///
/// `Amount` carries no arithmetic of its own: every multiply-then-divide
/// over amounts goes through [`mul_div`](crate::math::mul_div), which widens
/// to 256 bits before dividing so no intermediate product can truncate.
///
/// # Examples
///
/// ```
/// use tideswap_core::domain::Amount;
///
/// let a = Amount::new(1_000_000);
/// assert_eq!(a.get(), 1_000_000);
/// assert!(!a.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
