//! Packed exchange-rate codec.

use core::fmt;

use alloy_primitives::U256;

use crate::error::{ExchangeError, Result};

/// Width of each rate component in bits.
const COMPONENT_BITS: usize = 128;

/// An exchange rate between two tokens, packed as a 256-bit word.
///
/// The rate is an ordered pair `(x1, x2)` of 128-bit unsigned integers
/// stored as `x1 << 128 | x2`: the pool converts `x2` units of token B into
/// `x1` units of token A at this ratio. The reverse direction is derived by
/// the swap math ([`amount_b_from_amount_a`](crate::math::amount_b_from_amount_a)),
/// never by swapping the stored components.
///
/// Decoding is total — any 256-bit word splits into some pair — but a rate
/// with a zero component is *inactive* and rejected by the swap math.
///
/// # Examples
///
/// ```
/// use tideswap_core::domain::ExchangeRate;
///
/// let rate = ExchangeRate::new(3, 1);
/// assert_eq!(rate.decode(), (3, 1));
/// assert!(rate.is_active());
///
/// assert!(!ExchangeRate::new(0, 5).is_active());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[must_use]
pub struct ExchangeRate(U256);

impl ExchangeRate {
    /// Packs two in-range components into a rate.
    ///
    /// Infallible: `u128` arguments cannot exceed the component width.
    pub fn new(x1: u128, x2: u128) -> Self {
        Self((U256::from(x1) << COMPONENT_BITS) | U256::from(x2))
    }

    /// Packs two 256-bit values into a rate, validating the component width.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::RangeExceeded`] if either component does not
    /// fit in 128 bits.
    pub fn encode(x1: U256, x2: U256) -> Result<Self> {
        if x1.bit_len() > COMPONENT_BITS {
            return Err(ExchangeError::RangeExceeded(
                "rate component x1 exceeds 128 bits",
            ));
        }
        if x2.bit_len() > COMPONENT_BITS {
            return Err(ExchangeError::RangeExceeded(
                "rate component x2 exceeds 128 bits",
            ));
        }
        Ok(Self((x1 << COMPONENT_BITS) | x2))
    }

    /// Reinterprets a raw 256-bit word as a rate. Total.
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Returns the packed 256-bit representation.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.0
    }

    /// Decodes the 32-byte big-endian wire representation. Total.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(U256::from_be_bytes(bytes))
    }

    /// Returns the 32-byte big-endian wire representation.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }

    /// Unpacks the rate into its `(x1, x2)` components. Total.
    #[must_use]
    pub fn decode(&self) -> (u128, u128) {
        let x1 = (self.0 >> COMPONENT_BITS).to::<u128>();
        let x2 = (self.0 & U256::from(u128::MAX)).to::<u128>();
        (x1, x2)
    }

    /// Returns `true` if both components are non-zero.
    ///
    /// An inactive rate cannot be used to swap in either direction.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let (x1, x2) = self.decode();
        x1 != 0 && x2 != 0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x1, x2) = self.decode();
        write!(f, "{x1}/{x2}")
    }
}
