//! Parts-per-million fee rate.

use core::fmt;

use crate::error::{ExchangeError, Result};

/// Scale denominator for fees: 1,000,000 ppm = 100%.
pub const PPM_SCALE: u32 = 1_000_000;

/// A taker fee expressed in parts per million (1 ppm = 0.0001%).
///
/// A valid fee is strictly below [`PPM_SCALE`]; a fee of 100% or more is not
/// a legal rate and cannot be constructed. That guarantee is what makes the
/// taker-side gross-up division (`amount * PPM_SCALE / (PPM_SCALE - fee)`)
/// safe: the divisor [`complement`](Self::complement) is always positive.
///
/// Values read from an external fee table go through
/// [`normalize`](Self::normalize), which treats an out-of-range entry as
/// zero rather than propagating a misconfiguration into the swap math.
///
/// # Examples
///
/// ```
/// use tideswap_core::domain::FeePpm;
///
/// let fee = FeePpm::new(10_000).expect("1% is a valid fee");
/// assert_eq!(fee.get(), 10_000);
/// assert_eq!(fee.complement(), 990_000);
///
/// // A misconfigured table entry clamps to zero.
/// assert!(FeePpm::normalize(1_000_000).is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeePpm(u32);

impl FeePpm {
    /// Zero fee.
    pub const ZERO: Self = Self(0);

    /// Creates a validated fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidFee`] if `value` is 1,000,000 ppm
    /// (100%) or more.
    pub const fn new(value: u32) -> Result<Self> {
        if value >= PPM_SCALE {
            return Err(ExchangeError::InvalidFee("fee must be below 1000000 ppm"));
        }
        Ok(Self(value))
    }

    /// Normalizes a raw fee-table value: out-of-range entries become zero.
    ///
    /// This is the defensive clamp applied after fee resolution — an entry
    /// of 100% or more would mean the taker pays an unbounded gross-up, so
    /// it is treated as "no fee configured" instead.
    #[must_use]
    pub const fn normalize(value: u32) -> Self {
        if value >= PPM_SCALE {
            Self(0)
        } else {
            Self(value)
        }
    }

    /// Returns the raw ppm value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `PPM_SCALE - fee`, the taker's net share of the scale.
    ///
    /// Always positive, since construction rejects fees ≥ 100%.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        PPM_SCALE - self.0
    }
}

impl fmt::Display for FeePpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ppm", self.0)
    }
}
