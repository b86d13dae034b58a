//! Explicit rounding direction for arithmetic operations.

/// Specifies the rounding direction for narrowing division.
///
/// Every division in the swap math takes an explicit `Rounding` parameter so
/// the direction of precision loss is visible at the call site. The
/// convention is pool-favorable throughout:
///
/// | Quantity | Direction |
/// |----------|-----------|
/// | Amount the pool pays out | [`Rounding::Down`] |
/// | Amount the pool is paid | [`Rounding::Up`] |
/// | Fee deducted from the taker | [`Rounding::Down`] |
///
/// # Examples
///
/// ```
/// use tideswap_core::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
