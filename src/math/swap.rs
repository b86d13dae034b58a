//! Market-maker conversions over a posted exchange rate.
//!
//! These two functions derive the maker side of a swap directly from the
//! packed rate. Their rounding directions are opposite on purpose — both
//! favor the pool:
//!
//! - [`amount_a_from_amount_b`] floors: the pool never pays out more A than
//!   the exact ratio implies.
//! - [`amount_b_from_amount_a`] ceilings: the taker never pays less B than
//!   the exact ratio implies.
//!
//! The pair are approximate inverses but do **not** round-trip exactly, and
//! must not be "fixed" to — the one-unit gap is the pool's margin against
//! rounding extraction.

use crate::domain::{Amount, ExchangeRate, Rounding};
use crate::error::{ExchangeError, Result};

use super::mul_div;

/// Amount of token A the pool pays out for `amount_b` units of token B.
///
/// Computes `floor(amount_b * x1 / x2)`.
///
/// # Errors
///
/// - [`ExchangeError::InactiveRate`] if either rate component is zero.
/// - [`ExchangeError::Overflow`] if the result exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// use tideswap_core::domain::{Amount, ExchangeRate};
/// use tideswap_core::math::amount_a_from_amount_b;
///
/// let rate = ExchangeRate::new(3, 1);
/// assert_eq!(amount_a_from_amount_b(Amount::new(10), rate), Ok(Amount::new(30)));
/// ```
pub fn amount_a_from_amount_b(amount_b: Amount, rate: ExchangeRate) -> Result<Amount> {
    let (x1, x2) = rate.decode();
    if x1 == 0 || x2 == 0 {
        return Err(ExchangeError::InactiveRate);
    }
    mul_div(amount_b.get(), x1, x2, Rounding::Down).map(Amount::new)
}

/// Amount of token B the pool must be paid for `amount_a` units of token A.
///
/// Computes `ceil(amount_a * x2 / x1)`.
///
/// # Errors
///
/// - [`ExchangeError::InactiveRate`] if either rate component is zero.
/// - [`ExchangeError::Overflow`] if the result exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// use tideswap_core::domain::{Amount, ExchangeRate};
/// use tideswap_core::math::amount_b_from_amount_a;
///
/// let rate = ExchangeRate::new(3, 1);
/// // ceil(10 * 1 / 3) = 4
/// assert_eq!(amount_b_from_amount_a(Amount::new(10), rate), Ok(Amount::new(4)));
/// ```
pub fn amount_b_from_amount_a(amount_a: Amount, rate: ExchangeRate) -> Result<Amount> {
    let (x1, x2) = rate.decode();
    if x1 == 0 || x2 == 0 {
        return Err(ExchangeError::InactiveRate);
    }
    mul_div(amount_a.get(), x2, x1, Rounding::Up).map(Amount::new)
}
