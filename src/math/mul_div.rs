//! Widening multiply-divide with explicit rounding.

use alloy_primitives::U256;

use crate::domain::Rounding;
use crate::error::{ExchangeError, Result};

/// Computes `a * b / divisor` with the product carried at 256-bit width.
///
/// The 128×128-bit product cannot overflow a `U256`, so the only failure
/// modes are a zero divisor and a quotient that no longer fits 128 bits.
/// Ceiling division is floor plus one when the remainder is non-zero.
///
/// This is the single arithmetic primitive behind all swap math; no caller
/// multiplies amounts at narrow width.
///
/// # Errors
///
/// - [`ExchangeError::DivisionByZero`] if `divisor` is zero.
/// - [`ExchangeError::Overflow`] if the quotient exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// use tideswap_core::domain::Rounding;
/// use tideswap_core::math::mul_div;
///
/// assert_eq!(mul_div(10, 1, 3, Rounding::Down), Ok(3));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
/// ```
pub fn mul_div(a: u128, b: u128, divisor: u128, rounding: Rounding) -> Result<u128> {
    if divisor == 0 {
        return Err(ExchangeError::DivisionByZero);
    }
    let product = U256::from(a) * U256::from(b);
    let wide_divisor = U256::from(divisor);
    let mut quotient = product / wide_divisor;
    if rounding.is_up() && product % wide_divisor != U256::ZERO {
        quotient += U256::from(1u8);
    }
    if quotient.bit_len() > 128 {
        return Err(ExchangeError::Overflow("quotient exceeds 128 bits"));
    }
    Ok(quotient.to::<u128>())
}
