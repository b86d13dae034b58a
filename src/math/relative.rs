//! Informational per-unit ratios across differing token decimals.

use alloy_primitives::U256;

use crate::domain::{Amount, Decimals};
use crate::error::{ExchangeError, Result};

/// Computes the two per-unit ratios between amounts of differently scaled
/// tokens: `(floor(amount_a * 10^decimals_b / amount_b),
/// floor(amount_b * 10^decimals_a / amount_a))`.
///
/// Purely informational — these display values are never used to move
/// funds, which is why plain floor division is acceptable here.
///
/// # Errors
///
/// - [`ExchangeError::DivisionByZero`] if either amount is zero. This is a
///   caller precondition; it is reported, never silently mapped to zero.
/// - [`ExchangeError::Overflow`] if a product exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use tideswap_core::domain::{Amount, Decimals};
/// use tideswap_core::math::relative_amounts;
///
/// let (a_per_b, b_per_a) = relative_amounts(
///     Amount::new(100),
///     Decimals::new(18),
///     Amount::new(200),
///     Decimals::new(6),
/// )
/// .expect("non-zero amounts");
/// // floor(100 * 10^6 / 200) and floor(200 * 10^18 / 100)
/// assert_eq!(a_per_b, U256::from(500_000u64));
/// assert_eq!(b_per_a, U256::from(2_000_000_000_000_000_000u128));
/// ```
pub fn relative_amounts(
    amount_a: Amount,
    decimals_a: Decimals,
    amount_b: Amount,
    decimals_b: Decimals,
) -> Result<(U256, U256)> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(ExchangeError::DivisionByZero);
    }
    let a_per_b = scaled_ratio(amount_a, decimals_b, amount_b)?;
    let b_per_a = scaled_ratio(amount_b, decimals_a, amount_a)?;
    Ok((a_per_b, b_per_a))
}

/// `floor(amount * 10^decimals / divisor)` at 256-bit width.
fn scaled_ratio(amount: Amount, decimals: Decimals, divisor: Amount) -> Result<U256> {
    let product = U256::from(amount.get())
        .checked_mul(decimals.unit_amount()?)
        .ok_or(ExchangeError::Overflow(
            "relative amount product exceeds 256 bits",
        ))?;
    Ok(product / U256::from(divisor.get()))
}
