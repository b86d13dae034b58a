//! Market-taker order computation.
//!
//! A taker fills against a maker's posted rate and pays the per-pair fee in
//! token B. The two entry points model the two ways a taker can fix their
//! order:
//!
//! - [`market_order_exact_a`] — the taker fixes the amount of token A they
//!   send; the fee is grossed up *on top of* the maker-facing B amount.
//! - [`market_order_exact_b`] — the taker fixes the amount of token B they
//!   pay; the fee is netted *out of* that payment before the rate applies.
//!
//! The two fee formulas are deliberately asymmetric. Rounding the gross-up
//! upward and the fee share downward in one direction, versus netting first
//! in the other, each leave the residual unit with the pool; unifying them
//! into one shared formula would change who absorbs it.

use crate::domain::{Amount, ExactAFill, ExactBFill, ExchangeRate, FeePpm, Rounding, PPM_SCALE};
use crate::error::Result;

use super::mul_div;
use super::swap::{amount_a_from_amount_b, amount_b_from_amount_a};

/// Fills a market order where the taker sends exactly `amount_a` of token A.
///
/// The maker pays out `amount_a`, receives
/// `maker_b = ceil(amount_a * x2 / x1)`, and the taker's total payment is
/// grossed up to `taker_b = ceil(maker_b * PPM_SCALE / (PPM_SCALE - fee))`
/// with `fee_b = floor(taker_b * fee / PPM_SCALE)` of it going to the fee.
///
/// # Errors
///
/// - [`ExchangeError::InactiveRate`](crate::error::ExchangeError::InactiveRate)
///   if either rate component is zero.
/// - [`ExchangeError::Overflow`](crate::error::ExchangeError::Overflow) if an
///   intermediate amount exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// use tideswap_core::domain::{Amount, ExchangeRate, FeePpm};
/// use tideswap_core::math::market_order_exact_a;
///
/// let rate = ExchangeRate::new(1, 1);
/// let fee = FeePpm::new(10_000).expect("1%");
/// let fill = market_order_exact_a(Amount::new(100), rate, fee).expect("fill");
/// assert_eq!(fill.maker_b(), Amount::new(100));
/// assert_eq!(fill.taker_b(), Amount::new(102));
/// assert_eq!(fill.fee_b(), Amount::new(1));
/// ```
pub fn market_order_exact_a(
    amount_a: Amount,
    rate: ExchangeRate,
    fee: FeePpm,
) -> Result<ExactAFill> {
    let maker_a = amount_a;
    let maker_b = amount_b_from_amount_a(maker_a, rate)?;
    // complement() is positive by FeePpm construction, so the gross-up
    // divisor can never be zero.
    let taker_b = mul_div(
        maker_b.get(),
        u128::from(PPM_SCALE),
        u128::from(fee.complement()),
        Rounding::Up,
    )
    .map(Amount::new)?;
    let fee_b = mul_div(
        taker_b.get(),
        u128::from(fee.get()),
        u128::from(PPM_SCALE),
        Rounding::Down,
    )
    .map(Amount::new)?;
    Ok(ExactAFill::new(maker_a, maker_b, taker_b, fee_b))
}

/// Fills a market order where the taker pays exactly `amount_b` of token B.
///
/// The fee `fee_b = floor(amount_b * fee / PPM_SCALE)` is netted out first,
/// the maker receives the remainder `maker_b = amount_b - fee_b`, and the
/// taker gets back `maker_a = floor(maker_b * x1 / x2)`.
///
/// # Errors
///
/// - [`ExchangeError::InactiveRate`](crate::error::ExchangeError::InactiveRate)
///   if either rate component is zero.
/// - [`ExchangeError::Overflow`](crate::error::ExchangeError::Overflow) if an
///   intermediate amount exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// use tideswap_core::domain::{Amount, ExchangeRate, FeePpm};
/// use tideswap_core::math::market_order_exact_b;
///
/// let rate = ExchangeRate::new(1, 1);
/// let fee = FeePpm::new(10_000).expect("1%");
/// let fill = market_order_exact_b(Amount::new(100), rate, fee).expect("fill");
/// assert_eq!(fill.fee_b(), Amount::new(1));
/// assert_eq!(fill.maker_b(), Amount::new(99));
/// assert_eq!(fill.taker_a(), Amount::new(99));
/// ```
pub fn market_order_exact_b(
    amount_b: Amount,
    rate: ExchangeRate,
    fee: FeePpm,
) -> Result<ExactBFill> {
    let fee_b = mul_div(
        amount_b.get(),
        u128::from(fee.get()),
        u128::from(PPM_SCALE),
        Rounding::Down,
    )
    .map(Amount::new)?;
    // fee < PPM_SCALE guarantees fee_b <= amount_b.
    let maker_b = Amount::new(amount_b.get() - fee_b.get());
    let maker_a = amount_a_from_amount_b(maker_b, rate)?;
    Ok(ExactBFill::new(maker_a, maker_a, maker_b, fee_b))
}
