//! Pure swap arithmetic over packed exchange rates.
//!
//! Everything here is a stateless function of its arguments: the
//! [`mul_div`] widening primitive, the maker-side conversions
//! ([`amount_a_from_amount_b`], [`amount_b_from_amount_a`]), the taker-side
//! market orders ([`market_order_exact_a`], [`market_order_exact_b`]), and
//! the informational [`relative_amounts`] helper.
//!
//! # Width discipline
//!
//! Every multiplication is carried at 256-bit width before any narrowing
//! division. No function truncates silently; a result that does not fit
//! 128 bits is an [`Overflow`](crate::error::ExchangeError::Overflow) error.

mod mul_div;
mod order;
mod relative;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use mul_div::mul_div;
pub use order::{market_order_exact_a, market_order_exact_b};
pub use relative::relative_amounts;
pub use swap::{amount_a_from_amount_b, amount_b_from_amount_a};
