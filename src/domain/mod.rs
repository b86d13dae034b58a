//! Fundamental domain value types of the exchange core.
//!
//! This module contains the value types the codec and swap math operate on:
//! holder locations, packed exchange rates, fee rates, raw amounts, and
//! market-order fill breakdowns. All types use newtypes with validated
//! constructors to enforce invariants.

mod amount;
mod decimals;
mod fee;
mod fill;
mod location;
mod rate;
mod rounding;

pub use amount::Amount;
pub use decimals::Decimals;
pub use fee::{FeePpm, PPM_SCALE};
pub use fill::{ExactAFill, ExactBFill};
pub use location::{Location, LocationKind};
pub use rate::ExchangeRate;
pub use rounding::Rounding;
