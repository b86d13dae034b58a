//! # Tideswap Core
//!
//! Deterministic codec and swap arithmetic for a peer-to-peer token
//! exchange: encode and decode 32-byte holder [`Location`](domain::Location)s
//! and packed [`ExchangeRate`](domain::ExchangeRate)s, and compute swap
//! amounts for both market-maker and market-taker roles, fee included.
//!
//! The crate is a pure, stateless computation layer. The surrounding ledger
//! — balance bookkeeping, open orders, persistence, transport — is an
//! external collaborator reached only through the
//! [`FeeTable`](traits::FeeTable) seam and the two bit-exact wire formats
//! this crate defines.
//!
//! Rounding direction is the load-bearing design decision: every division
//! rounds in the pool's favor (payouts floor, receipts ceiling), and the
//! two taker-side fee formulas are deliberately asymmetric. Getting either
//! wrong is economically exploitable, so both are fixed by tests down to
//! exact unit values.
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use alloy_primitives::Address;
//! use tideswap_core::prelude::*;
//!
//! // A maker posts a rate: 3 units of token A per 1 unit of token B.
//! let rate = ExchangeRate::new(3, 1);
//! assert!(rate.is_active());
//!
//! // The ledger's fee table, with a 1% default fee.
//! let mut fees: HashMap<(Address, Address), u32> = HashMap::new();
//! fees.insert((Address::ZERO, Address::ZERO), 10_000);
//! let fee = fees.resolve_fee(Address::new([1u8; 20]), Address::new([2u8; 20]));
//!
//! // A taker sends exactly 100 A and learns the full fill breakdown.
//! let fill = market_order_exact_a(Amount::new(100), rate, fee).expect("active rate");
//! assert_eq!(fill.maker_b(), Amount::new(34)); // ceil(100 / 3)
//! assert_eq!(fill.taker_b(), Amount::new(35)); // grossed up by the fee
//!
//! // Holder identities travel as tagged 32-byte locations.
//! let holder = Location::external(Address::new([0x11; 20]));
//! assert!(holder.to_string().ends_with("external balance"));
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Location`](domain::Location), [`ExchangeRate`](domain::ExchangeRate), [`FeePpm`](domain::FeePpm), [`Amount`](domain::Amount), … |
//! | [`math`]   | Pure swap arithmetic: maker conversions, taker market orders, [`mul_div`](math::mul_div) |
//! | [`traits`] | Seams to the external ledger: [`FeeTable`](traits::FeeTable) |
//! | [`error`]  | [`ExchangeError`](error::ExchangeError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and functions |

pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod traits;
