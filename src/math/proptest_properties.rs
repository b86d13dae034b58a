//! Property-based tests using `proptest` for codec and swap-math invariants.
//!
//! Covers the economically load-bearing properties:
//!
//! 1. **Rate round-trip** — `decode(new(x1, x2)) == (x1, x2)` for all pairs.
//! 2. **Pool-favoring rounding** — B→A→B never returns more B than put in.
//! 3. **Ceiling dominance** — `amount_b_from_amount_a >= ` the exact floor.
//! 4. **Taker coverage** — the taker's net payment always covers the maker.
//! 5. **Exact-B conservation** — `maker_b + fee_b` equals the taker input.
//! 6. **Location describe totality** — `describe` never panics and never
//!    mis-tags malformed bytes.

use proptest::prelude::*;

use alloy_primitives::U256;

use crate::domain::{Amount, ExchangeRate, FeePpm, Location, LocationKind};
use crate::math::{
    amount_a_from_amount_b, amount_b_from_amount_a, market_order_exact_a, market_order_exact_b,
};

proptest! {
    // -- Rate codec ---------------------------------------------------------

    #[test]
    fn rate_round_trips(x1 in any::<u128>(), x2 in any::<u128>()) {
        let rate = ExchangeRate::new(x1, x2);
        prop_assert_eq!(rate.decode(), (x1, x2));
        prop_assert_eq!(ExchangeRate::from_raw(rate.raw()), rate);
    }

    #[test]
    fn raw_words_decode_totally(raw in any::<[u8; 32]>()) {
        let rate = ExchangeRate::from_raw(U256::from_be_bytes(raw));
        let (x1, x2) = rate.decode();
        prop_assert_eq!(rate.is_active(), x1 > 0 && x2 > 0);
    }

    // -- Maker rounding -----------------------------------------------------

    #[test]
    fn round_trip_never_mints_b(
        amount_b in 0u128..1u128 << 64,
        x1 in 1u128..1u128 << 64,
        x2 in 1u128..1u128 << 64,
    ) {
        // floor then ceil: the B recovered for the A paid out never exceeds
        // the B originally quoted.
        let rate = ExchangeRate::new(x1, x2);
        let a = amount_a_from_amount_b(Amount::new(amount_b), rate).unwrap();
        let b = amount_b_from_amount_a(a, rate).unwrap();
        prop_assert!(b.get() <= amount_b);
    }

    #[test]
    fn ceiling_at_least_exact(
        amount_a in 0u128..1u128 << 64,
        x1 in 1u128..1u128 << 64,
        x2 in 1u128..1u128 << 64,
    ) {
        let rate = ExchangeRate::new(x1, x2);
        let b = amount_b_from_amount_a(Amount::new(amount_a), rate).unwrap();
        // The ceiling result is never below the exact quotient's floor.
        let exact_floor = (U256::from(amount_a) * U256::from(x2)) / U256::from(x1);
        prop_assert!(U256::from(b.get()) >= exact_floor);
    }

    #[test]
    fn inactive_rates_always_rejected(
        amount in any::<u128>(),
        component in any::<u128>(),
        x1_is_zero in any::<bool>(),
    ) {
        let rate = if x1_is_zero {
            ExchangeRate::new(0, component)
        } else {
            ExchangeRate::new(component, 0)
        };
        prop_assert!(amount_a_from_amount_b(Amount::new(amount), rate).is_err());
        prop_assert!(amount_b_from_amount_a(Amount::new(amount), rate).is_err());
    }

    // -- Taker fee flow -----------------------------------------------------

    #[test]
    fn taker_net_payment_covers_maker(
        amount_a in 0u128..1u128 << 64,
        x1 in 1u128..1u128 << 32,
        x2 in 1u128..1u128 << 32,
        fee_raw in 0u32..1_000_000,
    ) {
        let rate = ExchangeRate::new(x1, x2);
        let fee = FeePpm::new(fee_raw).unwrap();
        let fill = market_order_exact_a(Amount::new(amount_a), rate, fee).unwrap();
        prop_assert_eq!(fill.maker_a(), Amount::new(amount_a));
        prop_assert!(fill.taker_b() >= fill.maker_b());
        prop_assert!(
            fill.taker_b().get() - fill.fee_b().get() >= fill.maker_b().get()
        );
    }

    #[test]
    fn exact_b_conserves_taker_payment(
        amount_b in 0u128..1u128 << 64,
        x1 in 1u128..1u128 << 32,
        x2 in 1u128..1u128 << 32,
        fee_raw in 0u32..1_000_000,
    ) {
        let rate = ExchangeRate::new(x1, x2);
        let fee = FeePpm::new(fee_raw).unwrap();
        let fill = market_order_exact_b(Amount::new(amount_b), rate, fee).unwrap();
        prop_assert_eq!(fill.maker_b().get() + fill.fee_b().get(), amount_b);
        prop_assert_eq!(fill.taker_a(), fill.maker_a());
    }

    // -- Location codec -----------------------------------------------------

    #[test]
    fn describe_is_total(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        // Never panics, always yields one of the four description shapes.
        let description = Location::describe(&bytes);
        prop_assert!(
            description.ends_with("external balance")
                || description.ends_with("internal balance")
                || description.starts_with("poolID ")
                || description == "invalid location"
        );
    }

    #[test]
    fn dirty_reserved_bytes_never_mistag(
        address in any::<[u8; 20]>(),
        dirty_index in 1usize..12,
        dirty_value in 1u8..=u8::MAX,
        internal in any::<bool>(),
    ) {
        let tag = if internal { 0x02 } else { 0x01 };
        let mut bytes = [0u8; 32];
        bytes[0] = tag;
        bytes[12..].copy_from_slice(&address);
        bytes[dirty_index] = dirty_value;
        prop_assert_eq!(
            Location::from_bytes(bytes).classify(),
            LocationKind::Invalid
        );
    }

    #[test]
    fn pool_ids_round_trip(id_bytes in any::<[u8; 31]>()) {
        let mut wide = [0u8; 32];
        wide[1..].copy_from_slice(&id_bytes);
        let id = U256::from_be_bytes(wide);
        let loc = Location::pool(id).unwrap();
        prop_assert_eq!(loc.classify(), LocationKind::Pool(id));
        prop_assert_eq!(Location::describe(&loc.as_bytes()), format!("poolID {id}"));
    }
}
