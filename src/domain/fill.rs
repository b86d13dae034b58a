//! Market-order fill breakdowns.

use core::fmt;

use super::Amount;

/// Outcome of a market order where the taker fixed the amount of token A
/// they send ([`market_order_exact_a`](crate::math::market_order_exact_a)).
///
/// The maker-facing amounts describe what moves against the posted rate;
/// `taker_b` is the maker amount grossed up by the fee, so
/// `taker_b >= maker_b` and `fee_b <= taker_b` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct ExactAFill {
    maker_a: Amount,
    maker_b: Amount,
    taker_b: Amount,
    fee_b: Amount,
}

impl ExactAFill {
    pub(crate) const fn new(
        maker_a: Amount,
        maker_b: Amount,
        taker_b: Amount,
        fee_b: Amount,
    ) -> Self {
        Self {
            maker_a,
            maker_b,
            taker_b,
            fee_b,
        }
    }

    /// Amount of token A the maker side pays out (equals the taker's input).
    pub const fn maker_a(&self) -> Amount {
        self.maker_a
    }

    /// Amount of token B the maker side receives, net of fee.
    pub const fn maker_b(&self) -> Amount {
        self.maker_b
    }

    /// Total amount of token B the taker pays, fee included.
    pub const fn taker_b(&self) -> Amount {
        self.taker_b
    }

    /// Fee deducted from the taker's token B payment.
    pub const fn fee_b(&self) -> Amount {
        self.fee_b
    }
}

impl fmt::Display for ExactAFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExactAFill(maker_a={}, maker_b={}, taker_b={}, fee_b={})",
            self.maker_a, self.maker_b, self.taker_b, self.fee_b
        )
    }
}

/// Outcome of a market order where the taker fixed the amount of token B
/// they pay ([`market_order_exact_b`](crate::math::market_order_exact_b)).
///
/// The fee is netted out of the taker's payment before the rate is applied,
/// so `maker_b + fee_b` equals the taker's input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct ExactBFill {
    maker_a: Amount,
    taker_a: Amount,
    maker_b: Amount,
    fee_b: Amount,
}

impl ExactBFill {
    pub(crate) const fn new(
        maker_a: Amount,
        taker_a: Amount,
        maker_b: Amount,
        fee_b: Amount,
    ) -> Self {
        Self {
            maker_a,
            taker_a,
            maker_b,
            fee_b,
        }
    }

    /// Amount of token A the maker side pays out.
    pub const fn maker_a(&self) -> Amount {
        self.maker_a
    }

    /// Amount of token A the taker receives (equals the maker's payout).
    pub const fn taker_a(&self) -> Amount {
        self.taker_a
    }

    /// Amount of token B the maker side receives, net of fee.
    pub const fn maker_b(&self) -> Amount {
        self.maker_b
    }

    /// Fee deducted from the taker's token B payment.
    pub const fn fee_b(&self) -> Amount {
        self.fee_b
    }
}

impl fmt::Display for ExactBFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExactBFill(maker_a={}, taker_a={}, maker_b={}, fee_b={})",
            self.maker_a, self.taker_a, self.maker_b, self.fee_b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_a_accessors() {
        let fill = ExactAFill::new(
            Amount::new(100),
            Amount::new(100),
            Amount::new(102),
            Amount::new(1),
        );
        assert_eq!(fill.maker_a(), Amount::new(100));
        assert_eq!(fill.maker_b(), Amount::new(100));
        assert_eq!(fill.taker_b(), Amount::new(102));
        assert_eq!(fill.fee_b(), Amount::new(1));
    }

    #[test]
    fn exact_b_accessors() {
        let fill = ExactBFill::new(
            Amount::new(99),
            Amount::new(99),
            Amount::new(99),
            Amount::new(1),
        );
        assert_eq!(fill.maker_a(), Amount::new(99));
        assert_eq!(fill.taker_a(), Amount::new(99));
        assert_eq!(fill.maker_b(), Amount::new(99));
        assert_eq!(fill.fee_b(), Amount::new(1));
    }

    #[test]
    fn exact_a_display() {
        let fill = ExactAFill::new(
            Amount::new(1),
            Amount::new(2),
            Amount::new(3),
            Amount::new(4),
        );
        assert_eq!(
            fill.to_string(),
            "ExactAFill(maker_a=1, maker_b=2, taker_b=3, fee_b=4)"
        );
    }

    #[test]
    fn exact_b_display() {
        let fill = ExactBFill::new(
            Amount::new(1),
            Amount::new(1),
            Amount::new(2),
            Amount::new(3),
        );
        assert_eq!(
            fill.to_string(),
            "ExactBFill(maker_a=1, taker_a=1, maker_b=2, fee_b=3)"
        );
    }
}
