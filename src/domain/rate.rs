//! Quoted exchange rates.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::ParseError;

/// Buy and sell quote for one currency at a point in time.
///
/// Values produced by [`RatePair::try_new`] are always strictly positive.
/// The zero pair returned by [`RatePair::default`] is the empty baseline used
/// before anything has been cached; it never comes out of a fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatePair {
    buy: Decimal,
    sell: Decimal,
}

impl RatePair {
    /// Create a validated rate pair.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NonPositive`] if either side is zero or negative.
    pub fn try_new(buy: Decimal, sell: Decimal) -> Result<Self, ParseError> {
        if buy <= Decimal::ZERO || sell <= Decimal::ZERO {
            return Err(ParseError::NonPositive {
                buy: buy.to_string(),
                sell: sell.to_string(),
            });
        }
        Ok(Self { buy, sell })
    }

    /// The zero baseline.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            buy: Decimal::ZERO,
            sell: Decimal::ZERO,
        }
    }

    #[must_use]
    pub fn buy(&self) -> Decimal {
        self.buy
    }

    #[must_use]
    pub fn sell(&self) -> Decimal {
        self.sell
    }

    /// True for the zero baseline.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buy.is_zero() && self.sell.is_zero()
    }
}

impl fmt::Display for RatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buy={} sell={}", self.buy, self.sell)
    }
}
