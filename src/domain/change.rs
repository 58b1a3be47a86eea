//! Detected rate movements.

use rust_decimal::Decimal;

use super::rate::RatePair;

/// Sign of a rate movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    /// Classify a delta strictly by its sign.
    #[must_use]
    pub fn of(delta: Decimal) -> Self {
        if delta > Decimal::ZERO {
            Self::Up
        } else if delta < Decimal::ZERO {
            Self::Down
        } else {
            Self::Flat
        }
    }
}

/// A movement large enough to notify about.
///
/// Deltas are `current - previous` for each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    pub buy_delta: Decimal,
    pub sell_delta: Decimal,
    pub current: RatePair,
    pub previous: RatePair,
}

impl ChangeReport {
    #[must_use]
    pub fn between(current: RatePair, previous: RatePair) -> Self {
        Self {
            buy_delta: current.buy() - previous.buy(),
            sell_delta: current.sell() - previous.sell(),
            current,
            previous,
        }
    }

    #[must_use]
    pub fn buy_direction(&self) -> Direction {
        Direction::of(self.buy_delta)
    }

    #[must_use]
    pub fn sell_direction(&self) -> Direction {
        Direction::of(self.sell_delta)
    }
}
