//! Threshold-based change detection.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{ChangeReport, RatePair};

/// Smallest absolute move, in currency units, worth notifying.
pub const DEFAULT_THRESHOLD: Decimal = dec!(0.05);

/// Compares a fresh quote with the cached baseline.
#[derive(Debug, Clone, Copy)]
pub struct ChangeDetector {
    threshold: Decimal,
}

impl ChangeDetector {
    #[must_use]
    pub fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Return a report when either side moved by at least the threshold.
    ///
    /// An empty baseline compares as zero, so the first real quote always
    /// reports.
    #[must_use]
    pub fn detect(&self, current: &RatePair, previous: &RatePair) -> Option<ChangeReport> {
        let report = ChangeReport::between(*current, *previous);
        let moved =
            report.buy_delta.abs() >= self.threshold || report.sell_delta.abs() >= self.threshold;
        moved.then_some(report)
    }
}

impl Default for ChangeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
