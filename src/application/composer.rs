//! Builds notification payloads from change reports.

use std::fmt::Display;

use chrono::{DateTime, Local, Locale, TimeZone};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{ChangeReport, Direction, NotificationPayload, RateLine};

/// Default long date pattern, Spanish style ("19 de octubre de 2026 14:05").
pub const DEFAULT_DATE_FORMAT: &str = "%-d de %B de %Y %-H:%M";

/// Turns a [`ChangeReport`] into a [`NotificationPayload`].
#[derive(Debug, Clone)]
pub struct NotificationComposer {
    locale: Locale,
    date_format: String,
}

impl NotificationComposer {
    /// `date_format` must already be a valid strftime pattern.
    #[must_use]
    pub fn new(locale: Locale, date_format: impl Into<String>) -> Self {
        Self {
            locale,
            date_format: date_format.into(),
        }
    }

    /// Compose using the local wall clock.
    #[must_use]
    pub fn compose(&self, report: &ChangeReport) -> NotificationPayload {
        self.compose_at(report, &Local::now())
    }

    /// Compose for a fixed instant.
    #[must_use]
    pub fn compose_at<Tz>(&self, report: &ChangeReport, at: &DateTime<Tz>) -> NotificationPayload
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        NotificationPayload {
            date: at
                .format_localized(&self.date_format, self.locale)
                .to_string(),
            buy: line(report.buy_delta, report.current.buy()),
            sell: line(report.sell_delta, report.current.sell()),
        }
    }
}

impl Default for NotificationComposer {
    fn default() -> Self {
        Self::new(Locale::es_ES, DEFAULT_DATE_FORMAT)
    }
}

fn line(delta: Decimal, rate: Decimal) -> RateLine {
    RateLine {
        direction: Direction::of(delta),
        delta: format_delta(delta),
        rate: rate.to_string(),
    }
}

/// Two decimals, half away from zero. A negative delta that rounds to zero
/// keeps its sign so the text agrees with [`Direction::Down`].
fn format_delta(delta: Decimal) -> String {
    let rounded = delta
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let sign = if delta.is_sign_negative() && !delta.is_zero() { "-" } else { "" };
    format!("{sign}{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RatePair;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn report(current: (Decimal, Decimal), previous: (Decimal, Decimal)) -> ChangeReport {
        ChangeReport::between(
            RatePair::try_new(current.0, current.1).unwrap(),
            RatePair::try_new(previous.0, previous.1).unwrap(),
        )
    }

    #[test]
    fn directions_and_deltas() {
        let composer = NotificationComposer::default();
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 0).unwrap();
        let report = report((dec!(40.98), dec!(43.20)), (dec!(41.10), dec!(43.20)));

        let payload = composer.compose_at(&report, &at);

        assert_eq!(payload.buy.direction, Direction::Down);
        assert_eq!(payload.buy.delta, "-0.12");
        assert_eq!(payload.sell.direction, Direction::Flat);
        assert_eq!(payload.sell.delta, "0.00");
    }

    #[test]
    fn absolute_rates_pass_through() {
        let composer = NotificationComposer::default();
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 0).unwrap();
        let report = report((dec!(41.10), dec!(43.30)), (dec!(41.00), dec!(43.20)));

        let payload = composer.compose_at(&report, &at);

        assert_eq!(payload.buy.rate, "41.10");
        assert_eq!(payload.sell.rate, "43.30");
        assert_eq!(payload.buy.delta, "0.10");
        assert_eq!(payload.sell.direction, Direction::Up);
    }

    #[test]
    fn date_uses_locale() {
        let composer = NotificationComposer::default();
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 0).unwrap();
        let report = report((dec!(41.10), dec!(43.30)), (dec!(41.00), dec!(43.20)));

        let payload = composer.compose_at(&report, &at);

        assert_eq!(payload.date, "19 de octubre de 2026 14:05");
    }

    #[test]
    fn delta_rounding_pads_and_rounds() {
        assert_eq!(format_delta(dec!(0.1)), "0.10");
        assert_eq!(format_delta(dec!(0.125)), "0.13");
        assert_eq!(format_delta(dec!(-0.125)), "-0.13");
        assert_eq!(format_delta(dec!(41.1)), "41.10");
        assert_eq!(format_delta(dec!(0)), "0.00");
    }

    #[test]
    fn sub_cent_drop_keeps_its_sign() {
        let sell = line(dec!(-0.001), dec!(43.199));

        assert_eq!(sell.direction, Direction::Down);
        assert_eq!(sell.delta, "-0.00");
        assert_eq!(format_delta(dec!(0.001)), "0.00");
    }
}
