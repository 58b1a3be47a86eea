//! Rate extraction from the BROU portal markup.
//!
//! The board is the first table under `.portlet-body`. Its first body row is
//! the US dollar; the second cell holds the buy quote and the fourth the sell
//! quote, each wrapped in `div > p`.

use std::str::FromStr;

use rust_decimal::Decimal;
use scraper::{Html, Selector};

use crate::domain::RatePair;
use crate::error::ParseError;
use crate::port::RateExtractor;

const BUY_CELL: &str = ".portlet-body > table > tbody > tr:nth-child(1) > td:nth-child(2) > div > p";
const SELL_CELL: &str =
    ".portlet-body > table > tbody > tr:nth-child(1) > td:nth-child(4) > div > p";

/// Extracts the dollar row of the BROU rate board.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrouTableExtractor;

impl RateExtractor for BrouTableExtractor {
    fn extract_rates(&self, html: &str) -> Result<RatePair, ParseError> {
        let document = Html::parse_document(html);
        let buy = cell_text(&document, BUY_CELL)?;
        let sell = cell_text(&document, SELL_CELL)?;
        parse_pair(&buy, &sell)
    }
}

fn cell_text(document: &Html, selector: &str) -> Result<String, ParseError> {
    let parsed = Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;

    document
        .select(&parsed)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .ok_or_else(|| ParseError::MissingElement {
            selector: selector.to_string(),
        })
}

/// Validate both quotes, keeping the raw text for diagnostics on failure.
pub fn parse_pair(buy: &str, sell: &str) -> Result<RatePair, ParseError> {
    let number = |raw: &str| normalize(raw).and_then(|s| Decimal::from_str(&s).ok());

    match (number(buy), number(sell)) {
        (Some(b), Some(s)) => RatePair::try_new(b, s).map_err(|_| ParseError::NonPositive {
            buy: buy.to_string(),
            sell: sell.to_string(),
        }),
        _ => Err(ParseError::NotANumber {
            buy: buy.to_string(),
            sell: sell.to_string(),
        }),
    }
}

/// Trim and turn a comma decimal separator into a period.
///
/// With a comma present, periods may only appear before it as thousands
/// separators grouping exactly three digits (`1.234,50`). Any other mix of
/// separators yields `None`.
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let Some((integer, fraction)) = trimmed.split_once(',') else {
        return Some(trimmed.to_string());
    };

    let (sign, integer) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if !all_digits(fraction) || !thousands_grouped(integer) {
        return None;
    }

    Some(format!("{sign}{}.{fraction}", integer.replace('.', "")))
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn thousands_grouped(integer: &str) -> bool {
    let mut groups = integer.split('.');
    let lead_ok = groups
        .next()
        .is_some_and(|lead| all_digits(lead) && (!integer.contains('.') || lead.len() <= 3));
    lead_ok && groups.all(|group| group.len() == 3 && all_digits(group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::page::{brou_page, redesigned_page};
    use rust_decimal_macros::dec;

    #[test]
    fn extracts_first_row_buy_and_sell() {
        let html = brou_page("41,10", "43,60");

        let pair = BrouTableExtractor.extract_rates(&html).unwrap();

        assert_eq!(pair.buy(), dec!(41.10));
        assert_eq!(pair.sell(), dec!(43.60));
        assert_eq!(pair.buy().to_string(), "41.10");
    }

    #[test]
    fn non_numeric_sell_is_a_parse_error() {
        let html = brou_page("41,10", "N/A");

        let err = BrouTableExtractor.extract_rates(&html).unwrap_err();

        assert_eq!(
            err,
            ParseError::NotANumber {
                buy: "41,10".into(),
                sell: "N/A".into(),
            }
        );
    }

    #[test]
    fn empty_cell_is_a_parse_error() {
        let html = brou_page("", "43,60");

        assert!(matches!(
            BrouTableExtractor.extract_rates(&html),
            Err(ParseError::NotANumber { .. })
        ));
    }

    #[test]
    fn missing_table_is_a_parse_error() {
        let err = BrouTableExtractor
            .extract_rates(&redesigned_page())
            .unwrap_err();

        assert!(matches!(err, ParseError::MissingElement { .. }));
    }

    #[test]
    fn zero_quote_is_rejected_with_raw_text() {
        let html = brou_page("0,00", "43,60");

        let err = BrouTableExtractor.extract_rates(&html).unwrap_err();

        assert_eq!(
            err,
            ParseError::NonPositive {
                buy: "0,00".into(),
                sell: "43,60".into(),
            }
        );
    }

    #[test]
    fn normalize_handles_separators() {
        assert_eq!(normalize("  41,10 \n").as_deref(), Some("41.10"));
        assert_eq!(normalize("41.10").as_deref(), Some("41.10"));
        assert_eq!(normalize("1.234,50").as_deref(), Some("1234.50"));
        assert_eq!(normalize("1.234.567,5").as_deref(), Some("1234567.5"));
    }

    #[test]
    fn normalize_rejects_mixed_separators() {
        assert_eq!(normalize("1,234.50"), None);
        assert_eq!(normalize("12.34,50"), None);
        assert_eq!(normalize("1234.567,50"), None);
        assert_eq!(normalize("41,10,5"), None);
        assert_eq!(normalize("41,"), None);
    }

    #[test]
    fn period_decimal_with_comma_thousands_is_not_a_number() {
        let err = parse_pair("1,234.50", "43,20").unwrap_err();

        assert_eq!(
            err,
            ParseError::NotANumber {
                buy: "1,234.50".into(),
                sell: "43,20".into(),
            }
        );
    }

    #[test]
    fn parse_pair_accepts_period_decimals() {
        let pair = parse_pair("41.10", " 43.20 ").unwrap();
        assert_eq!(pair.sell(), dec!(43.20));
    }
}
