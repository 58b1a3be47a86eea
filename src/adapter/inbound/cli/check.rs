//! `check`: one dry tick against the live board.

use crate::application::ChangeDetector;
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_cache, build_source};
use crate::infrastructure::config::settings::Config;
use crate::port::{RateCache, RateSource};

/// Fetch the board once and report against the cache. Sends and writes nothing.
pub async fn execute(config: &Config) -> Result<()> {
    let source = build_source(config);
    let cached = build_cache(config).load();
    let current = source.fetch().await?;
    let detector = ChangeDetector::new(config.detector.threshold);

    println!("Source:    {}", source.url());
    println!("Current:   {current}");
    if cached.is_empty() {
        println!("Cached:    (none)");
    } else {
        println!("Cached:    {cached}");
    }

    match detector.detect(&current, &cached) {
        Some(report) => println!(
            "Verdict:   would notify (buy {:+}, sell {:+})",
            report.buy_delta, report.sell_delta
        ),
        None => println!(
            "Verdict:   no change at threshold {}",
            detector.threshold()
        ),
    }
    Ok(())
}
