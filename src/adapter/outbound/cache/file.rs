//! JSON file rate cache.
//!
//! The record is a small object holding the last notified pair:
//!
//! ```json
//! { "buy": "41.10", "sell": "43.60" }
//! ```
//!
//! Files written by earlier releases used `askRate`/`bidRate`; both spellings
//! are accepted on load.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::RatePair;
use crate::error::{PersistError, Result};
use crate::port::RateCache;

#[derive(Debug, Serialize, Deserialize)]
struct CacheRecord {
    #[serde(alias = "askRate")]
    buy: Decimal,
    #[serde(alias = "bidRate")]
    sell: Decimal,
}

/// Rate cache backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path the next save is staged in (`<path>.tmp`).
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> PersistError {
        PersistError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RateCache for JsonFileCache {
    fn load(&self) -> RatePair {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No rate cache found, starting from empty baseline");
                return RatePair::empty();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read rate cache, starting from empty baseline");
                return RatePair::empty();
            }
        };

        let record: CacheRecord = match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Malformed rate cache, starting from empty baseline");
                return RatePair::empty();
            }
        };

        match RatePair::try_new(record.buy, record.sell) {
            Ok(pair) => {
                debug!(path = %self.path.display(), cached = %pair, "Rate cache loaded");
                pair
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Invalid rate cache, starting from empty baseline");
                RatePair::empty()
            }
        }
    }

    /// Write to a temp file, sync, then rename over the cache.
    fn save(&self, pair: &RatePair) -> Result<()> {
        let record = CacheRecord {
            buy: pair.buy(),
            sell: pair.sell(),
        };
        let json = serde_json::to_string_pretty(&record).map_err(PersistError::from)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let temp_path = self.temp_path();
        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            self.io_error(e)
        };

        let mut file = fs::File::create(&temp_path).map_err(|e| self.io_error(e))?;
        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testkit::pair;
    use rust_decimal_macros::dec;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("cache.json"));
        let quote = pair(dec!(41.10), dec!(43.60));

        cache.save(&quote).unwrap();

        let loaded = cache.load();
        assert_eq!(loaded, quote);
        assert_eq!(loaded.buy().to_string(), "41.10");
    }

    #[test]
    fn save_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let cache = JsonFileCache::new(&path);

        cache.save(&pair(dec!(41.10), dec!(43.60))).unwrap();
        cache.save(&pair(dec!(41.50), dec!(44.00))).unwrap();

        assert_eq!(cache.load(), pair(dec!(41.50), dec!(44.00)));
        assert!(!dir.path().join("cache.json.tmp").exists());
    }

    #[test]
    fn tmp_named_cache_is_still_staged_separately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.tmp");
        let cache = JsonFileCache::new(&path);

        assert_eq!(cache.temp_path(), dir.path().join("rates.tmp.tmp"));

        cache.save(&pair(dec!(41.10), dec!(43.60))).unwrap();

        assert_eq!(cache.load(), pair(dec!(41.10), dec!(43.60)));
        assert!(!dir.path().join("rates.tmp.tmp").exists());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("state").join("cache.json"));

        cache.save(&pair(dec!(41.10), dec!(43.60))).unwrap();

        assert_eq!(cache.load(), pair(dec!(41.10), dec!(43.60)));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("absent.json"));

        assert!(cache.load().is_empty());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(JsonFileCache::new(&path).load().is_empty());
    }

    #[test]
    fn empty_object_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "{}").unwrap();

        assert!(JsonFileCache::new(&path).load().is_empty());
    }

    #[test]
    fn legacy_keys_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(
            &path,
            "{\n    \"askRate\": \"41.10\",\n    \"bidRate\": \"43.60\"\n}",
        )
        .unwrap();

        assert_eq!(
            JsonFileCache::new(&path).load(),
            pair(dec!(41.10), dec!(43.60))
        );
    }

    #[test]
    fn unwritable_location_is_persist_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let cache = JsonFileCache::new(blocker.join("cache.json"));

        let err = cache.save(&pair(dec!(41.10), dec!(43.60))).unwrap_err();

        assert!(matches!(err, Error::Persist(PersistError::Io { .. })));
    }
}
