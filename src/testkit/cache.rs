//! In-memory rate cache.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::RatePair;
use crate::error::{PersistError, Result};
use crate::port::RateCache;

#[derive(Clone, Default)]
pub struct MemoryCache {
    pair: Arc<Mutex<RatePair>>,
    saves: Arc<Mutex<usize>>,
    read_only: Arc<Mutex<bool>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(pair: RatePair) -> Self {
        let cache = Self::default();
        *cache.pair.lock() = pair;
        cache
    }

    /// Make every subsequent save fail.
    pub fn set_read_only(&self, read_only: bool) {
        *self.read_only.lock() = read_only;
    }

    pub fn stored(&self) -> RatePair {
        *self.pair.lock()
    }

    pub fn saves(&self) -> usize {
        *self.saves.lock()
    }
}

impl RateCache for MemoryCache {
    fn load(&self) -> RatePair {
        *self.pair.lock()
    }

    fn save(&self, pair: &RatePair) -> Result<()> {
        if *self.read_only.lock() {
            return Err(PersistError::Io {
                path: PathBuf::from("memory"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read only"),
            }
            .into());
        }
        *self.pair.lock() = *pair;
        *self.saves.lock() += 1;
        Ok(())
    }
}
