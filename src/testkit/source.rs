//! Scripted rate source.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::RatePair;
use crate::error::{FetchError, ParseError, Result};
use crate::port::RateSource;

/// One scripted fetch result.
#[derive(Debug, Clone)]
pub enum Step {
    Quote(RatePair),
    /// Upstream answered 503.
    Unavailable,
    /// Page fetched but the second field was not a number.
    Garbled,
}

/// Replays [`Step`]s in order; the last step repeats once the script runs out.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    steps: Arc<Mutex<VecDeque<Step>>>,
    last: Arc<Mutex<Option<Step>>>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedSource {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into_iter().collect())),
            ..Self::default()
        }
    }

    /// A source that always quotes `pair`.
    pub fn always(pair: RatePair) -> Self {
        Self::new([Step::Quote(pair)])
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl RateSource for ScriptedSource {
    async fn fetch(&self) -> Result<RatePair> {
        *self.calls.lock() += 1;

        let step = {
            let mut last = self.last.lock();
            if let Some(step) = self.steps.lock().pop_front() {
                *last = Some(step);
            }
            last.clone()
        };

        match step {
            Some(Step::Quote(pair)) => Ok(pair),
            Some(Step::Unavailable) | None => Err(FetchError::Status {
                url: "http://rates.test/".into(),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            }
            .into()),
            Some(Step::Garbled) => Err(ParseError::NotANumber {
                buy: "41.10".into(),
                sell: "N/A".into(),
            }
            .into()),
        }
    }
}
