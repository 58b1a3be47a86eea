//! Fixed-interval polling loop.
//!
//! Each cycle runs one tick (fetch, detect, compose, deliver, persist) and
//! then sleeps for the configured interval, whatever the tick's outcome.
//! Failures are logged and forwarded to the admin channel; they never end
//! the loop and never change the interval.
//!
//! ```text
//! Idle ─► RunningTick ─► Sleeping ─► RunningTick ─► ...
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::composer::NotificationComposer;
use super::detector::ChangeDetector;
use crate::domain::{ChangeReport, RatePair};
use crate::error::{Error, Result};
use crate::port::{Destination, MessageSink, RateCache, RateSource, Renderer};

/// Default pause between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300_000);

/// Where the scheduler is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    RunningTick,
    Sleeping,
}

/// Result of a single tick.
#[derive(Debug)]
pub enum TickOutcome {
    /// No side moved by at least the threshold.
    Unchanged,
    /// The change was delivered and cached.
    Notified(ChangeReport),
    /// Some step failed; later steps were skipped.
    Failed(Error),
}

impl TickOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, TickOutcome::Failed(_))
    }
}

/// Message destinations.
#[derive(Debug, Clone)]
pub struct Routes {
    /// Audience for rate updates.
    pub target: Destination,
    /// Operator chat for error alerts. Alerts are only logged when unset.
    pub admin: Option<Destination>,
}

/// Adapters the scheduler drives.
pub struct Ports {
    pub source: Arc<dyn RateSource>,
    pub cache: Arc<dyn RateCache>,
    pub sink: Arc<dyn MessageSink>,
    pub renderer: Arc<dyn Renderer>,
}

/// Owns the cached baseline and drives ticks forever.
pub struct Scheduler {
    ports: Ports,
    routes: Routes,
    detector: ChangeDetector,
    composer: NotificationComposer,
    interval: Duration,
    baseline: RatePair,
    phase: Phase,
}

impl Scheduler {
    /// Create a scheduler, seeding the baseline from the cache.
    #[must_use]
    pub fn new(ports: Ports, routes: Routes) -> Self {
        let baseline = ports.cache.load();
        Self {
            ports,
            routes,
            detector: ChangeDetector::default(),
            composer: NotificationComposer::default(),
            interval: DEFAULT_INTERVAL,
            baseline,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn with_detector(mut self, detector: ChangeDetector) -> Self {
        self.detector = detector;
        self
    }

    #[must_use]
    pub fn with_composer(mut self, composer: NotificationComposer) -> Self {
        self.composer = composer;
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Last pair the audience was informed about.
    #[must_use]
    pub fn baseline(&self) -> &RatePair {
        &self.baseline
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run cycles until the process is terminated.
    pub async fn run(mut self) {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            threshold = %self.detector.threshold(),
            baseline = %self.baseline,
            "Scheduler started"
        );
        loop {
            self.cycle().await;
        }
    }

    /// One tick followed by one interval of sleep.
    pub async fn cycle(&mut self) -> TickOutcome {
        self.phase = Phase::RunningTick;
        let outcome = match self.tick().await {
            Ok(Some(report)) => TickOutcome::Notified(report),
            Ok(None) => TickOutcome::Unchanged,
            Err(err) => {
                error!(kind = err.kind(), error = %err, "Tick failed");
                self.alert_admin(&err).await;
                TickOutcome::Failed(err)
            }
        };

        self.phase = Phase::Sleeping;
        tokio::time::sleep(self.interval).await;
        outcome
    }

    /// fetch → detect → compose → deliver → persist, stopping at the first error.
    ///
    /// The baseline is promoted only after delivery succeeds.
    async fn tick(&mut self) -> Result<Option<ChangeReport>> {
        debug!("Fetching rates");
        let current = self.ports.source.fetch().await?;
        debug!(downloaded = %current, cached = %self.baseline, "Rates fetched");

        let Some(report) = self.detector.detect(&current, &self.baseline) else {
            debug!("No significant change");
            return Ok(None);
        };

        info!(
            buy = %current.buy(),
            sell = %current.sell(),
            buy_delta = %report.buy_delta,
            sell_delta = %report.sell_delta,
            "Rate change detected"
        );

        let payload = self.composer.compose(&report);
        let message = self.ports.renderer.render_update(&payload);

        debug!(target_chat = %self.routes.target, "Sending update");
        self.ports.sink.send(&self.routes.target, &message).await?;

        self.baseline = current;
        debug!("Caching rates");
        self.ports.cache.save(&current)?;

        Ok(Some(report))
    }

    async fn alert_admin(&self, err: &Error) {
        let Some(admin) = &self.routes.admin else {
            warn!("Unable to send alert, admin id not set");
            return;
        };

        let message = self.ports.renderer.render_alert(&err.to_string());
        if let Err(e) = self.ports.sink.send(admin, &message).await {
            warn!(error = %e, "Failed to deliver admin alert");
        }
    }
}
